use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::billing::entities::{LineItems, StockWarning, Totals};
use crate::domain::billing::value_objects::{
  Currency, DocumentNumber, Quantity, TaxRate, ValueObjectError,
};
use crate::domain::catalog::entities::CatalogItem;

use super::errors::OrderError;

pub const ORDER_NUMBER_PREFIX: &str = "CMD-";

// Fulfillment status - monotonic pipeline with cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Reserved,
  Preparing,
  Ready,
  Delivered,
  Cancelled,
}

impl OrderStatus {
  fn stage(&self) -> Option<u8> {
    match self {
      OrderStatus::Pending => Some(0),
      OrderStatus::Reserved => Some(1),
      OrderStatus::Preparing => Some(2),
      OrderStatus::Ready => Some(3),
      OrderStatus::Delivered => Some(4),
      OrderStatus::Cancelled => None,
    }
  }

  /// Fulfillment only moves forward; cancellation is allowed from any
  /// non-terminal state.
  pub fn can_transition_to(&self, new_status: OrderStatus) -> bool {
    if self.is_terminal() {
      return false;
    }
    match (self.stage(), new_status.stage()) {
      (_, None) => true, // -> Cancelled
      (Some(from), Some(to)) => to > from,
      (None, Some(_)) => false,
    }
  }

  pub fn is_terminal(&self) -> bool {
    matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Reserved => "reserved",
      OrderStatus::Preparing => "preparing",
      OrderStatus::Ready => "ready",
      OrderStatus::Delivered => "delivered",
      OrderStatus::Cancelled => "cancelled",
    }
  }
}

impl FromStr for OrderStatus {
  type Err = OrderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "pending" => Ok(OrderStatus::Pending),
      "reserved" => Ok(OrderStatus::Reserved),
      "preparing" => Ok(OrderStatus::Preparing),
      "ready" => Ok(OrderStatus::Ready),
      "delivered" => Ok(OrderStatus::Delivered),
      "cancelled" => Ok(OrderStatus::Cancelled),
      _ => Err(OrderError::InvalidStatus(s.to_string())),
    }
  }
}

// Order - pre-billing document with a fulfillment lifecycle; same monetary
// derivation as billing documents, no payment fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  pub order_number: DocumentNumber,
  pub customer_id: Uuid,
  pub line_items: LineItems,
  pub tax_rate: TaxRate,
  pub currency: Currency,
  pub status: OrderStatus,
  pub order_date: NaiveDate,
  pub delivery_date: Option<NaiveDate>,
  pub delivery_address: String,
  pub notes: Option<String>,
  pub created_by: Uuid,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Order {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    order_number: DocumentNumber,
    customer_id: Uuid,
    line_items: LineItems,
    tax_rate: TaxRate,
    currency: Currency,
    order_date: NaiveDate,
    delivery_date: Option<NaiveDate>,
    delivery_address: String,
    notes: Option<String>,
    created_by: Uuid,
  ) -> Result<Self, OrderError> {
    if line_items.is_empty() {
      return Err(OrderError::NoLineItems);
    }

    let now = Utc::now();
    Ok(Self {
      id: Uuid::new_v4(),
      order_number,
      customer_id,
      line_items,
      tax_rate,
      currency,
      status: OrderStatus::Pending,
      order_date,
      delivery_date,
      delivery_address,
      notes,
      created_by,
      created_at: now,
      updated_at: now,
    })
  }

  /// Orders always carry tax.
  pub fn totals(&self) -> Result<Totals, ValueObjectError> {
    Totals::calculate(&self.line_items, self.tax_rate, true, self.currency)
  }

  pub fn change_status(&mut self, new_status: OrderStatus) -> Result<(), OrderError> {
    if !self.status.can_transition_to(new_status) {
      return Err(OrderError::InvalidStatusTransition {
        from: self.status,
        to: new_status,
      });
    }
    self.status = new_status;
    self.updated_at = Utc::now();
    Ok(())
  }

  pub fn can_edit_items(&self) -> bool {
    matches!(self.status, OrderStatus::Pending | OrderStatus::Reserved)
  }

  pub fn add_item(
    &mut self,
    catalog_item: &CatalogItem,
    quantity: Quantity,
  ) -> Result<Option<StockWarning>, OrderError> {
    if !self.can_edit_items() {
      return Err(OrderError::CannotEditOrder(self.status));
    }
    Ok(self.line_items.add_or_merge(catalog_item, quantity)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::billing::value_objects::{Money, Quantity};
  use crate::domain::catalog::entities::Unit;
  use rust_decimal::Decimal;
  use rust_decimal_macros::dec;

  fn order() -> Order {
    let item = CatalogItem::new(
      "Sable de construction".to_string(),
      None,
      "Agrégats".to_string(),
      "Carrière du Nord".to_string(),
      Unit::M3,
      dec!(200),
      dec!(20),
      Money::new(dec!(35.000), Currency::TND).unwrap(),
    );
    let mut lines = LineItems::new();
    lines.add_or_merge(&item, Quantity::new(dec!(4)).unwrap()).unwrap();

    Order::new(
      DocumentNumber::compose(ORDER_NUMBER_PREFIX, 2024, 1),
      Uuid::new_v4(),
      lines,
      TaxRate::new(dec!(20)).unwrap(),
      Currency::TND,
      NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
      None,
      "Chantier Lac 2, Tunis".to_string(),
      None,
      Uuid::new_v4(),
    )
    .unwrap()
  }

  #[test]
  fn test_order_totals_carry_tax() {
    let order = order();
    let totals = order.totals().unwrap();
    assert_eq!(totals.subtotal.amount, dec!(140.000));
    assert_eq!(totals.tax_amount.amount, dec!(28.0000));
    assert_eq!(totals.total.amount, dec!(168.0000));
  }

  #[test]
  fn test_fulfillment_moves_forward_only() {
    let mut order = order();
    assert_eq!(order.status, OrderStatus::Pending);

    order.change_status(OrderStatus::Reserved).unwrap();
    assert!(order.change_status(OrderStatus::Pending).is_err());

    // skipping stages forward is allowed
    order.change_status(OrderStatus::Ready).unwrap();
    order.change_status(OrderStatus::Delivered).unwrap();
    assert!(order.change_status(OrderStatus::Cancelled).is_err());
  }

  #[test]
  fn test_cancellable_until_delivered() {
    let mut order = order();
    order.change_status(OrderStatus::Preparing).unwrap();
    order.change_status(OrderStatus::Cancelled).unwrap();
    assert!(order.change_status(OrderStatus::Ready).is_err());
  }

  #[test]
  fn test_items_frozen_once_preparing() {
    let mut order = order();
    order.change_status(OrderStatus::Preparing).unwrap();
    let item = CatalogItem::new(
      "Gravier 5/15".to_string(),
      None,
      "Agrégats".to_string(),
      "Carrière du Nord".to_string(),
      Unit::M3,
      dec!(50),
      dec!(5),
      Money::new(dec!(42.000), Currency::TND).unwrap(),
    );
    assert!(matches!(
      order.add_item(&item, Quantity::new(dec!(1)).unwrap()),
      Err(OrderError::CannotEditOrder(OrderStatus::Preparing))
    ));
  }

  #[test]
  fn test_order_rejects_empty_lines() {
    let result = Order::new(
      DocumentNumber::compose(ORDER_NUMBER_PREFIX, 2024, 1),
      Uuid::new_v4(),
      LineItems::new(),
      TaxRate::new(dec!(20)).unwrap(),
      Currency::TND,
      NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
      None,
      "Chantier".to_string(),
      None,
      Uuid::new_v4(),
    );
    assert!(matches!(result, Err(OrderError::NoLineItems)));
  }

  #[test]
  fn test_line_total_precision() {
    let order = order();
    let line = &order.line_items.items()[0];
    assert_eq!(line.line_total().amount, Decimal::from(140));
  }
}
