use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::billing::{LedgerPolicy, Quantity, TaxRate};
use crate::domain::orders::{OrderData, OrderError, OrderLineInput, OrderService};

#[derive(Debug, Deserialize)]
pub struct CreateOrderLineDto {
  pub catalog_item_id: Uuid,
  pub quantity: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderCommand {
  pub user_id: Uuid,
  pub customer_id: Uuid,
  pub order_date: NaiveDate,
  pub delivery_date: Option<NaiveDate>,
  pub delivery_address: String,
  /// Defaults to the configured ledger rate.
  pub tax_rate: Option<Decimal>,
  pub notes: Option<String>,
  pub line_items: Vec<CreateOrderLineDto>,
}

#[derive(Debug, Serialize)]
pub struct OrderStockWarningDto {
  pub catalog_item_id: Uuid,
  pub item_name: String,
  pub requested: Decimal,
  pub available: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
  pub order_id: Uuid,
  pub order_number: String,
  pub status: String,
  pub total: Decimal,
  pub stock_warnings: Vec<OrderStockWarningDto>,
}

pub struct CreateOrderUseCase {
  order_service: Arc<OrderService>,
  policy: LedgerPolicy,
}

impl CreateOrderUseCase {
  pub fn new(order_service: Arc<OrderService>, policy: LedgerPolicy) -> Self {
    Self {
      order_service,
      policy,
    }
  }

  pub fn execute(&self, command: CreateOrderCommand) -> Result<CreateOrderResponse, OrderError> {
    let tax_rate = match command.tax_rate {
      Some(rate) => TaxRate::new(rate)?,
      None => self.policy.default_tax_rate,
    };

    let line_items = command
      .line_items
      .into_iter()
      .map(|item| {
        Ok(OrderLineInput {
          catalog_item_id: item.catalog_item_id,
          quantity: Quantity::new(item.quantity)?,
        })
      })
      .collect::<Result<Vec<_>, OrderError>>()?;

    let data = OrderData {
      customer_id: command.customer_id,
      tax_rate,
      currency: self.policy.currency,
      order_date: command.order_date,
      delivery_date: command.delivery_date,
      delivery_address: command.delivery_address,
      notes: command.notes,
      line_items,
    };

    let (order, warnings) = self.order_service.create_order(command.user_id, data)?;
    let totals = order.totals()?;

    Ok(CreateOrderResponse {
      order_id: order.id,
      order_number: order.order_number.into_inner(),
      status: order.status.as_str().to_string(),
      total: totals.total.amount,
      stock_warnings: warnings
        .into_iter()
        .map(|w| OrderStockWarningDto {
          catalog_item_id: w.catalog_item_id,
          item_name: w.item_name,
          requested: w.requested,
          available: w.available,
        })
        .collect(),
    })
  }
}
