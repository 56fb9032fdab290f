use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::entities::{CatalogItem, Unit};

use super::errors::BillingError;
use super::value_objects::{
  Currency, DocumentNumber, DocumentStatus, DocumentType, Money, PaymentMethod, Quantity, TaxRate,
  ValueObjectError,
};

/// A remaining balance at or below this threshold settles the document.
/// Amounts are exact decimals internally; the tolerance only absorbs
/// sub-millime residue coming in from UI boundaries.
pub const SETTLEMENT_TOLERANCE: Decimal = dec!(0.01);

// Customer - directory entry referenced by documents and orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
  pub id: Uuid,
  pub name: String,
  pub company: Option<String>,
  pub email: String,
  pub phone: String,
  pub address: String,
  pub tax_id: Option<String>,
  pub created_at: DateTime<Utc>,
}

impl Customer {
  pub fn new(
    name: String,
    company: Option<String>,
    email: String,
    phone: String,
    address: String,
    tax_id: Option<String>,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      name,
      company,
      email,
      phone,
      address,
      tax_id,
      created_at: Utc::now(),
    }
  }
}

// Line Item - one catalog item + quantity entry.
// The line total is always derived from quantity x unit price, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
  pub id: Uuid,
  pub catalog_item_id: Uuid,
  pub name: String,
  pub quantity: Quantity,
  pub unit_price: Money,
  pub unit: Unit,
}

impl LineItem {
  pub fn new(catalog_item: &CatalogItem, quantity: Quantity) -> Self {
    Self {
      id: Uuid::new_v4(),
      catalog_item_id: catalog_item.id,
      name: catalog_item.name.clone(),
      quantity,
      unit_price: catalog_item.unit_price,
      unit: catalog_item.unit,
    }
  }

  pub fn line_total(&self) -> Money {
    self.unit_price.multiply(self.quantity.value())
  }
}

/// Raised when a requested quantity exceeds the catalog stock on hand.
/// Purely advisory: the quantity is never clamped and the add never blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockWarning {
  pub catalog_item_id: Uuid,
  pub item_name: String,
  pub requested: Decimal,
  pub available: Decimal,
}

// Line-Item Aggregator - ordered sequence keyed by catalog item reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItems(Vec<LineItem>);

impl LineItems {
  pub fn new() -> Self {
    Self(Vec::new())
  }

  pub fn items(&self) -> &[LineItem] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Merges into an existing entry for the same catalog item, or appends a
  /// new one. Returns a stock warning when the resulting quantity exceeds
  /// the stock on hand.
  pub fn add_or_merge(
    &mut self,
    catalog_item: &CatalogItem,
    quantity: Quantity,
  ) -> Result<Option<StockWarning>, ValueObjectError> {
    let merged_quantity = match self
      .0
      .iter_mut()
      .find(|line| line.catalog_item_id == catalog_item.id)
    {
      Some(existing) => {
        let combined = Quantity::new(existing.quantity.value() + quantity.value())?;
        existing.quantity = combined;
        combined
      }
      None => {
        self.0.push(LineItem::new(catalog_item, quantity));
        quantity
      }
    };

    if merged_quantity.value() > catalog_item.current_stock {
      return Ok(Some(StockWarning {
        catalog_item_id: catalog_item.id,
        item_name: catalog_item.name.clone(),
        requested: merged_quantity.value(),
        available: catalog_item.current_stock,
      }));
    }
    Ok(None)
  }

  /// Removes the entry if present. Idempotent: a second call is a no-op.
  pub fn remove(&mut self, line_item_id: Uuid) {
    self.0.retain(|line| line.id != line_item_id);
  }

  pub fn set_quantity(
    &mut self,
    line_item_id: Uuid,
    quantity: Quantity,
  ) -> Result<(), BillingError> {
    let line = self
      .0
      .iter_mut()
      .find(|line| line.id == line_item_id)
      .ok_or(BillingError::LineItemNotFound(line_item_id))?;
    line.quantity = quantity;
    Ok(())
  }

  pub fn subtotal(&self, currency: Currency) -> Result<Money, ValueObjectError> {
    self
      .0
      .iter()
      .try_fold(Money::zero(currency), |acc, line| acc.add(&line.line_total()))
  }
}

// Totals - calculated from line items, never persisted independently
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
  pub subtotal: Money,
  pub tax_amount: Money,
  pub total: Money,
}

impl Totals {
  pub fn calculate(
    line_items: &LineItems,
    tax_rate: TaxRate,
    apply_tax: bool,
    currency: Currency,
  ) -> Result<Self, ValueObjectError> {
    let subtotal = line_items.subtotal(currency)?;
    let tax_amount = if apply_tax {
      subtotal.multiply(tax_rate.as_multiplier())
    } else {
      Money::zero(currency)
    };
    let total = subtotal.add(&tax_amount)?;

    Ok(Self {
      subtotal,
      tax_amount,
      total,
    })
  }
}

// Payment - append-only audit record; never mutated or deleted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
  pub id: Uuid,
  pub document_id: Uuid,
  pub amount: Money,
  pub method: PaymentMethod,
  pub paid_on: NaiveDate,
  pub reference: Option<String>,
  pub notes: Option<String>,
  pub recorded_by: Uuid,
  pub recorded_at: DateTime<Utc>,
}

impl Payment {
  pub fn new(
    document_id: Uuid,
    amount: Money,
    method: PaymentMethod,
    paid_on: NaiveDate,
    reference: Option<String>,
    notes: Option<String>,
    recorded_by: Uuid,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      document_id,
      amount,
      method,
      paid_on,
      reference,
      notes,
      recorded_by,
      recorded_at: Utc::now(),
    }
  }
}

// Billing Document - invoice, delivery note, purchase note or quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingDocument {
  pub id: Uuid,
  pub document_number: DocumentNumber,
  pub document_type: DocumentType,
  pub customer_id: Uuid,
  pub driver_name: Option<String>,
  pub line_items: LineItems,
  pub tax_rate: TaxRate,
  pub currency: Currency,
  pub paid_amount: Money,
  pub status: DocumentStatus,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub paid_date: Option<NaiveDate>,
  pub notes: Option<String>,
  pub created_by: Uuid,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl BillingDocument {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    document_number: DocumentNumber,
    document_type: DocumentType,
    customer_id: Uuid,
    driver_name: Option<String>,
    line_items: LineItems,
    tax_rate: TaxRate,
    currency: Currency,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    notes: Option<String>,
    created_by: Uuid,
  ) -> Result<Self, BillingError> {
    if line_items.is_empty() {
      return Err(BillingError::NoLineItems);
    }
    for line in line_items.items() {
      if line.unit_price.currency != currency {
        return Err(BillingError::CurrencyMismatch {
          expected: currency.as_str().to_string(),
          actual: line.unit_price.currency.as_str().to_string(),
        });
      }
    }

    let config = document_type.config();
    let driver_name = if config.show_driver {
      match driver_name {
        Some(name) if !name.trim().is_empty() => Some(name),
        _ => return Err(BillingError::DriverNameRequired),
      }
    } else {
      None
    };

    let now = Utc::now();
    Ok(Self {
      id: Uuid::new_v4(),
      document_number,
      document_type,
      customer_id,
      driver_name,
      line_items,
      tax_rate,
      currency,
      paid_amount: Money::zero(currency),
      status: DocumentStatus::Draft,
      issue_date,
      due_date,
      paid_date: None,
      notes,
      created_by,
      created_at: now,
      updated_at: now,
    })
  }

  /// Subtotal, tax and total derived from the current line items. Tax is
  /// suppressed for document types that do not carry it (delivery notes).
  pub fn totals(&self) -> Result<Totals, ValueObjectError> {
    Totals::calculate(
      &self.line_items,
      self.tax_rate,
      self.document_type.config().show_tax,
      self.currency,
    )
  }

  pub fn remaining_amount(&self) -> Result<Money, ValueObjectError> {
    self.totals()?.total.subtract(&self.paid_amount)
  }

  /// Line items are frozen once any payment has been recorded, so totals can
  /// never drift away from payments already applied against them.
  pub fn can_edit_items(&self) -> bool {
    self.paid_amount.is_zero()
      && matches!(self.status, DocumentStatus::Draft | DocumentStatus::Sent)
  }

  fn ensure_editable(&self) -> Result<(), BillingError> {
    if !self.can_edit_items() {
      return Err(BillingError::CannotEditDocument(format!(
        "Document {} is {} with payments recorded",
        self.document_number,
        self.status.as_str()
      )));
    }
    Ok(())
  }

  pub fn add_item(
    &mut self,
    catalog_item: &CatalogItem,
    quantity: Quantity,
  ) -> Result<Option<StockWarning>, BillingError> {
    self.ensure_editable()?;
    if catalog_item.unit_price.currency != self.currency {
      return Err(BillingError::CurrencyMismatch {
        expected: self.currency.as_str().to_string(),
        actual: catalog_item.unit_price.currency.as_str().to_string(),
      });
    }
    let warning = self.line_items.add_or_merge(catalog_item, quantity)?;
    self.updated_at = Utc::now();
    Ok(warning)
  }

  pub fn remove_item(&mut self, line_item_id: Uuid) -> Result<(), BillingError> {
    self.ensure_editable()?;
    self.line_items.remove(line_item_id);
    self.updated_at = Utc::now();
    Ok(())
  }

  pub fn set_item_quantity(
    &mut self,
    line_item_id: Uuid,
    quantity: Quantity,
  ) -> Result<(), BillingError> {
    self.ensure_editable()?;
    self.line_items.set_quantity(line_item_id, quantity)?;
    self.updated_at = Utc::now();
    Ok(())
  }

  /// Applies a payment and advances the reconciliation state machine.
  ///
  /// All preconditions are checked before any field is touched, so a failing
  /// call leaves the document exactly as it was. Returns the append-only
  /// payment record for the audit trail.
  pub fn apply_payment(
    &mut self,
    amount: Money,
    method: PaymentMethod,
    paid_on: NaiveDate,
    reference: Option<String>,
    notes: Option<String>,
    recorded_by: Uuid,
  ) -> Result<Payment, BillingError> {
    if !self.document_type.config().show_payment {
      return Err(BillingError::PaymentNotSupported(self.document_type));
    }
    if !self.status.accepts_payment() {
      return Err(BillingError::PaymentNotAllowed(self.status));
    }
    if amount.currency != self.currency {
      return Err(BillingError::CurrencyMismatch {
        expected: self.currency.as_str().to_string(),
        actual: amount.currency.as_str().to_string(),
      });
    }
    if amount.amount <= Decimal::ZERO {
      return Err(BillingError::InvalidPaymentAmount(amount.amount));
    }

    let remaining = self.remaining_amount()?;
    if amount.amount > remaining.amount {
      return Err(BillingError::OverpaymentRejected {
        requested: amount.amount,
        remaining: remaining.amount,
      });
    }

    self.paid_amount = self.paid_amount.add(&amount)?;
    let remaining = self.remaining_amount()?;

    if remaining.amount <= SETTLEMENT_TOLERANCE {
      self.status = DocumentStatus::Paid;
      if self.paid_date.is_none() {
        self.paid_date = Some(paid_on);
      }
    } else {
      self.status = DocumentStatus::Partial;
    }
    self.updated_at = Utc::now();

    Ok(Payment::new(
      self.id,
      amount,
      method,
      paid_on,
      reference,
      notes,
      recorded_by,
    ))
  }

  /// External status changes (send, cancel). Partial and Paid are reached
  /// exclusively through `apply_payment`.
  pub fn change_status(&mut self, new_status: DocumentStatus) -> Result<(), BillingError> {
    if matches!(
      new_status,
      DocumentStatus::Partial | DocumentStatus::Paid
    ) || !self.status.can_transition_to(new_status)
    {
      return Err(BillingError::InvalidStatusTransition {
        from: self.status,
        to: new_status,
      });
    }
    self.status = new_status;
    self.updated_at = Utc::now();
    Ok(())
  }

  /// Derived, never persisted. False for settled and cancelled documents
  /// even past the due date.
  pub fn is_overdue(&self, today: NaiveDate) -> bool {
    today > self.due_date && !self.status.is_terminal()
  }

  /// Presentation status: the stored status, or "overdue" when derived so.
  pub fn display_status(&self, today: NaiveDate) -> &'static str {
    if self.is_overdue(today) {
      "overdue"
    } else {
      self.status.as_str()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn catalog_item(name: &str, unit_price: Decimal, stock: Decimal) -> CatalogItem {
    CatalogItem::new(
      name.to_string(),
      None,
      "Gros oeuvre".to_string(),
      "Fournisseur Test".to_string(),
      Unit::Sacs,
      stock,
      dec!(10),
      Money::new(unit_price, Currency::TND).unwrap(),
    )
  }

  fn document(document_type: DocumentType, line_items: LineItems) -> BillingDocument {
    BillingDocument::new(
      DocumentNumber::next(document_type, 2024, 0),
      document_type,
      Uuid::new_v4(),
      Some("Karim Chauffeur".to_string()),
      line_items,
      TaxRate::new(dec!(20)).unwrap(),
      Currency::TND,
      NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
      NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
      None,
      Uuid::new_v4(),
    )
    .unwrap()
  }

  fn invoice_10_at_5() -> BillingDocument {
    let item = catalog_item("Ciment Portland", dec!(5.00), dec!(100));
    let mut lines = LineItems::new();
    lines.add_or_merge(&item, Quantity::new(dec!(10)).unwrap()).unwrap();
    document(DocumentType::Invoice, lines)
  }

  #[test]
  fn test_add_or_merge_merges_same_catalog_item() {
    let item = catalog_item("Sable", dec!(30), dec!(500));
    let mut lines = LineItems::new();
    lines.add_or_merge(&item, Quantity::new(dec!(3)).unwrap()).unwrap();
    lines.add_or_merge(&item, Quantity::new(dec!(2)).unwrap()).unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines.items()[0].quantity.value(), dec!(5));
    assert_eq!(lines.items()[0].line_total().amount, dec!(150));
  }

  #[test]
  fn test_add_or_merge_appends_distinct_items() {
    let cement = catalog_item("Ciment", dec!(5), dec!(100));
    let sand = catalog_item("Sable", dec!(30), dec!(500));
    let mut lines = LineItems::new();
    lines.add_or_merge(&cement, Quantity::new(dec!(10)).unwrap()).unwrap();
    lines.add_or_merge(&sand, Quantity::new(dec!(2)).unwrap()).unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines.subtotal(Currency::TND).unwrap().amount, dec!(110));
  }

  #[test]
  fn test_add_warns_on_stock_shortfall_without_clamping() {
    let item = catalog_item("Gravier", dec!(40), dec!(8));
    let mut lines = LineItems::new();
    let warning = lines
      .add_or_merge(&item, Quantity::new(dec!(12)).unwrap())
      .unwrap()
      .expect("expected a stock warning");

    assert_eq!(warning.requested, dec!(12));
    assert_eq!(warning.available, dec!(8));
    // never clamped
    assert_eq!(lines.items()[0].quantity.value(), dec!(12));
  }

  #[test]
  fn test_remove_is_idempotent() {
    let item = catalog_item("Ciment", dec!(5), dec!(100));
    let mut lines = LineItems::new();
    lines.add_or_merge(&item, Quantity::new(dec!(1)).unwrap()).unwrap();
    let id = lines.items()[0].id;

    lines.remove(id);
    assert!(lines.is_empty());
    lines.remove(id); // no-op
    assert!(lines.is_empty());
  }

  #[test]
  fn test_set_quantity_recomputes_line_total() {
    let item = catalog_item("Ciment", dec!(5), dec!(100));
    let mut lines = LineItems::new();
    lines.add_or_merge(&item, Quantity::new(dec!(1)).unwrap()).unwrap();
    let id = lines.items()[0].id;

    lines.set_quantity(id, Quantity::new(dec!(7)).unwrap()).unwrap();
    assert_eq!(lines.items()[0].line_total().amount, dec!(35));

    let missing = Uuid::new_v4();
    assert!(matches!(
      lines.set_quantity(missing, Quantity::new(dec!(1)).unwrap()),
      Err(BillingError::LineItemNotFound(id)) if id == missing
    ));
  }

  #[test]
  fn test_invoice_totals_scenario() {
    // lineItems [{qty:10, unitPrice:5.00}], taxRate 20, type invoice
    let invoice = invoice_10_at_5();
    let totals = invoice.totals().unwrap();
    assert_eq!(totals.subtotal.amount, dec!(50.00));
    assert_eq!(totals.tax_amount.amount, dec!(10.00));
    assert_eq!(totals.total.amount, dec!(60.00));
  }

  #[test]
  fn test_delivery_note_never_carries_tax() {
    let item = catalog_item("Briques", dec!(0.8), dec!(10000));
    let mut lines = LineItems::new();
    lines.add_or_merge(&item, Quantity::new(dec!(500)).unwrap()).unwrap();
    let note = document(DocumentType::DeliveryNote, lines);

    let totals = note.totals().unwrap();
    assert_eq!(totals.tax_amount.amount, Decimal::ZERO);
    assert_eq!(totals.total, totals.subtotal);
  }

  #[test]
  fn test_delivery_note_requires_driver_name() {
    let item = catalog_item("Briques", dec!(0.8), dec!(10000));
    let mut lines = LineItems::new();
    lines.add_or_merge(&item, Quantity::new(dec!(10)).unwrap()).unwrap();

    let result = BillingDocument::new(
      DocumentNumber::next(DocumentType::DeliveryNote, 2024, 0),
      DocumentType::DeliveryNote,
      Uuid::new_v4(),
      None,
      lines,
      TaxRate::new(dec!(20)).unwrap(),
      Currency::TND,
      NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
      NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
      None,
      Uuid::new_v4(),
    );
    assert!(matches!(result, Err(BillingError::DriverNameRequired)));
  }

  #[test]
  fn test_invoice_drops_driver_name() {
    let invoice = invoice_10_at_5();
    assert_eq!(invoice.driver_name, None);
  }

  #[test]
  fn test_full_payment_settles_document() {
    let mut invoice = invoice_10_at_5();
    invoice.change_status(DocumentStatus::Sent).unwrap();

    let paid_on = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    invoice
      .apply_payment(
        Money::new(dec!(60.00), Currency::TND).unwrap(),
        PaymentMethod::Transfer,
        paid_on,
        Some("VIR-889".to_string()),
        None,
        Uuid::new_v4(),
      )
      .unwrap();

    assert_eq!(invoice.status, DocumentStatus::Paid);
    assert_eq!(invoice.remaining_amount().unwrap().amount, dec!(0.00));
    assert_eq!(invoice.paid_date, Some(paid_on));
  }

  #[test]
  fn test_partial_payment() {
    let mut invoice = invoice_10_at_5();
    invoice.change_status(DocumentStatus::Sent).unwrap();

    invoice
      .apply_payment(
        Money::new(dec!(25.00), Currency::TND).unwrap(),
        PaymentMethod::Cash,
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        None,
        None,
        Uuid::new_v4(),
      )
      .unwrap();

    assert_eq!(invoice.status, DocumentStatus::Partial);
    assert_eq!(invoice.remaining_amount().unwrap().amount, dec!(35.00));
    assert_eq!(invoice.paid_date, None);

    // paid + remaining == total, always
    let totals = invoice.totals().unwrap();
    assert_eq!(
      invoice.paid_amount.amount + invoice.remaining_amount().unwrap().amount,
      totals.total.amount
    );
  }

  #[test]
  fn test_overpayment_rejected_without_mutation() {
    let mut invoice = invoice_10_at_5();
    invoice.change_status(DocumentStatus::Sent).unwrap();
    let before = invoice.clone();

    let result = invoice.apply_payment(
      Money::new(dec!(70.00), Currency::TND).unwrap(),
      PaymentMethod::Cash,
      NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
      None,
      None,
      Uuid::new_v4(),
    );

    assert!(matches!(
      result,
      Err(BillingError::OverpaymentRejected { requested, remaining })
        if requested == dec!(70.00) && remaining == dec!(60.00)
    ));
    assert_eq!(invoice, before);
  }

  #[test]
  fn test_payment_rejected_on_draft_and_on_quote() {
    let mut invoice = invoice_10_at_5();
    let result = invoice.apply_payment(
      Money::new(dec!(10), Currency::TND).unwrap(),
      PaymentMethod::Cash,
      NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
      None,
      None,
      Uuid::new_v4(),
    );
    assert!(matches!(
      result,
      Err(BillingError::PaymentNotAllowed(DocumentStatus::Draft))
    ));

    let item = catalog_item("Ciment", dec!(5), dec!(100));
    let mut lines = LineItems::new();
    lines.add_or_merge(&item, Quantity::new(dec!(1)).unwrap()).unwrap();
    let mut quote = document(DocumentType::Quote, lines);
    quote.change_status(DocumentStatus::Sent).unwrap();
    let result = quote.apply_payment(
      Money::new(dec!(1), Currency::TND).unwrap(),
      PaymentMethod::Cash,
      NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
      None,
      None,
      Uuid::new_v4(),
    );
    assert!(matches!(
      result,
      Err(BillingError::PaymentNotSupported(DocumentType::Quote))
    ));
  }

  #[test]
  fn test_payments_drive_partial_and_paid_exclusively() {
    let mut invoice = invoice_10_at_5();
    assert!(invoice.change_status(DocumentStatus::Paid).is_err());
    invoice.change_status(DocumentStatus::Sent).unwrap();
    assert!(invoice.change_status(DocumentStatus::Partial).is_err());
    assert!(invoice.change_status(DocumentStatus::Cancelled).is_ok());
  }

  #[test]
  fn test_items_frozen_after_first_payment() {
    let mut invoice = invoice_10_at_5();
    invoice.change_status(DocumentStatus::Sent).unwrap();
    assert!(invoice.can_edit_items());

    invoice
      .apply_payment(
        Money::new(dec!(5), Currency::TND).unwrap(),
        PaymentMethod::Cash,
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        None,
        None,
        Uuid::new_v4(),
      )
      .unwrap();

    let item = catalog_item("Sable", dec!(30), dec!(500));
    assert!(matches!(
      invoice.add_item(&item, Quantity::new(dec!(1)).unwrap()),
      Err(BillingError::CannotEditDocument(_))
    ));
    let line_id = invoice.line_items.items()[0].id;
    assert!(invoice.remove_item(line_id).is_err());
    assert!(invoice
      .set_item_quantity(line_id, Quantity::new(dec!(2)).unwrap())
      .is_err());
  }

  #[test]
  fn test_is_overdue_is_derived_not_stored() {
    let mut invoice = invoice_10_at_5();
    invoice.change_status(DocumentStatus::Sent).unwrap();

    let before_due = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    let after_due = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();

    assert!(!invoice.is_overdue(before_due));
    assert!(invoice.is_overdue(after_due));
    assert_eq!(invoice.display_status(after_due), "overdue");
    assert_eq!(invoice.status, DocumentStatus::Sent); // never transitions

    invoice
      .apply_payment(
        Money::new(dec!(60.00), Currency::TND).unwrap(),
        PaymentMethod::Transfer,
        after_due,
        None,
        None,
        Uuid::new_v4(),
      )
      .unwrap();
    assert!(!invoice.is_overdue(after_due)); // false right after settling
    assert_eq!(invoice.display_status(after_due), "paid");
  }

  #[test]
  fn test_cancelled_document_is_never_overdue() {
    let mut invoice = invoice_10_at_5();
    invoice.change_status(DocumentStatus::Cancelled).unwrap();
    let after_due = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
    assert!(!invoice.is_overdue(after_due));
  }

  #[test]
  fn test_status_serializes_lowercase() {
    let json = serde_json::to_string(&DocumentStatus::Partial).unwrap();
    assert_eq!(json, "\"partial\"");
    let invoice = invoice_10_at_5();
    let json = serde_json::to_string(&invoice).unwrap();
    assert!(json.contains("\"status\":\"draft\""));
    assert!(json.contains("\"document_type\":\"invoice\""));
  }
}
