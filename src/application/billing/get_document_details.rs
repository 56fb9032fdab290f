use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::billing::{BillingError, LedgerService};

#[derive(Debug, Deserialize)]
pub struct GetDocumentDetailsCommand {
  pub user_id: Uuid,
  pub document_id: Uuid,
  /// Reference date for the derived overdue presentation.
  pub today: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct DocumentLineDto {
  pub line_item_id: Uuid,
  pub catalog_item_id: Uuid,
  pub name: String,
  pub quantity: Decimal,
  pub unit: String,
  pub unit_price: Decimal,
  pub line_total: Decimal,
}

#[derive(Debug, Serialize)]
pub struct DocumentPaymentDto {
  pub payment_id: Uuid,
  pub amount: Decimal,
  pub method: String,
  pub paid_on: NaiveDate,
  pub reference: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GetDocumentDetailsResponse {
  pub document_id: Uuid,
  pub document_number: String,
  pub document_type: String,
  pub type_label: String,
  pub status: String,
  /// Stored status, or "overdue" when past due. Presentation only.
  pub display_status: String,
  pub customer_name: String,
  pub customer_company: Option<String>,
  pub driver_name: Option<String>,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub paid_date: Option<NaiveDate>,
  pub notes: Option<String>,
  pub line_items: Vec<DocumentLineDto>,
  pub subtotal: Decimal,
  /// Absent for document types that never carry tax.
  pub tax_amount: Option<Decimal>,
  pub total: Decimal,
  pub total_formatted: String,
  /// Absent for document types that never accept payments.
  pub paid_amount: Option<Decimal>,
  pub remaining: Option<Decimal>,
  pub payments: Vec<DocumentPaymentDto>,
}

pub struct GetDocumentDetailsUseCase {
  ledger_service: Arc<LedgerService>,
}

impl GetDocumentDetailsUseCase {
  pub fn new(ledger_service: Arc<LedgerService>) -> Self {
    Self { ledger_service }
  }

  pub fn execute(
    &self,
    command: GetDocumentDetailsCommand,
  ) -> Result<GetDocumentDetailsResponse, BillingError> {
    let (document, customer, totals, payments) = self
      .ledger_service
      .get_document_details(command.user_id, command.document_id)?;

    let config = document.document_type.config();
    let remaining = document.remaining_amount()?;

    Ok(GetDocumentDetailsResponse {
      document_id: document.id,
      document_number: document.document_number.value().to_string(),
      document_type: document.document_type.as_str().to_string(),
      type_label: config.label.to_string(),
      status: document.status.as_str().to_string(),
      display_status: document.display_status(command.today).to_string(),
      customer_name: customer.name,
      customer_company: customer.company,
      driver_name: document.driver_name.clone(),
      issue_date: document.issue_date,
      due_date: document.due_date,
      paid_date: document.paid_date,
      notes: document.notes.clone(),
      line_items: document
        .line_items
        .items()
        .iter()
        .map(|item| DocumentLineDto {
          line_item_id: item.id,
          catalog_item_id: item.catalog_item_id,
          name: item.name.clone(),
          quantity: item.quantity.value(),
          unit: item.unit.as_str().to_string(),
          unit_price: item.unit_price.amount,
          line_total: item.line_total().amount,
        })
        .collect(),
      subtotal: totals.subtotal.amount,
      tax_amount: config.show_tax.then_some(totals.tax_amount.amount),
      total: totals.total.amount,
      total_formatted: document.currency.format(totals.total.amount),
      paid_amount: config.show_payment.then_some(document.paid_amount.amount),
      remaining: config.show_payment.then_some(remaining.amount),
      payments: payments
        .into_iter()
        .map(|p| DocumentPaymentDto {
          payment_id: p.id,
          amount: p.amount.amount,
          method: p.method.as_str().to_string(),
          paid_on: p.paid_on,
          reference: p.reference,
        })
        .collect(),
    })
  }
}
