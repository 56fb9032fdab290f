use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::billing::{
  BillingError, DocumentData, DocumentLineInput, DocumentType, LedgerPolicy, LedgerService,
  Quantity, TaxRate,
};

#[derive(Debug, Deserialize)]
pub struct CreateDocumentLineDto {
  pub catalog_item_id: Uuid,
  pub quantity: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateDocumentCommand {
  pub user_id: Uuid,
  pub document_type: String,
  pub customer_id: Uuid,
  pub driver_name: Option<String>,
  pub issue_date: NaiveDate,
  /// Defaults to issue date plus the configured payment terms.
  pub due_date: Option<NaiveDate>,
  /// Defaults to the configured ledger rate.
  pub tax_rate: Option<Decimal>,
  pub notes: Option<String>,
  pub line_items: Vec<CreateDocumentLineDto>,
}

#[derive(Debug, Serialize)]
pub struct StockWarningDto {
  pub catalog_item_id: Uuid,
  pub item_name: String,
  pub requested: Decimal,
  pub available: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CreateDocumentResponse {
  pub document_id: Uuid,
  pub document_number: String,
  pub status: String,
  pub total: Decimal,
  pub total_formatted: String,
  pub stock_warnings: Vec<StockWarningDto>,
}

pub struct CreateDocumentUseCase {
  ledger_service: Arc<LedgerService>,
  policy: LedgerPolicy,
}

impl CreateDocumentUseCase {
  pub fn new(ledger_service: Arc<LedgerService>, policy: LedgerPolicy) -> Self {
    Self {
      ledger_service,
      policy,
    }
  }

  pub fn execute(
    &self,
    command: CreateDocumentCommand,
  ) -> Result<CreateDocumentResponse, BillingError> {
    let document_type = DocumentType::from_str(&command.document_type)?;

    let tax_rate = match command.tax_rate {
      Some(rate) => TaxRate::new(rate)?,
      None => self.policy.default_tax_rate,
    };
    let due_date = command
      .due_date
      .unwrap_or(command.issue_date + Duration::days(self.policy.payment_due_days));

    let line_items = command
      .line_items
      .into_iter()
      .map(|item| {
        Ok(DocumentLineInput {
          catalog_item_id: item.catalog_item_id,
          quantity: Quantity::new(item.quantity)?,
        })
      })
      .collect::<Result<Vec<_>, BillingError>>()?;

    let data = DocumentData {
      document_type,
      customer_id: command.customer_id,
      driver_name: command.driver_name,
      tax_rate,
      currency: self.policy.currency,
      issue_date: command.issue_date,
      due_date,
      notes: command.notes,
      line_items,
    };

    let (document, warnings) = self.ledger_service.create_document(command.user_id, data)?;
    let totals = document.totals()?;

    Ok(CreateDocumentResponse {
      document_id: document.id,
      document_number: document.document_number.into_inner(),
      status: document.status.as_str().to_string(),
      total: totals.total.amount,
      total_formatted: document.currency.format(totals.total.amount),
      stock_warnings: warnings
        .into_iter()
        .map(|w| StockWarningDto {
          catalog_item_id: w.catalog_item_id,
          item_name: w.item_name,
          requested: w.requested,
          available: w.available,
        })
        .collect(),
    })
  }
}
