use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::billing::{BillingDocument, BillingError, DocumentStatus, LedgerService};

#[derive(Debug, Deserialize)]
pub struct ListDocumentsCommand {
  pub user_id: Uuid,
  /// Stored status name, or "overdue" for the derived past-due view.
  pub status: Option<String>,
  pub customer_id: Option<Uuid>,
  pub today: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct DocumentSummaryDto {
  pub document_id: Uuid,
  pub document_number: String,
  pub document_type: String,
  pub customer_id: Uuid,
  pub status: String,
  pub display_status: String,
  pub total: Decimal,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ListDocumentsResponse {
  pub documents: Vec<DocumentSummaryDto>,
}

pub struct ListDocumentsUseCase {
  ledger_service: Arc<LedgerService>,
}

impl ListDocumentsUseCase {
  pub fn new(ledger_service: Arc<LedgerService>) -> Self {
    Self { ledger_service }
  }

  pub fn execute(&self, command: ListDocumentsCommand) -> Result<ListDocumentsResponse, BillingError> {
    let documents = match command.status.as_deref() {
      Some("overdue") => self
        .ledger_service
        .list_overdue(command.user_id, command.today)?,
      Some(status) => {
        let status = DocumentStatus::from_str(status)?;
        self
          .ledger_service
          .list_documents(command.user_id, Some(status), command.customer_id)?
      }
      None => self
        .ledger_service
        .list_documents(command.user_id, None, command.customer_id)?,
    };

    let documents = documents
      .iter()
      .map(|d| Self::summarize(d, command.today))
      .collect::<Result<Vec<_>, BillingError>>()?;

    Ok(ListDocumentsResponse { documents })
  }

  fn summarize(
    document: &BillingDocument,
    today: NaiveDate,
  ) -> Result<DocumentSummaryDto, BillingError> {
    let totals = document.totals()?;
    Ok(DocumentSummaryDto {
      document_id: document.id,
      document_number: document.document_number.value().to_string(),
      document_type: document.document_type.as_str().to_string(),
      customer_id: document.customer_id,
      status: document.status.as_str().to_string(),
      display_status: document.display_status(today).to_string(),
      total: totals.total.amount,
      issue_date: document.issue_date,
      due_date: document.due_date,
    })
  }
}
