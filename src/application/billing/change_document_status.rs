use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::billing::{BillingError, DocumentStatus, LedgerService};

#[derive(Debug, Deserialize)]
pub struct ChangeDocumentStatusCommand {
  pub user_id: Uuid,
  pub document_id: Uuid,
  pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ChangeDocumentStatusResponse {
  pub document_id: Uuid,
  pub document_number: String,
  pub status: String,
}

pub struct ChangeDocumentStatusUseCase {
  ledger_service: Arc<LedgerService>,
}

impl ChangeDocumentStatusUseCase {
  pub fn new(ledger_service: Arc<LedgerService>) -> Self {
    Self { ledger_service }
  }

  pub fn execute(
    &self,
    command: ChangeDocumentStatusCommand,
  ) -> Result<ChangeDocumentStatusResponse, BillingError> {
    let status = DocumentStatus::from_str(&command.status)?;

    let document =
      self
        .ledger_service
        .change_document_status(command.user_id, command.document_id, status)?;

    Ok(ChangeDocumentStatusResponse {
      document_id: document.id,
      document_number: document.document_number.into_inner(),
      status: document.status.as_str().to_string(),
    })
  }
}
