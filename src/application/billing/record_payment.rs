use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::billing::{
  BillingError, LedgerPolicy, LedgerService, Money, PaymentData, PaymentMethod,
};

#[derive(Debug, Deserialize)]
pub struct RecordPaymentCommand {
  pub user_id: Uuid,
  pub document_id: Uuid,
  pub amount: Decimal,
  pub method: String,
  pub paid_on: NaiveDate,
  pub reference: Option<String>,
  pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecordPaymentResponse {
  pub payment_id: Uuid,
  pub document_id: Uuid,
  pub status: String,
  pub paid_amount: Decimal,
  pub remaining: Decimal,
  pub remaining_formatted: String,
}

pub struct RecordPaymentUseCase {
  ledger_service: Arc<LedgerService>,
  policy: LedgerPolicy,
}

impl RecordPaymentUseCase {
  pub fn new(ledger_service: Arc<LedgerService>, policy: LedgerPolicy) -> Self {
    Self {
      ledger_service,
      policy,
    }
  }

  pub fn execute(
    &self,
    command: RecordPaymentCommand,
  ) -> Result<RecordPaymentResponse, BillingError> {
    let method = PaymentMethod::from_str(&command.method)?;
    let amount = Money::new(command.amount, self.policy.currency)?;

    let data = PaymentData {
      amount,
      method,
      paid_on: command.paid_on,
      reference: command.reference,
      notes: command.notes,
    };

    let (document, payment) =
      self
        .ledger_service
        .record_payment(command.user_id, command.document_id, data)?;
    let remaining = document.remaining_amount()?;

    Ok(RecordPaymentResponse {
      payment_id: payment.id,
      document_id: document.id,
      status: document.status.as_str().to_string(),
      paid_amount: document.paid_amount.amount,
      remaining: remaining.amount,
      remaining_formatted: document.currency.format(remaining.amount),
    })
  }
}
