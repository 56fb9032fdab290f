use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::billing::{entities::Payment, errors::BillingError, ports::PaymentRepository};

/// Append-only in-memory payment history. Records are never updated or
/// removed once written.
#[derive(Default)]
pub struct MemoryPaymentRepository {
  payments: RwLock<Vec<Payment>>,
}

impl MemoryPaymentRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Payment>>, BillingError> {
    self
      .payments
      .read()
      .map_err(|_| BillingError::Repository("payment store lock poisoned".to_string()))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Payment>>, BillingError> {
    self
      .payments
      .write()
      .map_err(|_| BillingError::Repository("payment store lock poisoned".to_string()))
  }
}

impl PaymentRepository for MemoryPaymentRepository {
  fn append(&self, payment: Payment) -> Result<Payment, BillingError> {
    self.write()?.push(payment.clone());
    Ok(payment)
  }

  fn find_by_document_id(&self, document_id: Uuid) -> Result<Vec<Payment>, BillingError> {
    Ok(
      self
        .read()?
        .iter()
        .filter(|p| p.document_id == document_id)
        .cloned()
        .collect(),
    )
  }
}
