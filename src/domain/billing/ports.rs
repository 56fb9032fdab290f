use uuid::Uuid;

use super::entities::{BillingDocument, Customer, Payment};
use super::errors::BillingError;
use super::value_objects::{DocumentStatus, DocumentType};

pub trait CustomerRepository: Send + Sync {
  fn create(&self, customer: Customer) -> Result<Customer, BillingError>;
  fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, BillingError>;
  fn list(&self) -> Result<Vec<Customer>, BillingError>;
}

pub trait DocumentRepository: Send + Sync {
  fn create(&self, document: BillingDocument) -> Result<BillingDocument, BillingError>;
  fn update(&self, document: BillingDocument) -> Result<BillingDocument, BillingError>;
  fn find_by_id(&self, id: Uuid) -> Result<Option<BillingDocument>, BillingError>;
  fn list(&self) -> Result<Vec<BillingDocument>, BillingError>;
  fn list_by_status(&self, status: DocumentStatus) -> Result<Vec<BillingDocument>, BillingError>;
  fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<BillingDocument>, BillingError>;
  fn count_by_type(&self, document_type: DocumentType) -> Result<usize, BillingError>;
}

/// Append-only: payments are never updated or deleted.
pub trait PaymentRepository: Send + Sync {
  fn append(&self, payment: Payment) -> Result<Payment, BillingError>;
  fn find_by_document_id(&self, document_id: Uuid) -> Result<Vec<Payment>, BillingError>;
}
