use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use super::value_objects::{DocumentStatus, DocumentType, ValueObjectError};

#[derive(Debug, Error)]
pub enum BillingError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Unknown catalog item: {0}")]
  UnknownItem(Uuid),

  #[error("Customer not found: {0}")]
  CustomerNotFound(Uuid),

  #[error("Document not found: {0}")]
  DocumentNotFound(Uuid),

  #[error("Line item not found: {0}")]
  LineItemNotFound(Uuid),

  #[error("No line items provided")]
  NoLineItems,

  #[error("Cannot edit document: {0}")]
  CannotEditDocument(String),

  #[error("Invalid status transition: {from:?} -> {to:?}")]
  InvalidStatusTransition {
    from: DocumentStatus,
    to: DocumentStatus,
  },

  #[error("Invalid payment amount: {0}")]
  InvalidPaymentAmount(Decimal),

  #[error("Payment of {requested} rejected: only {remaining} remaining")]
  OverpaymentRejected {
    requested: Decimal,
    remaining: Decimal,
  },

  #[error("Document type {0:?} does not accept payments")]
  PaymentNotSupported(DocumentType),

  #[error("Payments cannot be applied to a {0:?} document")]
  PaymentNotAllowed(DocumentStatus),

  #[error("Delivery notes require a driver name")]
  DriverNameRequired,

  #[error("Currency mismatch: expected {expected}, got {actual}")]
  CurrencyMismatch { expected: String, actual: String },

  #[error("Permission denied: {0}")]
  PermissionDenied(String),

  #[error("Repository error: {0}")]
  Repository(String),
}
