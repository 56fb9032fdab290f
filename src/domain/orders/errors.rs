use thiserror::Error;
use uuid::Uuid;

use crate::domain::billing::value_objects::ValueObjectError;

use super::entities::OrderStatus;

#[derive(Debug, Error)]
pub enum OrderError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Order not found: {0}")]
  OrderNotFound(Uuid),

  #[error("Customer not found: {0}")]
  CustomerNotFound(Uuid),

  #[error("Unknown catalog item: {0}")]
  UnknownItem(Uuid),

  #[error("No line items provided")]
  NoLineItems,

  #[error("Unknown order status: {0}")]
  InvalidStatus(String),

  #[error("Invalid status transition: {from:?} -> {to:?}")]
  InvalidStatusTransition { from: OrderStatus, to: OrderStatus },

  #[error("Cannot edit a {0:?} order")]
  CannotEditOrder(OrderStatus),

  #[error("Currency mismatch: expected {expected}, got {actual}")]
  CurrencyMismatch { expected: String, actual: String },

  #[error("Permission denied: {0}")]
  PermissionDenied(String),

  #[error("Repository error: {0}")]
  Repository(String),
}
