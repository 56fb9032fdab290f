use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AccessError {
  #[error("Invalid credentials")]
  InvalidCredentials,

  #[error("User not found: {0}")]
  UserNotFound(Uuid),

  #[error("Invalid role: {0}")]
  InvalidRole(String),

  #[error("Permission denied: {0}")]
  PermissionDenied(String),

  #[error("Repository error: {0}")]
  Repository(String),
}
