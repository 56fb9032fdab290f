use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Catalog item not found: {0}")]
  ItemNotFound(Uuid),

  #[error("Invalid unit of measure: {0}")]
  InvalidUnit(String),

  #[error("Repository error: {0}")]
  Repository(String),
}
