use uuid::Uuid;

use super::entities::CatalogItem;
use super::errors::CatalogError;

pub trait CatalogRepository: Send + Sync {
  fn create(&self, item: CatalogItem) -> Result<CatalogItem, CatalogError>;
  fn update(&self, item: CatalogItem) -> Result<CatalogItem, CatalogError>;
  fn find_by_id(&self, id: Uuid) -> Result<Option<CatalogItem>, CatalogError>;
  fn list(&self) -> Result<Vec<CatalogItem>, CatalogError>;
  fn list_low_stock(&self) -> Result<Vec<CatalogItem>, CatalogError>;
}
