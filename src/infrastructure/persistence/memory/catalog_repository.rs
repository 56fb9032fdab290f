use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::catalog::{
  entities::CatalogItem, errors::CatalogError, ports::CatalogRepository,
};

#[derive(Default)]
pub struct MemoryCatalogRepository {
  items: RwLock<Vec<CatalogItem>>,
}

impl MemoryCatalogRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Vec<CatalogItem>>, CatalogError> {
    self
      .items
      .read()
      .map_err(|_| CatalogError::Repository("catalog store lock poisoned".to_string()))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<CatalogItem>>, CatalogError> {
    self
      .items
      .write()
      .map_err(|_| CatalogError::Repository("catalog store lock poisoned".to_string()))
  }
}

impl CatalogRepository for MemoryCatalogRepository {
  fn create(&self, item: CatalogItem) -> Result<CatalogItem, CatalogError> {
    let mut items = self.write()?;
    if items.iter().any(|i| i.id == item.id) {
      return Err(CatalogError::Repository(format!(
        "Duplicate catalog item id: {}",
        item.id
      )));
    }
    items.push(item.clone());
    Ok(item)
  }

  fn update(&self, item: CatalogItem) -> Result<CatalogItem, CatalogError> {
    let mut items = self.write()?;
    let slot = items
      .iter_mut()
      .find(|i| i.id == item.id)
      .ok_or(CatalogError::ItemNotFound(item.id))?;
    *slot = item.clone();
    Ok(item)
  }

  fn find_by_id(&self, id: Uuid) -> Result<Option<CatalogItem>, CatalogError> {
    Ok(self.read()?.iter().find(|i| i.id == id).cloned())
  }

  fn list(&self) -> Result<Vec<CatalogItem>, CatalogError> {
    Ok(self.read()?.clone())
  }

  fn list_low_stock(&self) -> Result<Vec<CatalogItem>, CatalogError> {
    Ok(
      self
        .read()?
        .iter()
        .filter(|i| i.is_low_stock())
        .cloned()
        .collect(),
    )
  }
}
