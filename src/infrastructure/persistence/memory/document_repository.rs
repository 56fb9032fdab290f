use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::billing::{
  entities::BillingDocument,
  errors::BillingError,
  ports::DocumentRepository,
  value_objects::{DocumentStatus, DocumentType},
};

#[derive(Default)]
pub struct MemoryDocumentRepository {
  documents: RwLock<Vec<BillingDocument>>,
}

impl MemoryDocumentRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Vec<BillingDocument>>, BillingError> {
    self
      .documents
      .read()
      .map_err(|_| BillingError::Repository("document store lock poisoned".to_string()))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<BillingDocument>>, BillingError> {
    self
      .documents
      .write()
      .map_err(|_| BillingError::Repository("document store lock poisoned".to_string()))
  }
}

impl DocumentRepository for MemoryDocumentRepository {
  fn create(&self, document: BillingDocument) -> Result<BillingDocument, BillingError> {
    let mut documents = self.write()?;
    if documents.iter().any(|d| d.id == document.id) {
      return Err(BillingError::Repository(format!(
        "Duplicate document id: {}",
        document.id
      )));
    }
    documents.push(document.clone());
    Ok(document)
  }

  fn update(&self, document: BillingDocument) -> Result<BillingDocument, BillingError> {
    let mut documents = self.write()?;
    let slot = documents
      .iter_mut()
      .find(|d| d.id == document.id)
      .ok_or(BillingError::DocumentNotFound(document.id))?;
    *slot = document.clone();
    Ok(document)
  }

  fn find_by_id(&self, id: Uuid) -> Result<Option<BillingDocument>, BillingError> {
    Ok(self.read()?.iter().find(|d| d.id == id).cloned())
  }

  fn list(&self) -> Result<Vec<BillingDocument>, BillingError> {
    Ok(self.read()?.clone())
  }

  fn list_by_status(&self, status: DocumentStatus) -> Result<Vec<BillingDocument>, BillingError> {
    Ok(
      self
        .read()?
        .iter()
        .filter(|d| d.status == status)
        .cloned()
        .collect(),
    )
  }

  fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<BillingDocument>, BillingError> {
    Ok(
      self
        .read()?
        .iter()
        .filter(|d| d.customer_id == customer_id)
        .cloned()
        .collect(),
    )
  }

  fn count_by_type(&self, document_type: DocumentType) -> Result<usize, BillingError> {
    Ok(
      self
        .read()?
        .iter()
        .filter(|d| d.document_type == document_type)
        .count(),
    )
  }
}
