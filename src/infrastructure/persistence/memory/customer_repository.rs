use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::billing::{entities::Customer, errors::BillingError, ports::CustomerRepository};

#[derive(Default)]
pub struct MemoryCustomerRepository {
  customers: RwLock<Vec<Customer>>,
}

impl MemoryCustomerRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Customer>>, BillingError> {
    self
      .customers
      .read()
      .map_err(|_| BillingError::Repository("customer store lock poisoned".to_string()))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Customer>>, BillingError> {
    self
      .customers
      .write()
      .map_err(|_| BillingError::Repository("customer store lock poisoned".to_string()))
  }
}

impl CustomerRepository for MemoryCustomerRepository {
  fn create(&self, customer: Customer) -> Result<Customer, BillingError> {
    let mut customers = self.write()?;
    if customers.iter().any(|c| c.id == customer.id) {
      return Err(BillingError::Repository(format!(
        "Duplicate customer id: {}",
        customer.id
      )));
    }
    customers.push(customer.clone());
    Ok(customer)
  }

  fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, BillingError> {
    Ok(self.read()?.iter().find(|c| c.id == id).cloned())
  }

  fn list(&self) -> Result<Vec<Customer>, BillingError> {
    Ok(self.read()?.clone())
  }
}
