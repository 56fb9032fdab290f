use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::orders::{
  entities::{Order, OrderStatus},
  errors::OrderError,
  ports::OrderRepository,
};

#[derive(Default)]
pub struct MemoryOrderRepository {
  orders: RwLock<Vec<Order>>,
}

impl MemoryOrderRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Order>>, OrderError> {
    self
      .orders
      .read()
      .map_err(|_| OrderError::Repository("order store lock poisoned".to_string()))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Order>>, OrderError> {
    self
      .orders
      .write()
      .map_err(|_| OrderError::Repository("order store lock poisoned".to_string()))
  }
}

impl OrderRepository for MemoryOrderRepository {
  fn create(&self, order: Order) -> Result<Order, OrderError> {
    let mut orders = self.write()?;
    if orders.iter().any(|o| o.id == order.id) {
      return Err(OrderError::Repository(format!(
        "Duplicate order id: {}",
        order.id
      )));
    }
    orders.push(order.clone());
    Ok(order)
  }

  fn update(&self, order: Order) -> Result<Order, OrderError> {
    let mut orders = self.write()?;
    let slot = orders
      .iter_mut()
      .find(|o| o.id == order.id)
      .ok_or(OrderError::OrderNotFound(order.id))?;
    *slot = order.clone();
    Ok(order)
  }

  fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, OrderError> {
    Ok(self.read()?.iter().find(|o| o.id == id).cloned())
  }

  fn list(&self) -> Result<Vec<Order>, OrderError> {
    Ok(self.read()?.clone())
  }

  fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
    Ok(
      self
        .read()?
        .iter()
        .filter(|o| o.status == status)
        .cloned()
        .collect(),
    )
  }

  fn count(&self) -> Result<usize, OrderError> {
    Ok(self.read()?.len())
  }
}
