use uuid::Uuid;

use super::entities::{Order, OrderStatus};
use super::errors::OrderError;

pub trait OrderRepository: Send + Sync {
  fn create(&self, order: Order) -> Result<Order, OrderError>;
  fn update(&self, order: Order) -> Result<Order, OrderError>;
  fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, OrderError>;
  fn list(&self) -> Result<Vec<Order>, OrderError>;
  fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError>;
  fn count(&self) -> Result<usize, OrderError>;
}
