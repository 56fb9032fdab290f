use uuid::Uuid;

use super::entities::User;
use super::errors::AccessError;

pub trait UserRepository: Send + Sync {
  fn create(&self, user: User) -> Result<User, AccessError>;
  fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccessError>;
  fn find_by_email(&self, email: &str) -> Result<Option<User>, AccessError>;
  fn list(&self) -> Result<Vec<User>, AccessError>;
}
