use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::access::{entities::User, errors::AccessError, ports::UserRepository};

#[derive(Default)]
pub struct MemoryUserRepository {
  users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, AccessError> {
    self
      .users
      .read()
      .map_err(|_| AccessError::Repository("user store lock poisoned".to_string()))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, AccessError> {
    self
      .users
      .write()
      .map_err(|_| AccessError::Repository("user store lock poisoned".to_string()))
  }
}

impl UserRepository for MemoryUserRepository {
  fn create(&self, user: User) -> Result<User, AccessError> {
    let mut users = self.write()?;
    if users
      .iter()
      .any(|u| u.id == user.id || u.email.eq_ignore_ascii_case(&user.email))
    {
      return Err(AccessError::Repository(format!(
        "Duplicate user: {}",
        user.email
      )));
    }
    users.push(user.clone());
    Ok(user)
  }

  fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccessError> {
    Ok(self.read()?.iter().find(|u| u.id == id).cloned())
  }

  fn find_by_email(&self, email: &str) -> Result<Option<User>, AccessError> {
    Ok(
      self
        .read()?
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email))
        .cloned(),
    )
  }

  fn list(&self) -> Result<Vec<User>, AccessError> {
    Ok(self.read()?.clone())
  }
}
