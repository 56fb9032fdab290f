use std::sync::Arc;
use uuid::Uuid;

use super::entities::User;
use super::errors::AccessError;
use super::ports::UserRepository;
use super::value_objects::Capability;

/// Demo deployments authenticate every seeded account with this password.
/// There is deliberately no real credential store.
pub const DEMO_PASSWORD: &str = "password123";

pub struct AccessService {
  user_repo: Arc<dyn UserRepository>,
}

impl AccessService {
  pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
    Self { user_repo }
  }

  /// Fixed-password login against the seeded user list.
  pub fn login(&self, email: &str, password: &str) -> Result<User, AccessError> {
    let user = self.user_repo.find_by_email(email)?;

    match user {
      Some(user) if password == DEMO_PASSWORD => {
        tracing::info!(email = %user.email, role = user.role.as_str(), "login succeeded");
        Ok(user)
      }
      _ => {
        tracing::warn!(email, "login failed");
        Err(AccessError::InvalidCredentials)
      }
    }
  }

  pub fn get_user(&self, user_id: Uuid) -> Result<User, AccessError> {
    self
      .user_repo
      .find_by_id(user_id)?
      .ok_or(AccessError::UserNotFound(user_id))
  }

  pub fn require(&self, user_id: Uuid, capability: Capability) -> Result<User, AccessError> {
    let user = self.get_user(user_id)?;
    if !user.role.allows(capability) {
      return Err(AccessError::PermissionDenied(format!(
        "Role {} lacks capability {}",
        user.role.as_str(),
        capability.as_str()
      )));
    }
    Ok(user)
  }

  pub fn list_users(&self, user_id: Uuid) -> Result<Vec<User>, AccessError> {
    self.require(user_id, Capability::ManageUsers)?;
    self.user_repo.list()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::super::value_objects::Role;
  use crate::infrastructure::persistence::memory::MemoryUserRepository;

  fn service_with_users() -> (AccessService, User, User) {
    let repo = Arc::new(MemoryUserRepository::new());
    let admin = repo
      .create(User::new(
        "admin@buildstock.tn".to_string(),
        "Admin Utilisateur".to_string(),
        Role::Admin,
      ))
      .unwrap();
    let inventory = repo
      .create(User::new(
        "inventaire@buildstock.tn".to_string(),
        "Responsable Inventaire".to_string(),
        Role::InventoryManager,
      ))
      .unwrap();
    (AccessService::new(repo), admin, inventory)
  }

  #[test]
  fn test_login_is_case_insensitive_on_email() {
    let (service, admin, _) = service_with_users();
    let user = service
      .login("Admin@BuildStock.tn", DEMO_PASSWORD)
      .unwrap();
    assert_eq!(user.id, admin.id);
  }

  #[test]
  fn test_login_unknown_email_and_wrong_password() {
    let (service, _, _) = service_with_users();
    assert!(matches!(
      service.login("nobody@buildstock.tn", DEMO_PASSWORD),
      Err(AccessError::InvalidCredentials)
    ));
    assert!(matches!(
      service.login("admin@buildstock.tn", "wrong"),
      Err(AccessError::InvalidCredentials)
    ));
  }

  #[test]
  fn test_require_enforces_capability_matrix() {
    let (service, admin, inventory) = service_with_users();
    assert!(service.require(admin.id, Capability::ManageBilling).is_ok());
    assert!(service
      .require(inventory.id, Capability::ManageCatalog)
      .is_ok());
    assert!(matches!(
      service.require(inventory.id, Capability::RecordPayments),
      Err(AccessError::PermissionDenied(_))
    ));
  }

  #[test]
  fn test_only_admin_lists_users() {
    let (service, admin, inventory) = service_with_users();
    assert_eq!(service.list_users(admin.id).unwrap().len(), 2);
    assert!(service.list_users(inventory.id).is_err());
  }
}
