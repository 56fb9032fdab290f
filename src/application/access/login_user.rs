use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::access::{AccessError, AccessService};

#[derive(Debug, Deserialize)]
pub struct LoginUserCommand {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginUserResponse {
  pub user_id: Uuid,
  pub email: String,
  pub name: String,
  pub role: String,
}

pub struct LoginUserUseCase {
  access_service: Arc<AccessService>,
}

impl LoginUserUseCase {
  pub fn new(access_service: Arc<AccessService>) -> Self {
    Self { access_service }
  }

  pub fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, AccessError> {
    let user = self
      .access_service
      .login(&command.email, &command.password)?;

    Ok(LoginUserResponse {
      user_id: user.id,
      email: user.email,
      name: user.name,
      role: user.role.as_str().to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::access::{entities::User, ports::UserRepository, Role, DEMO_PASSWORD};
  use crate::infrastructure::persistence::memory::MemoryUserRepository;

  fn use_case_with_user() -> LoginUserUseCase {
    let repo = Arc::new(MemoryUserRepository::new());
    repo
      .create(User::new(
        "admin@buildstock.tn".to_string(),
        "Admin Utilisateur".to_string(),
        Role::Admin,
      ))
      .unwrap();
    LoginUserUseCase::new(Arc::new(AccessService::new(repo)))
  }

  #[test]
  fn test_login_with_demo_password() {
    let use_case = use_case_with_user();
    let response = use_case
      .execute(LoginUserCommand {
        email: "admin@buildstock.tn".to_string(),
        password: DEMO_PASSWORD.to_string(),
      })
      .unwrap();
    assert_eq!(response.role, "admin");
  }

  #[test]
  fn test_login_rejects_wrong_password() {
    let use_case = use_case_with_user();
    let result = use_case.execute(LoginUserCommand {
      email: "admin@buildstock.tn".to_string(),
      password: "hunter2".to_string(),
    });
    assert!(matches!(result, Err(AccessError::InvalidCredentials)));
  }
}
