use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::AccessError;

// Role - closed set; every permission check goes through `Role::allows`
// instead of ad-hoc role comparisons scattered across the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
  Admin,
  InventoryManager,
  CommercialManager,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
  ManageUsers,
  ManageCatalog,
  ManageOrders,
  ManageBilling,
  RecordPayments,
  ViewReports,
}

impl Role {
  pub fn allows(&self, capability: Capability) -> bool {
    use Capability::*;
    match self {
      Role::Admin => true,
      Role::InventoryManager => matches!(capability, ManageCatalog | ViewReports),
      Role::CommercialManager => {
        matches!(capability, ManageOrders | ManageBilling | RecordPayments | ViewReports)
      }
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Admin => "admin",
      Role::InventoryManager => "inventory_manager",
      Role::CommercialManager => "commercial_manager",
    }
  }
}

impl FromStr for Role {
  type Err = AccessError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "admin" => Ok(Role::Admin),
      "inventory_manager" => Ok(Role::InventoryManager),
      "commercial_manager" => Ok(Role::CommercialManager),
      _ => Err(AccessError::InvalidRole(s.to_string())),
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl Capability {
  pub fn as_str(&self) -> &'static str {
    match self {
      Capability::ManageUsers => "manage_users",
      Capability::ManageCatalog => "manage_catalog",
      Capability::ManageOrders => "manage_orders",
      Capability::ManageBilling => "manage_billing",
      Capability::RecordPayments => "record_payments",
      Capability::ViewReports => "view_reports",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_admin_has_every_capability() {
    for capability in [
      Capability::ManageUsers,
      Capability::ManageCatalog,
      Capability::ManageOrders,
      Capability::ManageBilling,
      Capability::RecordPayments,
      Capability::ViewReports,
    ] {
      assert!(Role::Admin.allows(capability));
    }
  }

  #[test]
  fn test_capability_matrix() {
    assert!(Role::InventoryManager.allows(Capability::ManageCatalog));
    assert!(!Role::InventoryManager.allows(Capability::ManageBilling));
    assert!(!Role::InventoryManager.allows(Capability::RecordPayments));
    assert!(!Role::InventoryManager.allows(Capability::ManageUsers));

    assert!(Role::CommercialManager.allows(Capability::ManageOrders));
    assert!(Role::CommercialManager.allows(Capability::ManageBilling));
    assert!(Role::CommercialManager.allows(Capability::RecordPayments));
    assert!(!Role::CommercialManager.allows(Capability::ManageCatalog));
    assert!(!Role::CommercialManager.allows(Capability::ManageUsers));
  }

  #[test]
  fn test_role_parse() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(
      Role::from_str("inventory_manager").unwrap(),
      Role::InventoryManager
    );
    assert!(Role::from_str("intern").is_err());
  }
}
