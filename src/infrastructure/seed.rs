use rust_decimal_macros::dec;
use thiserror::Error;

use crate::domain::access::{entities::User, errors::AccessError, ports::UserRepository, Role};
use crate::domain::billing::{
  entities::Customer, errors::BillingError, ports::CustomerRepository, Currency, Money,
};
use crate::domain::billing::value_objects::ValueObjectError;
use crate::domain::catalog::{
  entities::{CatalogItem, Unit},
  errors::CatalogError,
  ports::CatalogRepository,
};

#[derive(Debug, Error)]
pub enum SeedError {
  #[error(transparent)]
  Access(#[from] AccessError),
  #[error(transparent)]
  Billing(#[from] BillingError),
  #[error(transparent)]
  Catalog(#[from] CatalogError),
  #[error(transparent)]
  Validation(#[from] ValueObjectError),
}

/// The demo collections a fresh in-memory deployment starts with.
#[derive(Debug, Clone)]
pub struct SeedData {
  pub users: Vec<User>,
  pub customers: Vec<Customer>,
  pub catalog_items: Vec<CatalogItem>,
}

fn demo_users() -> Vec<User> {
  vec![
    User::new(
      "admin@buildstock.tn".to_string(),
      "Admin Utilisateur".to_string(),
      Role::Admin,
    ),
    User::new(
      "inventaire@buildstock.tn".to_string(),
      "Responsable Inventaire".to_string(),
      Role::InventoryManager,
    ),
    User::new(
      "commercial@buildstock.tn".to_string(),
      "Responsable Commercial".to_string(),
      Role::CommercialManager,
    ),
  ]
}

fn demo_customers() -> Vec<Customer> {
  vec![
    Customer::new(
      "Mohamed Ben Salah".to_string(),
      Some("Entreprise Ben Salah BTP".to_string()),
      "contact@bensalah-btp.tn".to_string(),
      "+216 71 123 456".to_string(),
      "Zone Industrielle, 2035 Charguia, Tunis".to_string(),
      Some("1234567A/M/000".to_string()),
    ),
    Customer::new(
      "Leila Trabelsi".to_string(),
      Some("Société Trabelsi Construction".to_string()),
      "l.trabelsi@stc.tn".to_string(),
      "+216 73 654 321".to_string(),
      "Avenue de l'Environnement, 4000 Sousse".to_string(),
      Some("7654321B/A/000".to_string()),
    ),
    Customer::new(
      "Karim Gharbi".to_string(),
      None,
      "karim.gharbi@gmail.com".to_string(),
      "+216 98 555 777".to_string(),
      "Rue Ibn Khaldoun, 8000 Nabeul".to_string(),
      None,
    ),
  ]
}

fn demo_catalog() -> Result<Vec<CatalogItem>, ValueObjectError> {
  Ok(vec![
    CatalogItem::new(
      "Ciment Portland CPA 45".to_string(),
      Some("Sac de 50kg".to_string()),
      "Gros oeuvre".to_string(),
      "Ciments de Bizerte".to_string(),
      Unit::Sacs,
      dec!(450),
      dec!(100),
      Money::new(dec!(14.500), Currency::TND)?,
    ),
    CatalogItem::new(
      "Sable de construction".to_string(),
      Some("Sable lavé 0/4".to_string()),
      "Agrégats".to_string(),
      "Carrière du Nord".to_string(),
      Unit::M3,
      dec!(120),
      dec!(30),
      Money::new(dec!(35.000), Currency::TND)?,
    ),
    CatalogItem::new(
      "Gravier concassé 5/15".to_string(),
      None,
      "Agrégats".to_string(),
      "Carrière du Nord".to_string(),
      Unit::M3,
      dec!(80),
      dec!(25),
      Money::new(dec!(42.000), Currency::TND)?,
    ),
    CatalogItem::new(
      "Fer à béton HA 12mm".to_string(),
      Some("Barre de 12m".to_string()),
      "Ferraillage".to_string(),
      "El Fouladh".to_string(),
      Unit::Pieces,
      dec!(600),
      dec!(150),
      Money::new(dec!(28.750), Currency::TND)?,
    ),
    CatalogItem::new(
      "Brique rouge 12 trous".to_string(),
      None,
      "Maçonnerie".to_string(),
      "Briqueterie Jemmal".to_string(),
      Unit::Pieces,
      dec!(15000),
      dec!(2000),
      Money::new(dec!(0.850), Currency::TND)?,
    ),
    CatalogItem::new(
      "Peinture acrylique blanche".to_string(),
      Some("Pot de 25L".to_string()),
      "Finitions".to_string(),
      "Couleurs de Tunisie".to_string(),
      Unit::Litres,
      dec!(40),
      dec!(50),
      Money::new(dec!(6.200), Currency::TND)?,
    ),
  ])
}

/// Loads the demo collections into the given repositories and returns what
/// was inserted, so callers can pick seeded ids for follow-up operations.
pub fn seed_demo_data(
  user_repo: &dyn UserRepository,
  customer_repo: &dyn CustomerRepository,
  catalog_repo: &dyn CatalogRepository,
) -> Result<SeedData, SeedError> {
  let mut users = Vec::new();
  for user in demo_users() {
    users.push(user_repo.create(user)?);
  }

  let mut customers = Vec::new();
  for customer in demo_customers() {
    customers.push(customer_repo.create(customer)?);
  }

  let mut catalog_items = Vec::new();
  for item in demo_catalog()? {
    catalog_items.push(catalog_repo.create(item)?);
  }

  tracing::info!(
    users = users.len(),
    customers = customers.len(),
    catalog_items = catalog_items.len(),
    "demo data seeded"
  );

  Ok(SeedData {
    users,
    customers,
    catalog_items,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::{
    MemoryCatalogRepository, MemoryCustomerRepository, MemoryUserRepository,
  };

  #[test]
  fn test_seed_populates_all_collections() {
    let users = MemoryUserRepository::new();
    let customers = MemoryCustomerRepository::new();
    let catalog = MemoryCatalogRepository::new();

    let data = seed_demo_data(&users, &customers, &catalog).unwrap();
    assert_eq!(data.users.len(), 3);
    assert_eq!(data.customers.len(), 3);
    assert_eq!(data.catalog_items.len(), 6);

    // one user per role
    assert!(data.users.iter().any(|u| u.role == Role::Admin));
    assert!(data.users.iter().any(|u| u.role == Role::InventoryManager));
    assert!(data.users.iter().any(|u| u.role == Role::CommercialManager));
  }

  #[test]
  fn test_seeding_twice_fails_on_duplicates() {
    let users = MemoryUserRepository::new();
    let customers = MemoryCustomerRepository::new();
    let catalog = MemoryCatalogRepository::new();

    seed_demo_data(&users, &customers, &catalog).unwrap();
    assert!(seed_demo_data(&users, &customers, &catalog).is_err());
  }

  #[test]
  fn test_paint_is_seeded_below_reorder_level() {
    let catalog = MemoryCatalogRepository::new();
    for item in demo_catalog().unwrap() {
      catalog.create(item).unwrap();
    }
    let low = catalog.list_low_stock().unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name, "Peinture acrylique blanche");
  }
}
