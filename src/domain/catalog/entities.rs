use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::billing::value_objects::Money;

use super::errors::CatalogError;

// Unit of measure for construction materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
  Kg,
  Tonnes,
  M3,
  M2,
  Pieces,
  Sacs,
  Litres,
}

impl Unit {
  pub fn as_str(&self) -> &'static str {
    match self {
      Unit::Kg => "kg",
      Unit::Tonnes => "tonnes",
      Unit::M3 => "m3",
      Unit::M2 => "m2",
      Unit::Pieces => "pieces",
      Unit::Sacs => "sacs",
      Unit::Litres => "litres",
    }
  }
}

impl FromStr for Unit {
  type Err = CatalogError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "kg" => Ok(Unit::Kg),
      "tonnes" => Ok(Unit::Tonnes),
      "m3" => Ok(Unit::M3),
      "m2" => Ok(Unit::M2),
      "pieces" => Ok(Unit::Pieces),
      "sacs" => Ok(Unit::Sacs),
      "litres" => Ok(Unit::Litres),
      _ => Err(CatalogError::InvalidUnit(s.to_string())),
    }
  }
}

impl fmt::Display for Unit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

// Catalog Item - inventory entry supplying name/price/unit to line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub category: String,
  pub supplier: String,
  pub unit: Unit,
  pub current_stock: Decimal,
  pub reorder_level: Decimal,
  pub unit_price: Money,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl CatalogItem {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    name: String,
    description: Option<String>,
    category: String,
    supplier: String,
    unit: Unit,
    current_stock: Decimal,
    reorder_level: Decimal,
    unit_price: Money,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      description,
      category,
      supplier,
      unit,
      current_stock,
      reorder_level,
      unit_price,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn is_low_stock(&self) -> bool {
    self.current_stock <= self.reorder_level
  }

  pub fn total_value(&self) -> Money {
    self.unit_price.multiply(self.current_stock)
  }
}
