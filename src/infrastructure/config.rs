use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::domain::billing::services::LedgerPolicy;
use crate::domain::billing::value_objects::{Currency, TaxRate, ValueObjectError};

fn default_tax_rate_percent() -> u32 {
  20
}

fn default_payment_due_days() -> i64 {
  30
}

fn default_true() -> bool {
  true
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub ledger: LedgerConfig,
}

/// Ledger configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
  /// ISO currency code all seeded data is denominated in
  pub currency: String,
  /// Default tax rate as a plain percentage (20 means 20%)
  #[serde(default = "default_tax_rate_percent")]
  pub default_tax_rate: u32,
  /// Days between issue date and due date when none is given
  #[serde(default = "default_payment_due_days")]
  pub payment_due_days: i64,
  /// Whether to load the demo collections at startup
  #[serde(default = "default_true")]
  pub seed_demo_data: bool,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override
  /// earlier ones):
  /// 1. config/default.toml
  /// 2. Environment variables with BUILDSTOCK_ prefix, e.g.
  ///    `BUILDSTOCK_LEDGER__CURRENCY=EUR`
  pub fn load() -> Result<Self, ConfigError> {
    let builder = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(false))
      .add_source(Environment::with_prefix("BUILDSTOCK").separator("__"))
      .set_default("ledger.currency", "TND")?
      .build()?;

    builder.try_deserialize()
  }

  /// Translates the raw configuration into the domain-facing ledger policy.
  pub fn ledger_policy(&self) -> Result<LedgerPolicy, ValueObjectError> {
    Ok(LedgerPolicy {
      currency: Currency::from_str(&self.ledger.currency)?,
      default_tax_rate: TaxRate::new(Decimal::from(self.ledger.default_tax_rate))?,
      payment_due_days: self.ledger.payment_due_days,
    })
  }
}
