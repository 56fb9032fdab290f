use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid currency code: {0}")]
  InvalidCurrency(String),
  #[error("Invalid amount: {0}")]
  InvalidAmount(String),
  #[error("Invalid quantity: {0}")]
  InvalidQuantity(String),
  #[error("Invalid tax rate: {0}")]
  InvalidTaxRate(String),
  #[error("Invalid document number: {0}")]
  InvalidDocumentNumber(String),
  #[error("Invalid document type: {0}")]
  InvalidDocumentType(String),
  #[error("Invalid document status: {0}")]
  InvalidDocumentStatus(String),
  #[error("Invalid payment method: {0}")]
  InvalidPaymentMethod(String),
}

// Symbol placement relative to the amount, e.g. "$12.500" vs "12.500 د.ت"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
  Before,
  After,
}

// Currency - the three currencies the distributor trades in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
  TND,
  EUR,
  USD,
}

impl Currency {
  pub fn as_str(&self) -> &'static str {
    match self {
      Currency::TND => "TND",
      Currency::EUR => "EUR",
      Currency::USD => "USD",
    }
  }

  pub fn symbol(&self) -> &'static str {
    match self {
      Currency::TND => "د.ت",
      Currency::EUR => "€",
      Currency::USD => "$",
    }
  }

  pub fn symbol_position(&self) -> SymbolPosition {
    match self {
      Currency::TND | Currency::EUR => SymbolPosition::After,
      Currency::USD => SymbolPosition::Before,
    }
  }

  /// Formats an amount with fixed 3-decimal precision, the convention used
  /// on all printed documents (millime-level precision for TND).
  pub fn format(&self, amount: Decimal) -> String {
    match self.symbol_position() {
      SymbolPosition::Before => format!("{}{:.3}", self.symbol(), amount),
      SymbolPosition::After => format!("{:.3} {}", amount, self.symbol()),
    }
  }
}

impl FromStr for Currency {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_uppercase().as_str() {
      "TND" => Ok(Currency::TND),
      "EUR" => Ok(Currency::EUR),
      "USD" => Ok(Currency::USD),
      _ => Err(ValueObjectError::InvalidCurrency(format!(
        "Unsupported currency: {}",
        s
      ))),
    }
  }
}

// Money - Amount with currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
  pub amount: Decimal,
  pub currency: Currency,
}

impl Money {
  pub fn new(amount: Decimal, currency: Currency) -> Result<Self, ValueObjectError> {
    if amount.is_sign_negative() {
      return Err(ValueObjectError::InvalidAmount(
        "Amount cannot be negative".to_string(),
      ));
    }
    Ok(Self { amount, currency })
  }

  pub fn zero(currency: Currency) -> Self {
    Self {
      amount: Decimal::ZERO,
      currency,
    }
  }

  pub fn add(&self, other: &Money) -> Result<Money, ValueObjectError> {
    if self.currency != other.currency {
      return Err(ValueObjectError::InvalidAmount(
        "Cannot add amounts with different currencies".to_string(),
      ));
    }
    Ok(Money {
      amount: self.amount + other.amount,
      currency: self.currency,
    })
  }

  pub fn subtract(&self, other: &Money) -> Result<Money, ValueObjectError> {
    if self.currency != other.currency {
      return Err(ValueObjectError::InvalidAmount(
        "Cannot subtract amounts with different currencies".to_string(),
      ));
    }
    Money::new(self.amount - other.amount, self.currency)
  }

  pub fn multiply(&self, factor: Decimal) -> Money {
    Money {
      amount: self.amount * factor,
      currency: self.currency,
    }
  }

  pub fn is_zero(&self) -> bool {
    self.amount.is_zero()
  }
}

impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.currency.format(self.amount))
  }
}

// Quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity(Decimal);

impl Quantity {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidQuantity(
        "Quantity must be positive".to_string(),
      ));
    }
    // Max 3 decimal places (bulk materials are measured to the kilogram/litre)
    if value.scale() > 3 {
      return Err(ValueObjectError::InvalidQuantity(
        "Quantity cannot have more than 3 decimal places".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

// Tax Rate - plain percentage (20 means 20%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(Decimal);

impl TaxRate {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
      return Err(ValueObjectError::InvalidTaxRate(
        "Tax rate must be between 0 and 100".to_string(),
      ));
    }
    if value.scale() > 2 {
      return Err(ValueObjectError::InvalidTaxRate(
        "Tax rate cannot have more than 2 decimal places".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }

  pub fn as_multiplier(&self) -> Decimal {
    self.0 / Decimal::from(100)
  }
}

// Document Type - one of the four commercial documents the business issues.
// The capability triple governs which fields downstream layers show/require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
  Invoice,
  DeliveryNote,
  PurchaseNote,
  Quote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTypeConfig {
  pub label: &'static str,
  pub prefix: &'static str,
  pub show_tax: bool,
  pub show_payment: bool,
  pub show_driver: bool,
}

impl DocumentType {
  pub const ALL: [DocumentType; 4] = [
    DocumentType::Invoice,
    DocumentType::DeliveryNote,
    DocumentType::PurchaseNote,
    DocumentType::Quote,
  ];

  pub fn config(&self) -> DocumentTypeConfig {
    match self {
      DocumentType::Invoice => DocumentTypeConfig {
        label: "Facture",
        prefix: "FACT-",
        show_tax: true,
        show_payment: true,
        show_driver: false,
      },
      DocumentType::DeliveryNote => DocumentTypeConfig {
        label: "Bon de Livraison",
        prefix: "BL-",
        show_tax: false,
        show_payment: false,
        show_driver: true,
      },
      DocumentType::PurchaseNote => DocumentTypeConfig {
        label: "Bon d'Achat",
        prefix: "BA-",
        show_tax: true,
        show_payment: false,
        show_driver: false,
      },
      DocumentType::Quote => DocumentTypeConfig {
        label: "Devis",
        prefix: "DEV-",
        show_tax: true,
        show_payment: false,
        show_driver: false,
      },
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      DocumentType::Invoice => "facture",
      DocumentType::DeliveryNote => "bon_livraison",
      DocumentType::PurchaseNote => "bon_achat",
      DocumentType::Quote => "devis",
    }
  }
}

impl FromStr for DocumentType {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "facture" | "invoice" => Ok(DocumentType::Invoice),
      "bon_livraison" | "delivery_note" => Ok(DocumentType::DeliveryNote),
      "bon_achat" | "purchase_note" => Ok(DocumentType::PurchaseNote),
      "devis" | "quote" => Ok(DocumentType::Quote),
      _ => Err(ValueObjectError::InvalidDocumentType(format!(
        "Unknown document type: {}",
        s
      ))),
    }
  }
}

// Document Status
//
// Overdue is deliberately absent: it is a derived presentation state computed
// from the due date at read time, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
  Draft,
  Sent,
  Partial,
  Paid,
  Cancelled,
}

impl DocumentStatus {
  pub fn can_transition_to(&self, new_status: DocumentStatus) -> bool {
    match (self, new_status) {
      (DocumentStatus::Draft, DocumentStatus::Sent) => true,
      (DocumentStatus::Draft, DocumentStatus::Cancelled) => true,
      // Partial and Paid are reached by applying payments
      (DocumentStatus::Sent, DocumentStatus::Partial) => true,
      (DocumentStatus::Sent, DocumentStatus::Paid) => true,
      (DocumentStatus::Sent, DocumentStatus::Cancelled) => true,
      (DocumentStatus::Partial, DocumentStatus::Paid) => true,
      (DocumentStatus::Partial, DocumentStatus::Cancelled) => true,
      // Paid and Cancelled are terminal
      _ => false,
    }
  }

  pub fn is_terminal(&self) -> bool {
    matches!(self, DocumentStatus::Paid | DocumentStatus::Cancelled)
  }

  pub fn accepts_payment(&self) -> bool {
    matches!(self, DocumentStatus::Sent | DocumentStatus::Partial)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      DocumentStatus::Draft => "draft",
      DocumentStatus::Sent => "sent",
      DocumentStatus::Partial => "partial",
      DocumentStatus::Paid => "paid",
      DocumentStatus::Cancelled => "cancelled",
    }
  }
}

impl FromStr for DocumentStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "draft" => Ok(DocumentStatus::Draft),
      "sent" => Ok(DocumentStatus::Sent),
      "partial" => Ok(DocumentStatus::Partial),
      "paid" => Ok(DocumentStatus::Paid),
      "cancelled" => Ok(DocumentStatus::Cancelled),
      _ => Err(ValueObjectError::InvalidDocumentStatus(format!(
        "Unknown status: {}",
        s
      ))),
    }
  }
}

// Payment Method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
  Cash,
  Check,
  Transfer,
  Card,
  Other,
}

impl PaymentMethod {
  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentMethod::Cash => "cash",
      PaymentMethod::Check => "check",
      PaymentMethod::Transfer => "transfer",
      PaymentMethod::Card => "card",
      PaymentMethod::Other => "other",
    }
  }
}

impl FromStr for PaymentMethod {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "cash" => Ok(PaymentMethod::Cash),
      "check" => Ok(PaymentMethod::Check),
      "transfer" => Ok(PaymentMethod::Transfer),
      "card" => Ok(PaymentMethod::Card),
      "other" => Ok(PaymentMethod::Other),
      _ => Err(ValueObjectError::InvalidPaymentMethod(format!(
        "Unknown payment method: {}",
        s
      ))),
    }
  }
}

// Document Number - `{PREFIX}{YEAR}-{sequence:03}`, sequential per type.
// Single-writer assumption: not unique under concurrent creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNumber(String);

impl DocumentNumber {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidDocumentNumber(
        "Document number cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 50 {
      return Err(ValueObjectError::InvalidDocumentNumber(
        "Document number cannot exceed 50 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn next(document_type: DocumentType, year: i32, existing_count: usize) -> Self {
    Self::compose(document_type.config().prefix, year, existing_count + 1)
  }

  pub fn compose(prefix: &str, year: i32, sequence: usize) -> Self {
    Self(format!("{}{}-{:03}", prefix, year, sequence))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for DocumentNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_currency_format() {
    assert_eq!(Currency::USD.format(dec!(1250.5)), "$1250.500");
    assert_eq!(Currency::EUR.format(dec!(99)), "99.000 €");
    assert_eq!(Currency::TND.format(dec!(0.125)), "0.125 د.ت");
    assert_eq!(Currency::TND.symbol_position(), SymbolPosition::After);
  }

  #[test]
  fn test_money() {
    let money = Money::new(dec!(100.50), Currency::TND).unwrap();
    assert_eq!(money.amount, dec!(100.50));
    assert!(Money::new(dec!(-10), Currency::TND).is_err());
  }

  #[test]
  fn test_money_arithmetic() {
    let m1 = Money::new(dec!(100), Currency::TND).unwrap();
    let m2 = Money::new(dec!(40), Currency::TND).unwrap();
    let m3 = Money::new(dec!(40), Currency::EUR).unwrap();

    assert_eq!(m1.add(&m2).unwrap().amount, dec!(140));
    assert_eq!(m1.subtract(&m2).unwrap().amount, dec!(60));
    assert!(m1.add(&m3).is_err());
    assert!(m2.subtract(&m1).is_err()); // would go negative
    assert_eq!(m1.multiply(dec!(0.2)).amount, dec!(20));
  }

  #[test]
  fn test_quantity() {
    assert!(Quantity::new(dec!(1)).is_ok());
    assert!(Quantity::new(dec!(2.500)).is_ok());
    assert!(Quantity::new(dec!(0)).is_err());
    assert!(Quantity::new(dec!(-1)).is_err());
    assert!(Quantity::new(dec!(1.1234)).is_err());
  }

  #[test]
  fn test_tax_rate() {
    assert!(TaxRate::new(dec!(20)).is_ok());
    assert!(TaxRate::new(dec!(0)).is_ok());
    assert!(TaxRate::new(dec!(100)).is_ok());
    assert!(TaxRate::new(dec!(-1)).is_err());
    assert!(TaxRate::new(dec!(101)).is_err());
    assert_eq!(TaxRate::new(dec!(20)).unwrap().as_multiplier(), dec!(0.2));
  }

  #[test]
  fn test_document_type_capabilities() {
    let invoice = DocumentType::Invoice.config();
    assert!(invoice.show_tax && invoice.show_payment && !invoice.show_driver);

    let delivery = DocumentType::DeliveryNote.config();
    assert!(!delivery.show_tax && !delivery.show_payment && delivery.show_driver);

    let purchase = DocumentType::PurchaseNote.config();
    assert!(purchase.show_tax && !purchase.show_payment && !purchase.show_driver);

    let quote = DocumentType::Quote.config();
    assert!(quote.show_tax && !quote.show_payment && !quote.show_driver);
  }

  #[test]
  fn test_document_type_parse() {
    use std::str::FromStr;
    assert_eq!(
      DocumentType::from_str("bon_livraison").unwrap(),
      DocumentType::DeliveryNote
    );
    assert_eq!(
      DocumentType::from_str("invoice").unwrap(),
      DocumentType::Invoice
    );
    assert!(DocumentType::from_str("memo").is_err());
  }

  #[test]
  fn test_status_transitions() {
    assert!(DocumentStatus::Draft.can_transition_to(DocumentStatus::Sent));
    assert!(DocumentStatus::Draft.can_transition_to(DocumentStatus::Cancelled));
    assert!(!DocumentStatus::Draft.can_transition_to(DocumentStatus::Paid));

    assert!(DocumentStatus::Sent.can_transition_to(DocumentStatus::Partial));
    assert!(DocumentStatus::Sent.can_transition_to(DocumentStatus::Paid));
    assert!(DocumentStatus::Partial.can_transition_to(DocumentStatus::Paid));
    assert!(DocumentStatus::Partial.can_transition_to(DocumentStatus::Cancelled));

    assert!(!DocumentStatus::Paid.can_transition_to(DocumentStatus::Sent));
    assert!(!DocumentStatus::Cancelled.can_transition_to(DocumentStatus::Draft));
    assert!(DocumentStatus::Paid.is_terminal());
  }

  #[test]
  fn test_document_number_sequence() {
    let number = DocumentNumber::next(DocumentType::Invoice, 2024, 0);
    assert_eq!(number.value(), "FACT-2024-001");

    let number = DocumentNumber::next(DocumentType::DeliveryNote, 2025, 41);
    assert_eq!(number.value(), "BL-2025-042");

    let number = DocumentNumber::compose("CMD-", 2024, 7);
    assert_eq!(number.value(), "CMD-2024-007");
  }

  #[test]
  fn test_document_number_validation() {
    assert!(DocumentNumber::new("FACT-2024-001".to_string()).is_ok());
    assert!(DocumentNumber::new("  ".to_string()).is_err());
  }

  #[test]
  fn test_payment_method_parse() {
    use std::str::FromStr;
    assert_eq!(
      PaymentMethod::from_str("transfer").unwrap(),
      PaymentMethod::Transfer
    );
    assert!(PaymentMethod::from_str("barter").is_err());
  }
}
