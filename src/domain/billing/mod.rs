pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{
  BillingDocument, Customer, LineItem, LineItems, Payment, StockWarning, Totals,
  SETTLEMENT_TOLERANCE,
};
pub use errors::BillingError;
pub use ports::{CustomerRepository, DocumentRepository, PaymentRepository};
pub use services::{DocumentData, DocumentLineInput, LedgerPolicy, LedgerService, PaymentData};
pub use value_objects::{
  Currency, DocumentNumber, DocumentStatus, DocumentType, DocumentTypeConfig, Money,
  PaymentMethod, Quantity, SymbolPosition, TaxRate, ValueObjectError,
};
