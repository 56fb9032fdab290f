use chrono::{Datelike, NaiveDate};
use rust_decimal_macros::dec;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::access::entities::User;
use crate::domain::access::ports::UserRepository;
use crate::domain::access::value_objects::Capability;
use crate::domain::catalog::ports::CatalogRepository;

use super::entities::{BillingDocument, Customer, LineItems, Payment, StockWarning, Totals};
use super::errors::BillingError;
use super::ports::{CustomerRepository, DocumentRepository, PaymentRepository};
use super::value_objects::{
  Currency, DocumentNumber, DocumentStatus, DocumentType, Money, PaymentMethod, Quantity, TaxRate,
};

/// Ledger-wide defaults, loaded from configuration at startup.
#[derive(Debug, Clone)]
pub struct LedgerPolicy {
  pub currency: Currency,
  pub default_tax_rate: TaxRate,
  pub payment_due_days: i64,
}

impl Default for LedgerPolicy {
  fn default() -> Self {
    Self {
      currency: Currency::TND,
      default_tax_rate: TaxRate::new(dec!(20)).expect("static tax rate"),
      payment_due_days: 30,
    }
  }
}

/// Document creation data
pub struct DocumentData {
  pub document_type: DocumentType,
  pub customer_id: Uuid,
  pub driver_name: Option<String>,
  pub tax_rate: TaxRate,
  pub currency: Currency,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub notes: Option<String>,
  pub line_items: Vec<DocumentLineInput>,
}

pub struct DocumentLineInput {
  pub catalog_item_id: Uuid,
  pub quantity: Quantity,
}

/// Payment application data
pub struct PaymentData {
  pub amount: Money,
  pub method: PaymentMethod,
  pub paid_on: NaiveDate,
  pub reference: Option<String>,
  pub notes: Option<String>,
}

pub struct LedgerService {
  document_repo: Arc<dyn DocumentRepository>,
  payment_repo: Arc<dyn PaymentRepository>,
  customer_repo: Arc<dyn CustomerRepository>,
  catalog_repo: Arc<dyn CatalogRepository>,
  user_repo: Arc<dyn UserRepository>,
}

impl LedgerService {
  pub fn new(
    document_repo: Arc<dyn DocumentRepository>,
    payment_repo: Arc<dyn PaymentRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    catalog_repo: Arc<dyn CatalogRepository>,
    user_repo: Arc<dyn UserRepository>,
  ) -> Self {
    Self {
      document_repo,
      payment_repo,
      customer_repo,
      catalog_repo,
      user_repo,
    }
  }

  pub fn create_document(
    &self,
    user_id: Uuid,
    data: DocumentData,
  ) -> Result<(BillingDocument, Vec<StockWarning>), BillingError> {
    let actor = self.authorize(user_id, Capability::ManageBilling)?;

    self
      .customer_repo
      .find_by_id(data.customer_id)?
      .ok_or(BillingError::CustomerNotFound(data.customer_id))?;

    if data.line_items.is_empty() {
      return Err(BillingError::NoLineItems);
    }

    let mut line_items = LineItems::new();
    let mut warnings = Vec::new();
    for input in data.line_items {
      let catalog_item = self
        .catalog_repo
        .find_by_id(input.catalog_item_id)
        .map_err(|e| BillingError::Repository(e.to_string()))?
        .ok_or(BillingError::UnknownItem(input.catalog_item_id))?;

      if catalog_item.unit_price.currency != data.currency {
        return Err(BillingError::CurrencyMismatch {
          expected: data.currency.as_str().to_string(),
          actual: catalog_item.unit_price.currency.as_str().to_string(),
        });
      }

      if let Some(warning) = line_items.add_or_merge(&catalog_item, input.quantity)? {
        tracing::warn!(
          item = %warning.item_name,
          requested = %warning.requested,
          available = %warning.available,
          "line item quantity exceeds stock on hand"
        );
        warnings.push(warning);
      }
    }

    let existing = self.document_repo.count_by_type(data.document_type)?;
    let document_number =
      DocumentNumber::next(data.document_type, data.issue_date.year(), existing);

    let document = BillingDocument::new(
      document_number,
      data.document_type,
      data.customer_id,
      data.driver_name,
      line_items,
      data.tax_rate,
      data.currency,
      data.issue_date,
      data.due_date,
      data.notes,
      actor.id,
    )?;

    let created = self.document_repo.create(document)?;
    tracing::info!(
      document = %created.document_number,
      document_type = created.document_type.as_str(),
      "document created"
    );
    Ok((created, warnings))
  }

  /// Applies a payment against the document's outstanding balance and
  /// appends the payment to the immutable history.
  pub fn record_payment(
    &self,
    user_id: Uuid,
    document_id: Uuid,
    data: PaymentData,
  ) -> Result<(BillingDocument, Payment), BillingError> {
    let actor = self.authorize(user_id, Capability::RecordPayments)?;

    let mut document = self
      .document_repo
      .find_by_id(document_id)?
      .ok_or(BillingError::DocumentNotFound(document_id))?;

    let payment = document.apply_payment(
      data.amount,
      data.method,
      data.paid_on,
      data.reference,
      data.notes,
      actor.id,
    )?;

    let payment = self.payment_repo.append(payment)?;
    let document = self.document_repo.update(document)?;

    tracing::info!(
      document = %document.document_number,
      amount = %payment.amount,
      status = document.status.as_str(),
      "payment recorded"
    );
    Ok((document, payment))
  }

  pub fn change_document_status(
    &self,
    user_id: Uuid,
    document_id: Uuid,
    new_status: DocumentStatus,
  ) -> Result<BillingDocument, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;

    let mut document = self
      .document_repo
      .find_by_id(document_id)?
      .ok_or(BillingError::DocumentNotFound(document_id))?;

    document.change_status(new_status)?;
    self.document_repo.update(document)
  }

  pub fn add_document_item(
    &self,
    user_id: Uuid,
    document_id: Uuid,
    catalog_item_id: Uuid,
    quantity: Quantity,
  ) -> Result<(BillingDocument, Option<StockWarning>), BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;

    let mut document = self
      .document_repo
      .find_by_id(document_id)?
      .ok_or(BillingError::DocumentNotFound(document_id))?;

    let catalog_item = self
      .catalog_repo
      .find_by_id(catalog_item_id)
      .map_err(|e| BillingError::Repository(e.to_string()))?
      .ok_or(BillingError::UnknownItem(catalog_item_id))?;

    let warning = document.add_item(&catalog_item, quantity)?;
    let document = self.document_repo.update(document)?;
    Ok((document, warning))
  }

  pub fn remove_document_item(
    &self,
    user_id: Uuid,
    document_id: Uuid,
    line_item_id: Uuid,
  ) -> Result<BillingDocument, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;

    let mut document = self
      .document_repo
      .find_by_id(document_id)?
      .ok_or(BillingError::DocumentNotFound(document_id))?;

    document.remove_item(line_item_id)?;
    self.document_repo.update(document)
  }

  pub fn set_document_item_quantity(
    &self,
    user_id: Uuid,
    document_id: Uuid,
    line_item_id: Uuid,
    quantity: Quantity,
  ) -> Result<BillingDocument, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;

    let mut document = self
      .document_repo
      .find_by_id(document_id)?
      .ok_or(BillingError::DocumentNotFound(document_id))?;

    document.set_item_quantity(line_item_id, quantity)?;
    self.document_repo.update(document)
  }

  pub fn get_document(
    &self,
    user_id: Uuid,
    document_id: Uuid,
  ) -> Result<BillingDocument, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;
    self
      .document_repo
      .find_by_id(document_id)?
      .ok_or(BillingError::DocumentNotFound(document_id))
  }

  pub fn get_document_details(
    &self,
    user_id: Uuid,
    document_id: Uuid,
  ) -> Result<(BillingDocument, Customer, Totals, Vec<Payment>), BillingError> {
    let document = self.get_document(user_id, document_id)?;

    let customer = self
      .customer_repo
      .find_by_id(document.customer_id)?
      .ok_or(BillingError::CustomerNotFound(document.customer_id))?;

    let totals = document.totals()?;
    let payments = self.payment_repo.find_by_document_id(document_id)?;

    Ok((document, customer, totals, payments))
  }

  pub fn list_documents(
    &self,
    user_id: Uuid,
    status_filter: Option<DocumentStatus>,
    customer_filter: Option<Uuid>,
  ) -> Result<Vec<BillingDocument>, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;

    if let Some(status) = status_filter {
      self.document_repo.list_by_status(status)
    } else if let Some(customer_id) = customer_filter {
      self.document_repo.list_by_customer(customer_id)
    } else {
      self.document_repo.list()
    }
  }

  /// Documents past their due date, excluding settled and cancelled ones.
  /// Overdue is derived here at read time; nothing is written back.
  pub fn list_overdue(
    &self,
    user_id: Uuid,
    today: NaiveDate,
  ) -> Result<Vec<BillingDocument>, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;
    let documents = self.document_repo.list()?;
    Ok(
      documents
        .into_iter()
        .filter(|d| d.is_overdue(today))
        .collect(),
    )
  }

  /// Sum of remaining balances across open payment-bearing documents in the
  /// given currency.
  pub fn outstanding_balance(
    &self,
    user_id: Uuid,
    currency: Currency,
  ) -> Result<Money, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;

    let documents = self.document_repo.list()?;
    let mut balance = Money::zero(currency);
    for document in documents {
      if document.currency != currency
        || !document.document_type.config().show_payment
        || document.status.is_terminal()
        || document.status == DocumentStatus::Draft
      {
        continue;
      }
      balance = balance.add(&document.remaining_amount()?)?;
    }
    Ok(balance)
  }

  // Customer directory operations
  pub fn create_customer(
    &self,
    user_id: Uuid,
    customer: Customer,
  ) -> Result<Customer, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;
    self.customer_repo.create(customer)
  }

  pub fn get_customer(&self, user_id: Uuid, customer_id: Uuid) -> Result<Customer, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;
    self
      .customer_repo
      .find_by_id(customer_id)?
      .ok_or(BillingError::CustomerNotFound(customer_id))
  }

  pub fn list_customers(&self, user_id: Uuid) -> Result<Vec<Customer>, BillingError> {
    self.authorize(user_id, Capability::ManageBilling)?;
    self.customer_repo.list()
  }

  // Helper methods
  fn authorize(&self, user_id: Uuid, capability: Capability) -> Result<User, BillingError> {
    let user = self
      .user_repo
      .find_by_id(user_id)
      .map_err(|e| BillingError::Repository(e.to_string()))?
      .ok_or_else(|| BillingError::PermissionDenied(format!("Unknown user: {}", user_id)))?;

    if !user.role.allows(capability) {
      return Err(BillingError::PermissionDenied(format!(
        "Role {} lacks capability {}",
        user.role.as_str(),
        capability.as_str()
      )));
    }
    Ok(user)
  }
}
