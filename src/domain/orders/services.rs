use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::access::entities::User;
use crate::domain::access::ports::UserRepository;
use crate::domain::access::value_objects::Capability;
use crate::domain::billing::entities::{LineItems, StockWarning};
use crate::domain::billing::ports::CustomerRepository;
use crate::domain::billing::value_objects::{Currency, DocumentNumber, Quantity, TaxRate};
use crate::domain::catalog::ports::CatalogRepository;

use super::entities::{Order, OrderStatus, ORDER_NUMBER_PREFIX};
use super::errors::OrderError;
use super::ports::OrderRepository;

/// Order creation data
pub struct OrderData {
  pub customer_id: Uuid,
  pub tax_rate: TaxRate,
  pub currency: Currency,
  pub order_date: NaiveDate,
  pub delivery_date: Option<NaiveDate>,
  pub delivery_address: String,
  pub notes: Option<String>,
  pub line_items: Vec<OrderLineInput>,
}

pub struct OrderLineInput {
  pub catalog_item_id: Uuid,
  pub quantity: Quantity,
}

pub struct OrderService {
  order_repo: Arc<dyn OrderRepository>,
  customer_repo: Arc<dyn CustomerRepository>,
  catalog_repo: Arc<dyn CatalogRepository>,
  user_repo: Arc<dyn UserRepository>,
}

impl OrderService {
  pub fn new(
    order_repo: Arc<dyn OrderRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    catalog_repo: Arc<dyn CatalogRepository>,
    user_repo: Arc<dyn UserRepository>,
  ) -> Self {
    Self {
      order_repo,
      customer_repo,
      catalog_repo,
      user_repo,
    }
  }

  pub fn create_order(
    &self,
    user_id: Uuid,
    data: OrderData,
  ) -> Result<(Order, Vec<StockWarning>), OrderError> {
    let actor = self.authorize(user_id, Capability::ManageOrders)?;

    self
      .customer_repo
      .find_by_id(data.customer_id)
      .map_err(|e| OrderError::Repository(e.to_string()))?
      .ok_or(OrderError::CustomerNotFound(data.customer_id))?;

    if data.line_items.is_empty() {
      return Err(OrderError::NoLineItems);
    }

    let mut line_items = LineItems::new();
    let mut warnings = Vec::new();
    for input in data.line_items {
      let catalog_item = self
        .catalog_repo
        .find_by_id(input.catalog_item_id)
        .map_err(|e| OrderError::Repository(e.to_string()))?
        .ok_or(OrderError::UnknownItem(input.catalog_item_id))?;

      if catalog_item.unit_price.currency != data.currency {
        return Err(OrderError::CurrencyMismatch {
          expected: data.currency.as_str().to_string(),
          actual: catalog_item.unit_price.currency.as_str().to_string(),
        });
      }

      if let Some(warning) = line_items.add_or_merge(&catalog_item, input.quantity)? {
        tracing::warn!(
          item = %warning.item_name,
          requested = %warning.requested,
          available = %warning.available,
          "order quantity exceeds stock on hand"
        );
        warnings.push(warning);
      }
    }

    let existing = self.order_repo.count()?;
    let order_number =
      DocumentNumber::compose(ORDER_NUMBER_PREFIX, data.order_date.year(), existing + 1);

    let order = Order::new(
      order_number,
      data.customer_id,
      line_items,
      data.tax_rate,
      data.currency,
      data.order_date,
      data.delivery_date,
      data.delivery_address,
      data.notes,
      actor.id,
    )?;

    let created = self.order_repo.create(order)?;
    tracing::info!(order = %created.order_number, "order created");
    Ok((created, warnings))
  }

  pub fn change_order_status(
    &self,
    user_id: Uuid,
    order_id: Uuid,
    new_status: OrderStatus,
  ) -> Result<Order, OrderError> {
    self.authorize(user_id, Capability::ManageOrders)?;

    let mut order = self
      .order_repo
      .find_by_id(order_id)?
      .ok_or(OrderError::OrderNotFound(order_id))?;

    order.change_status(new_status)?;
    let order = self.order_repo.update(order)?;
    tracing::info!(order = %order.order_number, status = order.status.as_str(), "order status changed");
    Ok(order)
  }

  pub fn get_order(&self, user_id: Uuid, order_id: Uuid) -> Result<Order, OrderError> {
    self.authorize(user_id, Capability::ManageOrders)?;
    self
      .order_repo
      .find_by_id(order_id)?
      .ok_or(OrderError::OrderNotFound(order_id))
  }

  pub fn list_orders(
    &self,
    user_id: Uuid,
    status_filter: Option<OrderStatus>,
  ) -> Result<Vec<Order>, OrderError> {
    self.authorize(user_id, Capability::ManageOrders)?;

    match status_filter {
      Some(status) => self.order_repo.list_by_status(status),
      None => self.order_repo.list(),
    }
  }

  // Helper methods
  fn authorize(&self, user_id: Uuid, capability: Capability) -> Result<User, OrderError> {
    let user = self
      .user_repo
      .find_by_id(user_id)
      .map_err(|e| OrderError::Repository(e.to_string()))?
      .ok_or_else(|| OrderError::PermissionDenied(format!("Unknown user: {}", user_id)))?;

    if !user.role.allows(capability) {
      return Err(OrderError::PermissionDenied(format!(
        "Role {} lacks capability {}",
        user.role.as_str(),
        capability.as_str()
      )));
    }
    Ok(user)
  }
}
