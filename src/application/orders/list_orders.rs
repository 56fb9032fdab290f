use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::orders::{OrderError, OrderService, OrderStatus};

#[derive(Debug, Deserialize)]
pub struct ListOrdersCommand {
  pub user_id: Uuid,
  pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderSummaryDto {
  pub order_id: Uuid,
  pub order_number: String,
  pub customer_id: Uuid,
  pub status: String,
  pub total: Decimal,
  pub order_date: NaiveDate,
  pub delivery_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ListOrdersResponse {
  pub orders: Vec<OrderSummaryDto>,
}

pub struct ListOrdersUseCase {
  order_service: Arc<OrderService>,
}

impl ListOrdersUseCase {
  pub fn new(order_service: Arc<OrderService>) -> Self {
    Self { order_service }
  }

  pub fn execute(&self, command: ListOrdersCommand) -> Result<ListOrdersResponse, OrderError> {
    let status_filter = command
      .status
      .as_deref()
      .map(OrderStatus::from_str)
      .transpose()?;

    let orders = self
      .order_service
      .list_orders(command.user_id, status_filter)?;

    let orders = orders
      .iter()
      .map(|order| {
        let totals = order.totals()?;
        Ok(OrderSummaryDto {
          order_id: order.id,
          order_number: order.order_number.value().to_string(),
          customer_id: order.customer_id,
          status: order.status.as_str().to_string(),
          total: totals.total.amount,
          order_date: order.order_date,
          delivery_date: order.delivery_date,
        })
      })
      .collect::<Result<Vec<_>, OrderError>>()?;

    Ok(ListOrdersResponse { orders })
  }
}
