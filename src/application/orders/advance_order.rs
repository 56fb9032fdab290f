use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::orders::{OrderError, OrderService, OrderStatus};

#[derive(Debug, Deserialize)]
pub struct AdvanceOrderCommand {
  pub user_id: Uuid,
  pub order_id: Uuid,
  pub status: String,
}

#[derive(Debug, Serialize)]
pub struct AdvanceOrderResponse {
  pub order_id: Uuid,
  pub order_number: String,
  pub status: String,
}

pub struct AdvanceOrderUseCase {
  order_service: Arc<OrderService>,
}

impl AdvanceOrderUseCase {
  pub fn new(order_service: Arc<OrderService>) -> Self {
    Self { order_service }
  }

  pub fn execute(&self, command: AdvanceOrderCommand) -> Result<AdvanceOrderResponse, OrderError> {
    let status = OrderStatus::from_str(&command.status)?;

    let order = self
      .order_service
      .change_order_status(command.user_id, command.order_id, status)?;

    Ok(AdvanceOrderResponse {
      order_id: order.id,
      order_number: order.order_number.into_inner(),
      status: order.status.as_str().to_string(),
    })
  }
}
