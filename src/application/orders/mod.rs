pub mod advance_order;
pub mod create_order;
pub mod list_orders;

pub use advance_order::{AdvanceOrderCommand, AdvanceOrderResponse, AdvanceOrderUseCase};
pub use create_order::{
  CreateOrderCommand, CreateOrderLineDto, CreateOrderResponse, CreateOrderUseCase,
};
pub use list_orders::{ListOrdersCommand, ListOrdersResponse, ListOrdersUseCase};
