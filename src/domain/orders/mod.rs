pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::{Order, OrderStatus, ORDER_NUMBER_PREFIX};
pub use errors::OrderError;
pub use ports::OrderRepository;
pub use services::{OrderData, OrderLineInput, OrderService};
