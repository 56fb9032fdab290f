pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::User;
pub use errors::AccessError;
pub use ports::UserRepository;
pub use services::{AccessService, DEMO_PASSWORD};
pub use value_objects::{Capability, Role};
