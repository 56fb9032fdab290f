pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{CatalogItem, Unit};
pub use errors::CatalogError;
pub use ports::CatalogRepository;
