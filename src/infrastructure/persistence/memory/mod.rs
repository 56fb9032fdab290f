pub mod catalog_repository;
pub mod customer_repository;
pub mod document_repository;
pub mod order_repository;
pub mod payment_repository;
pub mod user_repository;

pub use catalog_repository::MemoryCatalogRepository;
pub use customer_repository::MemoryCustomerRepository;
pub use document_repository::MemoryDocumentRepository;
pub use order_repository::MemoryOrderRepository;
pub use payment_repository::MemoryPaymentRepository;
pub use user_repository::MemoryUserRepository;
