pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::InventoryService;
pub use domain::{InventoryQuery, InventoryRepository, InventoryTransaction, TransactionKind};
pub use infrastructure::InventoryRepositoryImpl;
