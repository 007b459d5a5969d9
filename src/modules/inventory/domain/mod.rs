pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports for easy access
pub use entities::InventoryTransaction;
pub use repository::{InventoryQuery, InventoryRepository};
pub use value_objects::TransactionKind;
