pub mod entities;
pub mod repository;

// Re-exports for easy access
pub use entities::{Sale, SaleItem, SaleItemInput};
pub use repository::SaleRepository;
