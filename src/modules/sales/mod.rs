pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::SaleService;
pub use domain::{Sale, SaleItem, SaleRepository};
pub use infrastructure::SaleRepositoryImpl;
