pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::ProductService;
pub use domain::{Product, ProductRepository, ServiceFrequency, StockFilter};
pub use infrastructure::ProductRepositoryImpl;
