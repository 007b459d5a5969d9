pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports for easy access
pub use entities::Product;
pub use repository::{ProductRepository, StockFilter};
pub use value_objects::ServiceFrequency;
