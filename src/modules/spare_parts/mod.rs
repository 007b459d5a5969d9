pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::SparePartService;
pub use domain::{SparePart, SparePartFilter, SparePartRepository};
pub use infrastructure::SparePartRepositoryImpl;
