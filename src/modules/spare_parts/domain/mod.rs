pub mod entities;
pub mod repository;

// Re-exports for easy access
pub use entities::SparePart;
pub use repository::{SparePartFilter, SparePartRepository};
