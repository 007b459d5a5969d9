pub mod entities;
pub mod repository;

// Re-exports for easy access
pub use entities::Customer;
pub use repository::CustomerRepository;
