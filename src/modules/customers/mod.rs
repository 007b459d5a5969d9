pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::CustomerService;
pub use domain::{Customer, CustomerRepository};
pub use infrastructure::CustomerRepositoryImpl;
