pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::EngineerService;
pub use domain::{Engineer, EngineerRepository};
pub use infrastructure::EngineerRepositoryImpl;
