pub mod entities;
pub mod repository;

// Re-exports for easy access
pub use entities::Engineer;
pub use repository::EngineerRepository;
