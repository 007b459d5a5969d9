pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::ServiceJobService;
pub use domain::{
    ServiceCounts, ServiceDueStatus, ServiceJob, ServiceJobItem, ServiceJobPatch,
    ServiceJobRepository, ServiceVisitStatus,
};
pub use infrastructure::ServiceJobRepositoryImpl;
