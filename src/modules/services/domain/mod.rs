pub mod aggregation;
pub mod cadence;
pub mod entities;
pub mod repository;
pub mod status;
pub mod value_objects;

// Re-exports for easy access
pub use aggregation::{tally_service_jobs, ServiceCounts, DUE_SOON_WINDOW_DAYS};
pub use entities::{NewServiceJob, ServiceJob, ServiceJobItem, ServiceJobItemInput, ServiceJobPatch};
pub use repository::{ServiceJobQuery, ServiceJobRepository};
pub use value_objects::{ServiceDueStatus, ServiceVisitStatus};
