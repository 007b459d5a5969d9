pub mod service;

pub use service::{CreateServiceJobRequest, ServiceJobBucket, ServiceJobListFilter, ServiceJobService};
