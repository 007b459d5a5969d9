use async_trait::async_trait;
use uuid::Uuid;

use super::entities::ServiceJob;
use super::value_objects::{ServiceDueStatus, ServiceVisitStatus};
use crate::shared::errors::AppResult;

/// Storage-level filter for job listings: free-text search over
/// customer and engineer names plus exact status matches. Date-window
/// buckets are applied above the store, where "today" lives.
#[derive(Debug, Clone, Default)]
pub struct ServiceJobQuery {
    pub search: Option<String>,
    pub due_status: Option<ServiceDueStatus>,
    pub visit_status: Option<ServiceVisitStatus>,
}

#[async_trait]
pub trait ServiceJobRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<ServiceJob>>;

    /// Jobs matching the query, scheduled date ascending, items
    /// included.
    async fn find_many(&self, query: &ServiceJobQuery) -> AppResult<Vec<ServiceJob>>;

    /// Most recently scheduled jobs first.
    async fn find_recent(&self, limit: i64) -> AppResult<Vec<ServiceJob>>;

    async fn create(&self, job: &ServiceJob) -> AppResult<ServiceJob>;

    /// Create several jobs in one transaction (sale-triggered
    /// generation).
    async fn create_many(&self, jobs: &[ServiceJob]) -> AppResult<Vec<ServiceJob>>;

    /// Persist the job; its item collection is replaced as a unit.
    async fn update(&self, job: &ServiceJob) -> AppResult<ServiceJob>;

    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;
}
