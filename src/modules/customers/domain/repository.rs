use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Customer;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Customer>>;

    async fn find_by_mobile(&self, mobile: &str) -> AppResult<Option<Customer>>;

    /// Case-insensitive search over name/mobile/company, ordered by
    /// name.
    async fn find_many(&self, search: Option<&str>) -> AppResult<Vec<Customer>>;

    async fn create(&self, customer: &Customer) -> AppResult<Customer>;

    async fn update(&self, customer: &Customer) -> AppResult<Customer>;

    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;
}
