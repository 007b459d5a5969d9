use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Sale;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Sale>>;

    /// Case-insensitive search over invoice number, payment mode and
    /// customer name, newest sale first, items included.
    async fn find_many(&self, search: Option<&str>) -> AppResult<Vec<Sale>>;

    /// Most recent sales first.
    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Sale>>;

    async fn create(&self, sale: &Sale) -> AppResult<Sale>;

    /// Persist the sale; its item collection is replaced as a unit.
    async fn update(&self, sale: &Sale) -> AppResult<Sale>;

    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;
}
