use async_trait::async_trait;
use uuid::Uuid;

use super::entities::SparePart;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparePartFilter {
    Active,
    Inactive,
    LowStock,
}

#[async_trait]
pub trait SparePartRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SparePart>>;

    async fn find_by_sku(&self, sku: &str) -> AppResult<Option<SparePart>>;

    /// Case-insensitive search over name/sku/description, optional
    /// activity/stock filter, optional parent-product restriction;
    /// newest first.
    async fn find_many(
        &self,
        search: Option<&str>,
        filter: Option<SparePartFilter>,
        product_id: Option<Uuid>,
    ) -> AppResult<Vec<SparePart>>;

    async fn create(&self, part: &SparePart) -> AppResult<SparePart>;

    async fn update(&self, part: &SparePart) -> AppResult<SparePart>;

    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
