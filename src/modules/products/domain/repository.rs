use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Product;
use crate::shared::errors::AppResult;

/// Stock-level buckets used by product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFilter {
    InStock,
    LowStock,
    OutOfStock,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Product>>;

    async fn find_by_sku(&self, sku: &str) -> AppResult<Option<Product>>;

    /// Case-insensitive search over name/sku/category plus an optional
    /// stock filter, ordered by name.
    async fn find_many(
        &self,
        search: Option<&str>,
        stock: Option<StockFilter>,
    ) -> AppResult<Vec<Product>>;

    /// Active products at or below their reorder level, lowest stock
    /// first.
    async fn find_low_stock(&self, limit: i64) -> AppResult<Vec<Product>>;

    async fn create(&self, product: &Product) -> AppResult<Product>;

    async fn update(&self, product: &Product) -> AppResult<Product>;

    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;
}
