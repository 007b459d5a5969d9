use async_trait::async_trait;
use uuid::Uuid;

use super::entities::InventoryTransaction;
use crate::shared::domain::value_objects::ItemType;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Default)]
pub struct InventoryQuery {
    pub item_type: Option<ItemType>,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
}

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Transactions matching the query, newest first.
    async fn find_many(&self, query: &InventoryQuery) -> AppResult<Vec<InventoryTransaction>>;

    /// Insert the transaction and apply its stock delta to the
    /// referenced product or spare part, atomically.
    async fn record(&self, txn: &InventoryTransaction) -> AppResult<InventoryTransaction>;
}
