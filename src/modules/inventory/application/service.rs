use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log_info;
use crate::modules::inventory::domain::{
    entities::InventoryTransaction,
    repository::{InventoryQuery, InventoryRepository},
    value_objects::TransactionKind,
};
use crate::modules::products::domain::repository::ProductRepository;
use crate::modules::spare_parts::domain::repository::SparePartRepository;
use crate::shared::domain::value_objects::ItemType;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::clock::Clock;
use crate::shared::utils::dates::{at_midnight, date_only};
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTransactionRequest {
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub kind: TransactionKind,
    pub unit_price: Option<i32>,
    pub total_amount: Option<i32>,
    pub notes: Option<String>,
    /// Defaults to today when absent; stored day-truncated either way.
    pub transaction_date: Option<DateTime<Utc>>,
}

pub struct InventoryService {
    inventory_repo: Arc<dyn InventoryRepository>,
    product_repo: Arc<dyn ProductRepository>,
    spare_part_repo: Arc<dyn SparePartRepository>,
    clock: Arc<dyn Clock>,
}

impl InventoryService {
    pub fn new(
        inventory_repo: Arc<dyn InventoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
        spare_part_repo: Arc<dyn SparePartRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inventory_repo,
            product_repo,
            spare_part_repo,
            clock,
        }
    }

    pub async fn list_transactions(
        &self,
        query: &InventoryQuery,
    ) -> AppResult<Vec<InventoryTransaction>> {
        self.inventory_repo.find_many(query).await
    }

    /// Record a stock movement and adjust the referenced item's stock
    /// count.
    pub async fn record_transaction(
        &self,
        request: RecordTransactionRequest,
    ) -> AppResult<InventoryTransaction> {
        Validator::validate_quantity(request.quantity)?;

        match request.item_type {
            ItemType::Product => {
                let product_id = request.product_id.ok_or_else(|| {
                    AppError::ValidationError(
                        "Product transactions need a product reference".to_string(),
                    )
                })?;
                if self.product_repo.find_by_id(&product_id).await?.is_none() {
                    return Err(AppError::NotFound(format!(
                        "Product with ID {} not found",
                        product_id
                    )));
                }
            }
            ItemType::SparePart => {
                let spare_part_id = request.spare_part_id.ok_or_else(|| {
                    AppError::ValidationError(
                        "Spare part transactions need a spare part reference".to_string(),
                    )
                })?;
                if self
                    .spare_part_repo
                    .find_by_id(&spare_part_id)
                    .await?
                    .is_none()
                {
                    return Err(AppError::NotFound(format!(
                        "Spare part with ID {} not found",
                        spare_part_id
                    )));
                }
            }
        }

        let now = self.clock.now();
        let txn = InventoryTransaction {
            id: Uuid::new_v4(),
            item_type: request.item_type,
            product_id: request.product_id,
            spare_part_id: request.spare_part_id,
            quantity: request.quantity,
            kind: request.kind,
            unit_price: request.unit_price,
            total_amount: request.total_amount,
            notes: request.notes,
            transaction_date: at_midnight(date_only(request.transaction_date.unwrap_or(now))),
            created_at: now,
        };

        let saved = self.inventory_repo.record(&txn).await?;
        log_info!(
            "Recorded {} of {} x{} ({:?})",
            saved.kind,
            saved.item_type,
            saved.quantity,
            saved.id
        );

        Ok(saved)
    }
}
