use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::TransactionKind;
use crate::shared::domain::value_objects::ItemType;

/// A recorded stock movement for a product or spare part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTransaction {
    pub id: Uuid,
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub kind: TransactionKind,
    pub unit_price: Option<i32>,
    pub total_amount: Option<i32>,
    pub notes: Option<String>,
    /// Day the movement belongs to, truncated to midnight UTC.
    pub transaction_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
