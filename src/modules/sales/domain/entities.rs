use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::domain::value_objects::ItemType;

/// One line of a sale: a product or spare part, its quantity and
/// pricing. Owned by the sale and replaced as a unit on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub id: Uuid,
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: i32,
    pub line_total: i32,
}

/// Input shape for sale lines on create/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemInput {
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: i32,
    pub line_total: i32,
}

impl SaleItemInput {
    pub fn into_item(self) -> SaleItem {
        SaleItem {
            id: Uuid::new_v4(),
            item_type: self.item_type,
            product_id: self.product_id,
            spare_part_id: self.spare_part_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            line_total: self.line_total,
        }
    }
}

/// A transaction associating a customer with purchased items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub invoice_number: String,
    pub sale_date: DateTime<Utc>,
    pub total_amount: i32,
    pub payment_mode: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<SaleItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
