use crate::modules::inventory::domain::entities::InventoryTransaction;
use crate::modules::inventory::domain::value_objects::TransactionKind;
use crate::schema::inventory_transactions;
use crate::shared::domain::value_objects::ItemType;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = inventory_transactions)]
pub struct InventoryTransactionModel {
    pub id: Uuid,
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub kind: TransactionKind,
    pub unit_price: Option<i32>,
    pub total_amount: Option<i32>,
    pub notes: Option<String>,
    pub transaction_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// For inserting new transactions; rows are immutable once written.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = inventory_transactions)]
pub struct NewInventoryTransaction {
    pub id: Uuid,
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub kind: TransactionKind,
    pub unit_price: Option<i32>,
    pub total_amount: Option<i32>,
    pub notes: Option<String>,
    pub transaction_date: DateTime<Utc>,
}

impl InventoryTransactionModel {
    pub fn into_entity(self) -> InventoryTransaction {
        InventoryTransaction {
            id: self.id,
            item_type: self.item_type,
            product_id: self.product_id,
            spare_part_id: self.spare_part_id,
            quantity: self.quantity,
            kind: self.kind,
            unit_price: self.unit_price,
            total_amount: self.total_amount,
            notes: self.notes,
            transaction_date: self.transaction_date,
            created_at: self.created_at,
        }
    }
}

impl NewInventoryTransaction {
    pub fn from_entity(txn: &InventoryTransaction) -> Self {
        Self {
            id: txn.id,
            item_type: txn.item_type,
            product_id: txn.product_id,
            spare_part_id: txn.spare_part_id,
            quantity: txn.quantity,
            kind: txn.kind,
            unit_price: txn.unit_price,
            total_amount: txn.total_amount,
            notes: txn.notes.clone(),
            transaction_date: txn.transaction_date,
        }
    }
}
