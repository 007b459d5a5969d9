use crate::modules::sales::domain::entities::{Sale, SaleItem};
use crate::schema::{sale_items, sales};
use crate::shared::domain::value_objects::ItemType;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// ============= SALE MODELS =============

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = sales)]
pub struct SaleModel {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub invoice_number: String,
    pub sale_date: DateTime<Utc>,
    pub total_amount: i32,
    pub payment_mode: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new sales
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = sales)]
pub struct NewSale {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub invoice_number: String,
    pub sale_date: DateTime<Utc>,
    pub total_amount: i32,
    pub payment_mode: Option<String>,
    pub notes: Option<String>,
}

// For updating existing sales (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = sales)]
pub struct SaleChangeset {
    pub customer_id: Uuid,
    pub invoice_number: String,
    pub sale_date: DateTime<Utc>,
    pub total_amount: i32,
    pub payment_mode: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

// ============= SALE ITEM MODELS =============

// For reading with associations
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(SaleModel, foreign_key = sale_id))]
#[diesel(table_name = sale_items)]
pub struct SaleItemModel {
    pub id: Uuid,
    pub sale_id: Uuid,
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: i32,
    pub line_total: i32,
    pub position: i32,
}

// For inserting sale items
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = sale_items)]
pub struct NewSaleItem {
    pub id: Uuid,
    pub sale_id: Uuid,
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: i32,
    pub line_total: i32,
    pub position: i32,
}

impl SaleModel {
    pub fn into_entity(self, items: Vec<SaleItemModel>) -> Sale {
        Sale {
            id: self.id,
            customer_id: self.customer_id,
            invoice_number: self.invoice_number,
            sale_date: self.sale_date,
            total_amount: self.total_amount,
            payment_mode: self.payment_mode,
            notes: self.notes,
            items: items.into_iter().map(SaleItemModel::into_item).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl SaleItemModel {
    pub fn into_item(self) -> SaleItem {
        SaleItem {
            id: self.id,
            item_type: self.item_type,
            product_id: self.product_id,
            spare_part_id: self.spare_part_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            line_total: self.line_total,
        }
    }
}

impl NewSale {
    pub fn from_entity(sale: &Sale) -> Self {
        Self {
            id: sale.id,
            customer_id: sale.customer_id,
            invoice_number: sale.invoice_number.clone(),
            sale_date: sale.sale_date,
            total_amount: sale.total_amount,
            payment_mode: sale.payment_mode.clone(),
            notes: sale.notes.clone(),
        }
    }
}

impl SaleChangeset {
    pub fn from_entity(sale: &Sale) -> Self {
        Self {
            customer_id: sale.customer_id,
            invoice_number: sale.invoice_number.clone(),
            sale_date: sale.sale_date,
            total_amount: sale.total_amount,
            payment_mode: Some(sale.payment_mode.clone()),
            notes: Some(sale.notes.clone()),
            updated_at: sale.updated_at,
        }
    }
}

impl NewSaleItem {
    pub fn from_items(sale_id: Uuid, items: &[SaleItem]) -> Vec<Self> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| Self {
                id: item.id,
                sale_id,
                item_type: item.item_type,
                product_id: item.product_id,
                spare_part_id: item.spare_part_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total: item.line_total,
                position: index as i32,
            })
            .collect()
    }
}
