use crate::modules::spare_parts::domain::entities::SparePart;
use crate::schema::spare_parts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = spare_parts)]
pub struct SparePartModel {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub product_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new spare parts
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = spare_parts)]
pub struct NewSparePart {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub product_id: Option<Uuid>,
}

// For updating existing spare parts (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = spare_parts)]
pub struct SparePartChangeset {
    pub name: String,
    pub sku: String,
    pub description: Option<Option<String>>,
    pub price: Option<Option<i32>>,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub product_id: Option<Option<Uuid>>,
    pub updated_at: DateTime<Utc>,
}

impl SparePartModel {
    pub fn into_entity(self) -> SparePart {
        SparePart {
            id: self.id,
            name: self.name,
            sku: self.sku,
            description: self.description,
            price: self.price,
            stock_quantity: self.stock_quantity,
            is_active: self.is_active,
            product_id: self.product_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl NewSparePart {
    pub fn from_entity(part: &SparePart) -> Self {
        Self {
            id: part.id,
            name: part.name.clone(),
            sku: part.sku.clone(),
            description: part.description.clone(),
            price: part.price,
            stock_quantity: part.stock_quantity,
            is_active: part.is_active,
            product_id: part.product_id,
        }
    }
}

impl SparePartChangeset {
    pub fn from_entity(part: &SparePart) -> Self {
        Self {
            name: part.name.clone(),
            sku: part.sku.clone(),
            description: Some(part.description.clone()),
            price: Some(part.price),
            stock_quantity: part.stock_quantity,
            is_active: part.is_active,
            product_id: Some(part.product_id),
            updated_at: part.updated_at,
        }
    }
}
