use crate::modules::products::domain::entities::Product;
use crate::modules::products::domain::value_objects::ServiceFrequency;
use crate::schema::products;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct ProductModel {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub current_stock: i32,
    pub reorder_level: i32,
    pub unit_price: i32,
    pub cost_price: Option<i32>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub warranty_period: Option<i32>,
    pub is_active: bool,
    pub service_frequency: ServiceFrequency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new products
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub current_stock: i32,
    pub reorder_level: i32,
    pub unit_price: i32,
    pub cost_price: Option<i32>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub warranty_period: Option<i32>,
    pub is_active: bool,
    pub service_frequency: ServiceFrequency,
}

// For updating existing products (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = products)]
pub struct ProductChangeset {
    pub name: String,
    pub sku: String,
    pub category: Option<Option<String>>,
    pub current_stock: i32,
    pub reorder_level: i32,
    pub unit_price: i32,
    pub cost_price: Option<Option<i32>>,
    pub description: Option<Option<String>>,
    pub manufacturer: Option<Option<String>>,
    pub model: Option<Option<String>>,
    pub warranty_period: Option<Option<i32>>,
    pub is_active: bool,
    pub service_frequency: ServiceFrequency,
    pub updated_at: DateTime<Utc>,
}

impl ProductModel {
    pub fn into_entity(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            sku: self.sku,
            category: self.category,
            current_stock: self.current_stock,
            reorder_level: self.reorder_level,
            unit_price: self.unit_price,
            cost_price: self.cost_price,
            description: self.description,
            manufacturer: self.manufacturer,
            model: self.model,
            warranty_period: self.warranty_period,
            is_active: self.is_active,
            service_frequency: self.service_frequency,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl NewProduct {
    pub fn from_entity(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            current_stock: product.current_stock,
            reorder_level: product.reorder_level,
            unit_price: product.unit_price,
            cost_price: product.cost_price,
            description: product.description.clone(),
            manufacturer: product.manufacturer.clone(),
            model: product.model.clone(),
            warranty_period: product.warranty_period,
            is_active: product.is_active,
            service_frequency: product.service_frequency,
        }
    }
}

impl ProductChangeset {
    pub fn from_entity(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: Some(product.category.clone()),
            current_stock: product.current_stock,
            reorder_level: product.reorder_level,
            unit_price: product.unit_price,
            cost_price: Some(product.cost_price),
            description: Some(product.description.clone()),
            manufacturer: Some(product.manufacturer.clone()),
            model: Some(product.model.clone()),
            warranty_period: Some(product.warranty_period),
            is_active: product.is_active,
            service_frequency: product.service_frequency,
            updated_at: product.updated_at,
        }
    }
}
