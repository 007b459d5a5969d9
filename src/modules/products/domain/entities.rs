use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::ServiceFrequency;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
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

impl Product {
    pub fn is_out_of_stock(&self) -> bool {
        self.current_stock <= 0
    }

    pub fn is_low_on_stock(&self) -> bool {
        self.current_stock <= self.reorder_level
    }
}
