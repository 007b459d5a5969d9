use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::products::domain::{
    entities::Product,
    repository::{ProductRepository, StockFilter},
    value_objects::ServiceFrequency,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    #[serde(default)]
    pub current_stock: i32,
    #[serde(default = "default_reorder_level")]
    pub reorder_level: i32,
    #[serde(default)]
    pub unit_price: i32,
    pub cost_price: Option<i32>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub warranty_period: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub service_frequency: ServiceFrequency,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub current_stock: Option<i32>,
    pub reorder_level: Option<i32>,
    pub unit_price: Option<i32>,
    pub cost_price: Option<i32>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub warranty_period: Option<i32>,
    pub is_active: Option<bool>,
    pub service_frequency: Option<ServiceFrequency>,
}

fn default_reorder_level() -> i32 {
    10
}

fn default_true() -> bool {
    true
}

pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn list_products(
        &self,
        search: Option<&str>,
        stock: Option<StockFilter>,
    ) -> AppResult<Vec<Product>> {
        self.product_repo.find_many(search, stock).await
    }

    pub async fn get_product(&self, id: &Uuid) -> AppResult<Option<Product>> {
        self.product_repo.find_by_id(id).await
    }

    pub async fn create_product(&self, request: CreateProductRequest) -> AppResult<Product> {
        Validator::validate_person_name("Product name", &request.name)?;
        Validator::validate_sku(&request.sku)?;
        Validator::validate_amount("Unit price", request.unit_price)?;

        if self.product_repo.find_by_sku(&request.sku).await?.is_some() {
            return Err(AppError::ValidationError(format!(
                "Product with SKU '{}' already exists",
                request.sku
            )));
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: request.name,
            sku: request.sku,
            category: request.category,
            current_stock: request.current_stock,
            reorder_level: request.reorder_level,
            unit_price: request.unit_price,
            cost_price: request.cost_price,
            description: request.description,
            manufacturer: request.manufacturer,
            model: request.model,
            warranty_period: request.warranty_period,
            is_active: request.is_active,
            service_frequency: request.service_frequency,
            created_at: now,
            updated_at: now,
        };

        let saved = self.product_repo.create(&product).await?;
        log_info!("Created product '{}' ({})", saved.name, saved.id);

        Ok(saved)
    }

    pub async fn update_product(
        &self,
        id: &Uuid,
        request: UpdateProductRequest,
    ) -> AppResult<Product> {
        let mut product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found", id)))?;

        if let Some(name) = request.name {
            Validator::validate_person_name("Product name", &name)?;
            product.name = name;
        }
        if let Some(sku) = request.sku {
            Validator::validate_sku(&sku)?;
            if let Some(existing) = self.product_repo.find_by_sku(&sku).await? {
                if existing.id != product.id {
                    return Err(AppError::ValidationError(format!(
                        "Product with SKU '{}' already exists",
                        sku
                    )));
                }
            }
            product.sku = sku;
        }
        if request.category.is_some() {
            product.category = request.category;
        }
        if let Some(stock) = request.current_stock {
            product.current_stock = stock;
        }
        if let Some(level) = request.reorder_level {
            product.reorder_level = level;
        }
        if let Some(price) = request.unit_price {
            Validator::validate_amount("Unit price", price)?;
            product.unit_price = price;
        }
        if request.cost_price.is_some() {
            product.cost_price = request.cost_price;
        }
        if request.description.is_some() {
            product.description = request.description;
        }
        if request.manufacturer.is_some() {
            product.manufacturer = request.manufacturer;
        }
        if request.model.is_some() {
            product.model = request.model;
        }
        if request.warranty_period.is_some() {
            product.warranty_period = request.warranty_period;
        }
        if let Some(active) = request.is_active {
            product.is_active = active;
        }
        if let Some(frequency) = request.service_frequency {
            product.service_frequency = frequency;
        }
        product.updated_at = Utc::now();

        let updated = self.product_repo.update(&product).await?;
        log_debug!("Updated product {}", updated.id);

        Ok(updated)
    }

    pub async fn delete_product(&self, id: &Uuid) -> AppResult<()> {
        self.product_repo.delete(id).await?;
        log_info!("Deleted product {}", id);
        Ok(())
    }
}
