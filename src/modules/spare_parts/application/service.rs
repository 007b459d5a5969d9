use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::spare_parts::domain::{
    entities::SparePart,
    repository::{SparePartFilter, SparePartRepository},
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSparePartRequest {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: Option<i32>,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub product_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSparePartRequest {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub stock_quantity: Option<i32>,
    pub is_active: Option<bool>,
    pub product_id: Option<Uuid>,
}

fn default_true() -> bool {
    true
}

pub struct SparePartService {
    spare_part_repo: Arc<dyn SparePartRepository>,
}

impl SparePartService {
    pub fn new(spare_part_repo: Arc<dyn SparePartRepository>) -> Self {
        Self { spare_part_repo }
    }

    pub async fn list_spare_parts(
        &self,
        search: Option<&str>,
        filter: Option<SparePartFilter>,
        product_id: Option<Uuid>,
    ) -> AppResult<Vec<SparePart>> {
        self.spare_part_repo
            .find_many(search, filter, product_id)
            .await
    }

    pub async fn get_spare_part(&self, id: &Uuid) -> AppResult<Option<SparePart>> {
        self.spare_part_repo.find_by_id(id).await
    }

    pub async fn create_spare_part(
        &self,
        request: CreateSparePartRequest,
    ) -> AppResult<SparePart> {
        Validator::validate_person_name("Spare part name", &request.name)?;
        Validator::validate_sku(&request.sku)?;
        if let Some(price) = request.price {
            Validator::validate_amount("Price", price)?;
        }

        if self
            .spare_part_repo
            .find_by_sku(&request.sku)
            .await?
            .is_some()
        {
            return Err(AppError::ValidationError(format!(
                "Spare part with SKU '{}' already exists",
                request.sku
            )));
        }

        let now = Utc::now();
        let part = SparePart {
            id: Uuid::new_v4(),
            name: request.name,
            sku: request.sku,
            description: request.description,
            price: request.price,
            stock_quantity: request.stock_quantity,
            is_active: request.is_active,
            product_id: request.product_id,
            created_at: now,
            updated_at: now,
        };

        let saved = self.spare_part_repo.create(&part).await?;
        log_info!("Created spare part '{}' ({})", saved.name, saved.id);

        Ok(saved)
    }

    pub async fn update_spare_part(
        &self,
        id: &Uuid,
        request: UpdateSparePartRequest,
    ) -> AppResult<SparePart> {
        let mut part = self
            .spare_part_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Spare part with ID {} not found", id)))?;

        if let Some(name) = request.name {
            Validator::validate_person_name("Spare part name", &name)?;
            part.name = name;
        }
        if let Some(sku) = request.sku {
            Validator::validate_sku(&sku)?;
            if let Some(existing) = self.spare_part_repo.find_by_sku(&sku).await? {
                if existing.id != part.id {
                    return Err(AppError::ValidationError(format!(
                        "Spare part with SKU '{}' already exists",
                        sku
                    )));
                }
            }
            part.sku = sku;
        }
        if request.description.is_some() {
            part.description = request.description;
        }
        if let Some(price) = request.price {
            Validator::validate_amount("Price", price)?;
            part.price = Some(price);
        }
        if let Some(quantity) = request.stock_quantity {
            part.stock_quantity = quantity;
        }
        if let Some(active) = request.is_active {
            part.is_active = active;
        }
        if request.product_id.is_some() {
            part.product_id = request.product_id;
        }
        part.updated_at = Utc::now();

        let updated = self.spare_part_repo.update(&part).await?;
        log_debug!("Updated spare part {}", updated.id);

        Ok(updated)
    }

    pub async fn delete_spare_part(&self, id: &Uuid) -> AppResult<()> {
        self.spare_part_repo.delete(id).await?;
        log_info!("Deleted spare part {}", id);
        Ok(())
    }
}
