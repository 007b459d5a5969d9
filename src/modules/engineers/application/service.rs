use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log_info;
use crate::modules::engineers::domain::{entities::Engineer, repository::EngineerRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEngineerRequest {
    pub name: String,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEngineerRequest {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

pub struct EngineerService {
    engineer_repo: Arc<dyn EngineerRepository>,
}

impl EngineerService {
    pub fn new(engineer_repo: Arc<dyn EngineerRepository>) -> Self {
        Self { engineer_repo }
    }

    pub async fn list_engineers(&self) -> AppResult<Vec<Engineer>> {
        self.engineer_repo.find_many().await
    }

    pub async fn get_engineer(&self, id: &Uuid) -> AppResult<Option<Engineer>> {
        self.engineer_repo.find_by_id(id).await
    }

    pub async fn create_engineer(&self, request: CreateEngineerRequest) -> AppResult<Engineer> {
        Validator::validate_person_name("Engineer name", &request.name)?;
        if let Some(mobile) = &request.mobile {
            Validator::validate_mobile(mobile)?;
        }

        let now = Utc::now();
        let engineer = Engineer {
            id: Uuid::new_v4(),
            name: request.name,
            mobile: request.mobile,
            email: request.email,
            specialization: request.specialization,
            is_active: request.is_active,
            created_at: now,
            updated_at: now,
        };

        let saved = self.engineer_repo.create(&engineer).await?;
        log_info!("Created engineer '{}' ({})", saved.name, saved.id);

        Ok(saved)
    }

    pub async fn update_engineer(
        &self,
        id: &Uuid,
        request: UpdateEngineerRequest,
    ) -> AppResult<Engineer> {
        let mut engineer = self
            .engineer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Engineer with ID {} not found", id)))?;

        if let Some(name) = request.name {
            Validator::validate_person_name("Engineer name", &name)?;
            engineer.name = name;
        }
        if let Some(mobile) = request.mobile {
            Validator::validate_mobile(&mobile)?;
            engineer.mobile = Some(mobile);
        }
        if request.email.is_some() {
            engineer.email = request.email;
        }
        if request.specialization.is_some() {
            engineer.specialization = request.specialization;
        }
        if let Some(active) = request.is_active {
            engineer.is_active = active;
        }
        engineer.updated_at = Utc::now();

        self.engineer_repo.update(&engineer).await
    }

    pub async fn delete_engineer(&self, id: &Uuid) -> AppResult<()> {
        self.engineer_repo.delete(id).await?;
        log_info!("Deleted engineer {}", id);
        Ok(())
    }
}
