use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::customers::domain::{entities::Customer, repository::CustomerRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub full_name: String,
    pub mobile: String,
    pub alt_mobile: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    #[serde(default)]
    pub is_vip: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub alt_mobile: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub is_vip: Option<bool>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

fn default_true() -> bool {
    true
}

pub struct CustomerService {
    customer_repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    pub async fn list_customers(&self, search: Option<&str>) -> AppResult<Vec<Customer>> {
        self.customer_repo.find_many(search).await
    }

    pub async fn get_customer(&self, id: &Uuid) -> AppResult<Option<Customer>> {
        self.customer_repo.find_by_id(id).await
    }

    pub async fn create_customer(&self, request: CreateCustomerRequest) -> AppResult<Customer> {
        Validator::validate_person_name("Full name", &request.full_name)?;
        Validator::validate_mobile(&request.mobile)?;

        if self
            .customer_repo
            .find_by_mobile(&request.mobile)
            .await?
            .is_some()
        {
            return Err(AppError::ValidationError(
                "Mobile number already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let customer = Customer {
            id: Uuid::new_v4(),
            full_name: request.full_name,
            mobile: request.mobile,
            alt_mobile: request.alt_mobile,
            email: request.email,
            company_name: request.company_name,
            address: request.address,
            street: request.street,
            city: request.city,
            state: request.state,
            pincode: request.pincode,
            is_vip: request.is_vip,
            is_active: request.is_active,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };

        let saved = self.customer_repo.create(&customer).await?;
        log_info!("Created customer '{}' ({})", saved.full_name, saved.id);

        Ok(saved)
    }

    pub async fn update_customer(
        &self,
        id: &Uuid,
        request: UpdateCustomerRequest,
    ) -> AppResult<Customer> {
        let mut customer = self
            .customer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer with ID {} not found", id)))?;

        if let Some(full_name) = request.full_name {
            Validator::validate_person_name("Full name", &full_name)?;
            customer.full_name = full_name;
        }
        if let Some(mobile) = request.mobile {
            Validator::validate_mobile(&mobile)?;
            if let Some(existing) = self.customer_repo.find_by_mobile(&mobile).await? {
                if existing.id != customer.id {
                    return Err(AppError::ValidationError(
                        "Mobile number already exists".to_string(),
                    ));
                }
            }
            customer.mobile = mobile;
        }
        if request.alt_mobile.is_some() {
            customer.alt_mobile = request.alt_mobile;
        }
        if request.email.is_some() {
            customer.email = request.email;
        }
        if request.company_name.is_some() {
            customer.company_name = request.company_name;
        }
        if request.address.is_some() {
            customer.address = request.address;
        }
        if request.street.is_some() {
            customer.street = request.street;
        }
        if request.city.is_some() {
            customer.city = request.city;
        }
        if request.state.is_some() {
            customer.state = request.state;
        }
        if request.pincode.is_some() {
            customer.pincode = request.pincode;
        }
        if let Some(vip) = request.is_vip {
            customer.is_vip = vip;
        }
        if let Some(active) = request.is_active {
            customer.is_active = active;
        }
        if request.notes.is_some() {
            customer.notes = request.notes;
        }
        customer.updated_at = Utc::now();

        let updated = self.customer_repo.update(&customer).await?;
        log_debug!("Updated customer {}", updated.id);

        Ok(updated)
    }

    pub async fn delete_customer(&self, id: &Uuid) -> AppResult<()> {
        self.customer_repo.delete(id).await?;
        log_info!("Deleted customer {}", id);
        Ok(())
    }
}
