use crate::modules::customers::domain::entities::Customer;
use crate::schema::customers;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct CustomerModel {
    pub id: Uuid,
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
    pub is_vip: bool,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new customers
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct NewCustomer {
    pub id: Uuid,
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
    pub is_vip: bool,
    pub is_active: bool,
    pub notes: Option<String>,
}

// For updating existing customers (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct CustomerChangeset {
    pub full_name: String,
    pub mobile: String,
    pub alt_mobile: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub company_name: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub street: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub pincode: Option<Option<String>>,
    pub is_vip: bool,
    pub is_active: bool,
    pub notes: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl CustomerModel {
    pub fn into_entity(self) -> Customer {
        Customer {
            id: self.id,
            full_name: self.full_name,
            mobile: self.mobile,
            alt_mobile: self.alt_mobile,
            email: self.email,
            company_name: self.company_name,
            address: self.address,
            street: self.street,
            city: self.city,
            state: self.state,
            pincode: self.pincode,
            is_vip: self.is_vip,
            is_active: self.is_active,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl NewCustomer {
    pub fn from_entity(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            full_name: customer.full_name.clone(),
            mobile: customer.mobile.clone(),
            alt_mobile: customer.alt_mobile.clone(),
            email: customer.email.clone(),
            company_name: customer.company_name.clone(),
            address: customer.address.clone(),
            street: customer.street.clone(),
            city: customer.city.clone(),
            state: customer.state.clone(),
            pincode: customer.pincode.clone(),
            is_vip: customer.is_vip,
            is_active: customer.is_active,
            notes: customer.notes.clone(),
        }
    }
}

impl CustomerChangeset {
    pub fn from_entity(customer: &Customer) -> Self {
        Self {
            full_name: customer.full_name.clone(),
            mobile: customer.mobile.clone(),
            alt_mobile: Some(customer.alt_mobile.clone()),
            email: Some(customer.email.clone()),
            company_name: Some(customer.company_name.clone()),
            address: Some(customer.address.clone()),
            street: Some(customer.street.clone()),
            city: Some(customer.city.clone()),
            state: Some(customer.state.clone()),
            pincode: Some(customer.pincode.clone()),
            is_vip: customer.is_vip,
            is_active: customer.is_active,
            notes: Some(customer.notes.clone()),
            updated_at: customer.updated_at,
        }
    }
}
