use crate::modules::engineers::domain::entities::Engineer;
use crate::schema::engineers;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = engineers)]
pub struct EngineerModel {
    pub id: Uuid,
    pub name: String,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new engineers
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = engineers)]
pub struct NewEngineer {
    pub id: Uuid,
    pub name: String,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub is_active: bool,
}

// For updating existing engineers (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = engineers)]
pub struct EngineerChangeset {
    pub name: String,
    pub mobile: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub specialization: Option<Option<String>>,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl EngineerModel {
    pub fn into_entity(self) -> Engineer {
        Engineer {
            id: self.id,
            name: self.name,
            mobile: self.mobile,
            email: self.email,
            specialization: self.specialization,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl NewEngineer {
    pub fn from_entity(engineer: &Engineer) -> Self {
        Self {
            id: engineer.id,
            name: engineer.name.clone(),
            mobile: engineer.mobile.clone(),
            email: engineer.email.clone(),
            specialization: engineer.specialization.clone(),
            is_active: engineer.is_active,
        }
    }
}

impl EngineerChangeset {
    pub fn from_entity(engineer: &Engineer) -> Self {
        Self {
            name: engineer.name.clone(),
            mobile: Some(engineer.mobile.clone()),
            email: Some(engineer.email.clone()),
            specialization: Some(engineer.specialization.clone()),
            is_active: engineer.is_active,
            updated_at: engineer.updated_at,
        }
    }
}
