use crate::modules::services::domain::entities::{ServiceJob, ServiceJobItem};
use crate::modules::services::domain::value_objects::{ServiceDueStatus, ServiceVisitStatus};
use crate::schema::{service_job_items, service_jobs};
use crate::shared::domain::value_objects::ItemType;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// ============= SERVICE JOB MODELS =============

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = service_jobs)]
pub struct ServiceJobModel {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_product_id: Option<Uuid>,
    pub engineer_id: Option<Uuid>,
    pub sale_id: Option<Uuid>,
    pub visit_scheduled_date: Option<DateTime<Utc>>,
    pub service_due_date: Option<DateTime<Utc>>,
    pub service_visit_status: ServiceVisitStatus,
    pub service_due_status: Option<ServiceDueStatus>,
    pub job_type: Option<String>,
    pub warranty_status: Option<String>,
    pub problem_description: Option<String>,
    pub resolution_notes: Option<String>,
    pub billed_amount: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new service jobs
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = service_jobs)]
pub struct NewServiceJobRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_product_id: Option<Uuid>,
    pub engineer_id: Option<Uuid>,
    pub sale_id: Option<Uuid>,
    pub visit_scheduled_date: Option<DateTime<Utc>>,
    pub service_due_date: Option<DateTime<Utc>>,
    pub service_visit_status: ServiceVisitStatus,
    pub service_due_status: Option<ServiceDueStatus>,
    pub job_type: Option<String>,
    pub warranty_status: Option<String>,
    pub problem_description: Option<String>,
    pub resolution_notes: Option<String>,
    pub billed_amount: Option<i32>,
}

// For updating existing service jobs (excludes id and created_at).
// Nullable columns go through Option<Option<_>> so cleared values
// really write NULL.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = service_jobs)]
pub struct ServiceJobChangeset {
    pub customer_id: Uuid,
    pub customer_product_id: Option<Option<Uuid>>,
    pub engineer_id: Option<Option<Uuid>>,
    pub sale_id: Option<Option<Uuid>>,
    pub visit_scheduled_date: Option<Option<DateTime<Utc>>>,
    pub service_due_date: Option<Option<DateTime<Utc>>>,
    pub service_visit_status: ServiceVisitStatus,
    pub service_due_status: Option<Option<ServiceDueStatus>>,
    pub job_type: Option<Option<String>>,
    pub warranty_status: Option<Option<String>>,
    pub problem_description: Option<Option<String>>,
    pub resolution_notes: Option<Option<String>>,
    pub billed_amount: Option<Option<i32>>,
    pub updated_at: DateTime<Utc>,
}

// ============= SERVICE JOB ITEM MODELS =============

// For reading with associations
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(ServiceJobModel, foreign_key = service_job_id))]
#[diesel(table_name = service_job_items)]
pub struct ServiceJobItemModel {
    pub id: Uuid,
    pub service_job_id: Uuid,
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: i32,
    pub covered_by_warranty: bool,
    pub position: i32,
}

// For inserting job items
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = service_job_items)]
pub struct NewServiceJobItem {
    pub id: Uuid,
    pub service_job_id: Uuid,
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: i32,
    pub covered_by_warranty: bool,
    pub position: i32,
}

impl ServiceJobModel {
    pub fn into_entity(self, items: Vec<ServiceJobItemModel>) -> ServiceJob {
        ServiceJob {
            id: self.id,
            customer_id: self.customer_id,
            customer_product_id: self.customer_product_id,
            engineer_id: self.engineer_id,
            sale_id: self.sale_id,
            visit_scheduled_date: self.visit_scheduled_date,
            service_due_date: self.service_due_date,
            service_visit_status: self.service_visit_status,
            service_due_status: self.service_due_status,
            job_type: self.job_type,
            warranty_status: self.warranty_status,
            problem_description: self.problem_description,
            resolution_notes: self.resolution_notes,
            billed_amount: self.billed_amount,
            items: items.into_iter().map(ServiceJobItemModel::into_item).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl ServiceJobItemModel {
    pub fn into_item(self) -> ServiceJobItem {
        ServiceJobItem {
            id: self.id,
            item_type: self.item_type,
            product_id: self.product_id,
            spare_part_id: self.spare_part_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            covered_by_warranty: self.covered_by_warranty,
        }
    }
}

impl NewServiceJobRow {
    pub fn from_entity(job: &ServiceJob) -> Self {
        Self {
            id: job.id,
            customer_id: job.customer_id,
            customer_product_id: job.customer_product_id,
            engineer_id: job.engineer_id,
            sale_id: job.sale_id,
            visit_scheduled_date: job.visit_scheduled_date,
            service_due_date: job.service_due_date,
            service_visit_status: job.service_visit_status,
            service_due_status: job.service_due_status,
            job_type: job.job_type.clone(),
            warranty_status: job.warranty_status.clone(),
            problem_description: job.problem_description.clone(),
            resolution_notes: job.resolution_notes.clone(),
            billed_amount: job.billed_amount,
        }
    }
}

impl ServiceJobChangeset {
    pub fn from_entity(job: &ServiceJob) -> Self {
        Self {
            customer_id: job.customer_id,
            customer_product_id: Some(job.customer_product_id),
            engineer_id: Some(job.engineer_id),
            sale_id: Some(job.sale_id),
            visit_scheduled_date: Some(job.visit_scheduled_date),
            service_due_date: Some(job.service_due_date),
            service_visit_status: job.service_visit_status,
            service_due_status: Some(job.service_due_status),
            job_type: Some(job.job_type.clone()),
            warranty_status: Some(job.warranty_status.clone()),
            problem_description: Some(job.problem_description.clone()),
            resolution_notes: Some(job.resolution_notes.clone()),
            billed_amount: Some(job.billed_amount),
            updated_at: job.updated_at,
        }
    }
}

impl NewServiceJobItem {
    pub fn from_items(job_id: Uuid, items: &[ServiceJobItem]) -> Vec<Self> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| Self {
                id: item.id,
                service_job_id: job_id,
                item_type: item.item_type,
                product_id: item.product_id,
                spare_part_id: item.spare_part_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
                covered_by_warranty: item.covered_by_warranty,
                position: index as i32,
            })
            .collect()
    }
}
