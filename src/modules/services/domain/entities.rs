use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status;
use super::value_objects::{ServiceDueStatus, ServiceVisitStatus};
use crate::shared::application::patch::Field;
use crate::shared::domain::value_objects::ItemType;

/// A part or product consumed during a service visit. Owned by the
/// job and replaced as a unit on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceJobItem {
    pub id: Uuid,
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: i32,
    pub covered_by_warranty: bool,
}

/// Input shape for job items on create/update; ids are assigned when
/// the owning job persists them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceJobItemInput {
    pub item_type: ItemType,
    pub product_id: Option<Uuid>,
    pub spare_part_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: i32,
    #[serde(default)]
    pub covered_by_warranty: bool,
}

impl ServiceJobItemInput {
    pub fn into_item(self) -> ServiceJobItem {
        ServiceJobItem {
            id: Uuid::new_v4(),
            item_type: self.item_type,
            product_id: self.product_id,
            spare_part_id: self.spare_part_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            covered_by_warranty: self.covered_by_warranty,
        }
    }
}

/// One service visit / work order for a customer's product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceJob {
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
    pub items: Vec<ServiceJobItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a job at creation time, before statuses are resolved.
#[derive(Debug, Clone)]
pub struct NewServiceJob {
    pub customer_id: Uuid,
    pub customer_product_id: Option<Uuid>,
    pub engineer_id: Option<Uuid>,
    pub sale_id: Option<Uuid>,
    pub visit_scheduled_date: Option<DateTime<Utc>>,
    pub service_due_date: Option<DateTime<Utc>>,
    pub service_visit_status: Option<ServiceVisitStatus>,
    pub job_type: Option<String>,
    pub warranty_status: Option<String>,
    pub problem_description: Option<String>,
    pub resolution_notes: Option<String>,
    pub billed_amount: Option<i32>,
    pub items: Vec<ServiceJobItemInput>,
}

/// Partial update to a service job. Three-state fields distinguish an
/// attribute left alone from one explicitly cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceJobPatch {
    pub customer_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub customer_product_id: Field<Uuid>,
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub engineer_id: Field<Uuid>,
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub visit_scheduled_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub service_due_date: Field<DateTime<Utc>>,
    pub service_visit_status: Option<ServiceVisitStatus>,
    pub job_type: Option<String>,
    pub warranty_status: Option<String>,
    pub problem_description: Option<String>,
    pub resolution_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub billed_amount: Field<i32>,
    /// When present, the item collection is replaced as a unit.
    pub items: Option<Vec<ServiceJobItemInput>>,
}

impl ServiceJob {
    /// Build a job from creation fields, resolving both status axes
    /// against `today`.
    pub fn create(fields: NewServiceJob, today: NaiveDate, now: DateTime<Utc>) -> Self {
        let visit_status = fields
            .service_visit_status
            .unwrap_or_else(|| status::initial_visit_status(fields.visit_scheduled_date));
        let due_status =
            status::derive_due_status(visit_status, fields.service_due_date, today);

        Self {
            id: Uuid::new_v4(),
            customer_id: fields.customer_id,
            customer_product_id: fields.customer_product_id,
            engineer_id: fields.engineer_id,
            sale_id: fields.sale_id,
            visit_scheduled_date: fields.visit_scheduled_date,
            service_due_date: fields.service_due_date,
            service_visit_status: visit_status,
            service_due_status: due_status,
            job_type: fields.job_type,
            warranty_status: fields.warranty_status,
            problem_description: fields.problem_description,
            resolution_notes: fields.resolution_notes,
            billed_amount: fields.billed_amount,
            items: fields.items.into_iter().map(ServiceJobItemInput::into_item).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, re-running the status transition rules.
    /// The due axis is never left stale: it is recomputed on every
    /// mutation from the resolved visit status and the patched due
    /// date.
    pub fn apply_patch(&mut self, patch: ServiceJobPatch, today: NaiveDate, now: DateTime<Utc>) {
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
        self.customer_product_id = patch
            .customer_product_id
            .apply_to(self.customer_product_id);
        self.engineer_id = patch.engineer_id.apply_to(self.engineer_id);

        let visit_status = status::resolve_visit_status(
            self.service_visit_status,
            patch.service_visit_status,
            &patch.visit_scheduled_date,
        );
        self.visit_scheduled_date = patch
            .visit_scheduled_date
            .apply_to(self.visit_scheduled_date);
        self.service_due_date = patch.service_due_date.apply_to(self.service_due_date);

        self.service_visit_status = visit_status;
        self.service_due_status =
            status::derive_due_status(visit_status, self.service_due_date, today);

        if let Some(job_type) = patch.job_type {
            self.job_type = Some(job_type);
        }
        if let Some(warranty_status) = patch.warranty_status {
            self.warranty_status = Some(warranty_status);
        }
        if let Some(problem) = patch.problem_description {
            self.problem_description = Some(problem);
        }
        if let Some(notes) = patch.resolution_notes {
            self.resolution_notes = Some(notes);
        }
        self.billed_amount = patch.billed_amount.apply_to(self.billed_amount);

        if let Some(items) = patch.items {
            self.items = items.into_iter().map(ServiceJobItemInput::into_item).collect();
        }

        self.updated_at = now;
    }

    /// Due status as of `today`, independent of what was last
    /// persisted. Time-sensitive consumers use this rather than the
    /// stored field.
    pub fn effective_due_status(&self, today: NaiveDate) -> Option<ServiceDueStatus> {
        status::derive_due_status(self.service_visit_status, self.service_due_date, today)
    }

    /// Recompute the stored due status against `today`.
    pub fn refresh_due_status(&mut self, today: NaiveDate) {
        self.service_due_status = self.effective_due_status(today);
    }
}
