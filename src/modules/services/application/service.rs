use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::products::domain::repository::ProductRepository;
use crate::modules::sales::domain::entities::Sale;
use crate::modules::sales::domain::repository::SaleRepository;
use crate::modules::services::domain::{
    aggregation::{is_due_soon, tally_service_jobs, ServiceCounts},
    cadence,
    entities::{NewServiceJob, ServiceJob, ServiceJobItemInput, ServiceJobPatch},
    repository::{ServiceJobQuery, ServiceJobRepository},
    value_objects::{ServiceDueStatus, ServiceVisitStatus},
};
use crate::shared::domain::value_objects::ItemType;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::clock::Clock;
use crate::shared::utils::dates::{at_midnight, date_only, is_same_date, start_of_month};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Date-window buckets a service listing can be narrowed to. Resolved
/// against the clock above the store, re-deriving due status where the
/// bucket is time-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceJobBucket {
    Today,
    Overdue,
    DueSoon,
    CompletedThisMonth,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceJobListFilter {
    pub search: Option<String>,
    pub due_status: Option<ServiceDueStatus>,
    pub visit_status: Option<ServiceVisitStatus>,
    pub bucket: Option<ServiceJobBucket>,
}

impl ServiceJobListFilter {
    fn query(&self) -> ServiceJobQuery {
        ServiceJobQuery {
            search: self.search.clone(),
            due_status: self.due_status,
            visit_status: self.visit_status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceJobRequest {
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
    #[serde(default)]
    pub items: Vec<ServiceJobItemInput>,
}

pub struct ServiceJobService {
    service_job_repo: Arc<dyn ServiceJobRepository>,
    product_repo: Arc<dyn ProductRepository>,
    sale_repo: Arc<dyn SaleRepository>,
    clock: Arc<dyn Clock>,
}

impl ServiceJobService {
    pub fn new(
        service_job_repo: Arc<dyn ServiceJobRepository>,
        product_repo: Arc<dyn ProductRepository>,
        sale_repo: Arc<dyn SaleRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            service_job_repo,
            product_repo,
            sale_repo,
            clock,
        }
    }

    /// List jobs matching the filter. Due statuses in the result are
    /// re-derived against today so a listing never shows yesterday's
    /// classification.
    pub async fn list_service_jobs(
        &self,
        filter: &ServiceJobListFilter,
    ) -> AppResult<Vec<ServiceJob>> {
        let today = self.clock.today();
        let mut jobs = self.service_job_repo.find_many(&filter.query()).await?;

        for job in &mut jobs {
            job.refresh_due_status(today);
        }

        if let Some(bucket) = filter.bucket {
            let now = self.clock.now();
            let month_start = start_of_month(today);
            jobs.retain(|job| match bucket {
                ServiceJobBucket::Today => job
                    .visit_scheduled_date
                    .map(|d| is_same_date(d, now))
                    .unwrap_or(false),
                ServiceJobBucket::Overdue => {
                    job.effective_due_status(today) == Some(ServiceDueStatus::Overdue)
                }
                ServiceJobBucket::DueSoon => is_due_soon(job, today),
                ServiceJobBucket::CompletedThisMonth => {
                    job.service_visit_status == ServiceVisitStatus::Completed
                        && job
                            .visit_scheduled_date
                            .map(|d| date_only(d) >= month_start)
                            .unwrap_or(false)
                }
            });
        }

        Ok(jobs)
    }

    pub async fn get_service_job(&self, id: &Uuid) -> AppResult<Option<ServiceJob>> {
        let today = self.clock.today();
        let mut job = self.service_job_repo.find_by_id(id).await?;
        if let Some(job) = job.as_mut() {
            job.refresh_due_status(today);
        }
        Ok(job)
    }

    pub async fn create_service_job(
        &self,
        request: CreateServiceJobRequest,
    ) -> AppResult<ServiceJob> {
        for item in &request.items {
            Validator::validate_quantity(item.quantity)?;
        }

        let service_due_date = match request.service_due_date {
            Some(date) => Some(date),
            None => self.derive_due_date(&request).await?,
        };

        let Some(service_due_date) = service_due_date else {
            return Err(AppError::ValidationError(
                "Service due date is required: none was supplied and none can be derived \
                 from the product's maintenance cadence"
                    .to_string(),
            ));
        };

        let fields = NewServiceJob {
            customer_id: request.customer_id,
            customer_product_id: request.customer_product_id,
            engineer_id: request.engineer_id,
            sale_id: request.sale_id,
            visit_scheduled_date: request.visit_scheduled_date,
            service_due_date: Some(service_due_date),
            service_visit_status: request.service_visit_status,
            job_type: request.job_type,
            warranty_status: request.warranty_status,
            problem_description: request.problem_description,
            resolution_notes: request.resolution_notes,
            billed_amount: request.billed_amount,
            items: request.items,
        };

        let job = ServiceJob::create(fields, self.clock.today(), self.clock.now());
        let saved = self.service_job_repo.create(&job).await?;
        log_info!(
            "Created service job {} for customer {} (due {:?}, visit {})",
            saved.id,
            saved.customer_id,
            saved.service_due_date.map(date_only),
            saved.service_visit_status
        );

        Ok(saved)
    }

    /// Apply a partial update. The transition rules run on every
    /// mutation, so the due axis is recomputed here and never left
    /// stale.
    pub async fn update_service_job(
        &self,
        id: &Uuid,
        patch: ServiceJobPatch,
    ) -> AppResult<ServiceJob> {
        let mut job = self
            .service_job_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service job with ID {} not found", id)))?;

        if let Some(items) = &patch.items {
            for item in items {
                Validator::validate_quantity(item.quantity)?;
            }
        }

        job.apply_patch(patch, self.clock.today(), self.clock.now());

        let updated = self.service_job_repo.update(&job).await?;
        log_debug!(
            "Updated service job {} (visit {}, due {:?})",
            updated.id,
            updated.service_visit_status,
            updated.service_due_status
        );

        Ok(updated)
    }

    pub async fn delete_service_job(&self, id: &Uuid) -> AppResult<()> {
        self.service_job_repo.delete(id).await?;
        log_info!("Deleted service job {}", id);
        Ok(())
    }

    /// Bucket counts over the filtered collection, re-derived against
    /// today.
    pub async fn service_counts(&self, filter: &ServiceJobListFilter) -> AppResult<ServiceCounts> {
        let jobs = self.service_job_repo.find_many(&filter.query()).await?;
        Ok(tally_service_jobs(&jobs, self.clock.today()))
    }

    /// Sale side effect: one UNSCHEDULED job per scheduled occurrence
    /// for every product line item with a maintenance cadence. Due
    /// statuses are computed against today at creation time, so a
    /// past-dated sale can create jobs that are born overdue.
    pub async fn generate_jobs_for_sale(&self, sale: &Sale) -> AppResult<Vec<ServiceJob>> {
        let today = self.clock.today();
        let now = self.clock.now();
        let reference = date_only(sale.sale_date);

        let mut jobs = Vec::new();
        for item in &sale.items {
            if item.item_type != ItemType::Product {
                continue;
            }
            let Some(product_id) = item.product_id else {
                continue;
            };
            let Some(product) = self.product_repo.find_by_id(&product_id).await? else {
                continue;
            };

            for due_day in cadence::due_schedule(product.service_frequency, reference) {
                let fields = NewServiceJob {
                    customer_id: sale.customer_id,
                    customer_product_id: Some(product.id),
                    engineer_id: None,
                    sale_id: Some(sale.id),
                    visit_scheduled_date: None,
                    service_due_date: Some(at_midnight(due_day)),
                    service_visit_status: None,
                    job_type: Some("MAINTENANCE".to_string()),
                    warranty_status: None,
                    problem_description: None,
                    resolution_notes: None,
                    billed_amount: None,
                    items: Vec::new(),
                };
                jobs.push(ServiceJob::create(fields, today, now));
            }
        }

        if jobs.is_empty() {
            return Ok(jobs);
        }

        let saved = self.service_job_repo.create_many(&jobs).await?;
        log_info!(
            "Generated {} follow-up service job(s) for sale {}",
            saved.len(),
            sale.id
        );

        Ok(saved)
    }

    /// Derivation path for creation requests without an explicit due
    /// date: the referenced product's cadence applied to the sale date
    /// (or to today when the job is not tied to a sale).
    async fn derive_due_date(
        &self,
        request: &CreateServiceJobRequest,
    ) -> AppResult<Option<DateTime<Utc>>> {
        let Some(product_id) = request.customer_product_id else {
            return Ok(None);
        };
        let Some(product) = self.product_repo.find_by_id(&product_id).await? else {
            return Ok(None);
        };

        let reference = match request.sale_id {
            Some(sale_id) => match self.sale_repo.find_by_id(&sale_id).await? {
                Some(sale) => date_only(sale.sale_date),
                None => self.clock.today(),
            },
            None => self.clock.today(),
        };

        Ok(cadence::next_due_date(product.service_frequency, reference).map(at_midnight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::modules::products::domain::entities::Product;
    use crate::modules::products::domain::repository::StockFilter;
    use crate::modules::products::domain::value_objects::ServiceFrequency;
    use crate::modules::sales::domain::entities::{Sale, SaleItem};
    use crate::shared::application::patch::Field;
    use crate::shared::utils::clock::FixedClock;

    mockall::mock! {
        pub ServiceJobRepo {}

        #[async_trait::async_trait]
        impl ServiceJobRepository for ServiceJobRepo {
            async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<ServiceJob>>;
            async fn find_many(&self, query: &ServiceJobQuery) -> AppResult<Vec<ServiceJob>>;
            async fn find_recent(&self, limit: i64) -> AppResult<Vec<ServiceJob>>;
            async fn create(&self, job: &ServiceJob) -> AppResult<ServiceJob>;
            async fn create_many(&self, jobs: &[ServiceJob]) -> AppResult<Vec<ServiceJob>>;
            async fn update(&self, job: &ServiceJob) -> AppResult<ServiceJob>;
            async fn delete(&self, id: &Uuid) -> AppResult<()>;
            async fn count(&self) -> AppResult<i64>;
        }
    }

    mockall::mock! {
        pub ProductRepo {}

        #[async_trait::async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Product>>;
            async fn find_by_sku(&self, sku: &str) -> AppResult<Option<Product>>;
            async fn find_many<'a>(
                &'a self,
                search: Option<&'a str>,
                stock: Option<StockFilter>,
            ) -> AppResult<Vec<Product>>;
            async fn find_low_stock(&self, limit: i64) -> AppResult<Vec<Product>>;
            async fn create(&self, product: &Product) -> AppResult<Product>;
            async fn update(&self, product: &Product) -> AppResult<Product>;
            async fn delete(&self, id: &Uuid) -> AppResult<()>;
            async fn count(&self) -> AppResult<i64>;
        }
    }

    mockall::mock! {
        pub SaleRepo {}

        #[async_trait::async_trait]
        impl SaleRepository for SaleRepo {
            async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Sale>>;
            async fn find_many<'a>(&'a self, search: Option<&'a str>) -> AppResult<Vec<Sale>>;
            async fn find_recent(&self, limit: i64) -> AppResult<Vec<Sale>>;
            async fn create(&self, sale: &Sale) -> AppResult<Sale>;
            async fn update(&self, sale: &Sale) -> AppResult<Sale>;
            async fn delete(&self, id: &Uuid) -> AppResult<()>;
            async fn count(&self) -> AppResult<i64>;
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn midnight(s: &str) -> DateTime<Utc> {
        at_midnight(day(s))
    }

    fn quarterly_product(id: Uuid) -> Product {
        let now = midnight("2025-01-01");
        Product {
            id,
            name: "Water Purifier".to_string(),
            sku: "WP-1200".to_string(),
            category: None,
            current_stock: 4,
            reorder_level: 2,
            unit_price: 15000,
            cost_price: None,
            description: None,
            manufacturer: None,
            model: None,
            warranty_period: Some(12),
            is_active: true,
            service_frequency: ServiceFrequency::Quarterly,
            created_at: now,
            updated_at: now,
        }
    }

    fn planned_job(due: &str) -> ServiceJob {
        let fields = NewServiceJob {
            customer_id: Uuid::new_v4(),
            customer_product_id: None,
            engineer_id: None,
            sale_id: None,
            visit_scheduled_date: Some(midnight(due)),
            service_due_date: Some(midnight(due)),
            service_visit_status: None,
            job_type: None,
            warranty_status: None,
            problem_description: None,
            resolution_notes: None,
            billed_amount: None,
            items: Vec::new(),
        };
        ServiceJob::create(fields, day("2025-01-01"), midnight("2025-01-01"))
    }

    fn service_with(
        job_repo: MockServiceJobRepo,
        product_repo: MockProductRepo,
        sale_repo: MockSaleRepo,
        today: &str,
    ) -> ServiceJobService {
        ServiceJobService::new(
            Arc::new(job_repo),
            Arc::new(product_repo),
            Arc::new(sale_repo),
            Arc::new(FixedClock::on_day(today.parse().unwrap())),
        )
    }

    #[tokio::test]
    async fn completing_a_job_clears_due_status() {
        let job = planned_job("2025-02-01");
        let job_id = job.id;

        let mut job_repo = MockServiceJobRepo::new();
        job_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(job.clone())));
        job_repo
            .expect_update()
            .returning(|job| Ok(job.clone()));

        let service = service_with(
            job_repo,
            MockProductRepo::new(),
            MockSaleRepo::new(),
            "2025-06-01",
        );

        let patch = ServiceJobPatch {
            service_visit_status: Some(ServiceVisitStatus::Completed),
            ..Default::default()
        };
        let updated = service.update_service_job(&job_id, patch).await.unwrap();

        assert_eq!(updated.service_visit_status, ServiceVisitStatus::Completed);
        // Terminal visit wipes the due badge regardless of the past
        // due date.
        assert_eq!(updated.service_due_status, None);
    }

    #[tokio::test]
    async fn clearing_scheduled_date_infers_unscheduled() {
        let job = planned_job("2025-07-01");
        let job_id = job.id;
        assert_eq!(job.service_visit_status, ServiceVisitStatus::Planned);

        let mut job_repo = MockServiceJobRepo::new();
        job_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(job.clone())));
        job_repo
            .expect_update()
            .returning(|job| Ok(job.clone()));

        let service = service_with(
            job_repo,
            MockProductRepo::new(),
            MockSaleRepo::new(),
            "2025-06-01",
        );

        let patch = ServiceJobPatch {
            visit_scheduled_date: Field::Cleared,
            ..Default::default()
        };
        let updated = service.update_service_job(&job_id, patch).await.unwrap();

        assert_eq!(updated.service_visit_status, ServiceVisitStatus::Unscheduled);
        assert_eq!(updated.visit_scheduled_date, None);
        // The obligation itself is untouched and still tracked.
        assert_eq!(updated.service_due_status, Some(ServiceDueStatus::Due));
    }

    #[tokio::test]
    async fn update_recomputes_stale_due_status() {
        let job = planned_job("2025-05-01");
        let job_id = job.id;
        // Persisted while still in the future.
        assert_eq!(job.service_due_status, Some(ServiceDueStatus::Due));

        let mut job_repo = MockServiceJobRepo::new();
        job_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(job.clone())));
        job_repo
            .expect_update()
            .returning(|job| Ok(job.clone()));

        let service = service_with(
            job_repo,
            MockProductRepo::new(),
            MockSaleRepo::new(),
            "2025-06-01",
        );

        // Touch an unrelated field; the due axis must still refresh.
        let patch = ServiceJobPatch {
            resolution_notes: Some("called customer".to_string()),
            ..Default::default()
        };
        let updated = service.update_service_job(&job_id, patch).await.unwrap();

        assert_eq!(updated.service_due_status, Some(ServiceDueStatus::Overdue));
    }

    #[tokio::test]
    async fn creation_without_derivable_due_date_is_rejected() {
        let service = service_with(
            MockServiceJobRepo::new(),
            MockProductRepo::new(),
            MockSaleRepo::new(),
            "2025-06-01",
        );

        let request = CreateServiceJobRequest {
            customer_id: Uuid::new_v4(),
            customer_product_id: None,
            engineer_id: None,
            sale_id: None,
            visit_scheduled_date: None,
            service_due_date: None,
            service_visit_status: None,
            job_type: None,
            warranty_status: None,
            problem_description: None,
            resolution_notes: None,
            billed_amount: None,
            items: Vec::new(),
        };

        let err = service.create_service_job(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn creation_derives_due_date_from_product_cadence() {
        let product_id = Uuid::new_v4();
        let sale_id = Uuid::new_v4();
        let customer_id = Uuid::new_v4();

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(quarterly_product(*id))));

        let sale = Sale {
            id: sale_id,
            customer_id,
            invoice_number: "INV-100".to_string(),
            sale_date: midnight("2025-01-01"),
            total_amount: 15000,
            payment_mode: None,
            notes: None,
            items: Vec::<SaleItem>::new(),
            created_at: midnight("2025-01-01"),
            updated_at: midnight("2025-01-01"),
        };
        let mut sale_repo = MockSaleRepo::new();
        sale_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(sale.clone())));

        let mut job_repo = MockServiceJobRepo::new();
        job_repo.expect_create().returning(|job| Ok(job.clone()));

        let service = service_with(job_repo, product_repo, sale_repo, "2025-02-01");

        let request = CreateServiceJobRequest {
            customer_id,
            customer_product_id: Some(product_id),
            engineer_id: None,
            sale_id: Some(sale_id),
            visit_scheduled_date: None,
            service_due_date: None,
            service_visit_status: None,
            job_type: Some("MAINTENANCE".to_string()),
            warranty_status: None,
            problem_description: None,
            resolution_notes: None,
            billed_amount: None,
            items: Vec::new(),
        };

        let job = service.create_service_job(request).await.unwrap();

        assert_eq!(job.service_due_date, Some(midnight("2025-04-01")));
        assert_eq!(job.service_visit_status, ServiceVisitStatus::Unscheduled);
        assert_eq!(job.service_due_status, Some(ServiceDueStatus::Due));
    }

    #[tokio::test]
    async fn counts_rederive_against_today() {
        let overdue = planned_job("2025-05-31");
        let upcoming = planned_job("2025-06-11");
        let jobs = vec![overdue, upcoming];

        let mut job_repo = MockServiceJobRepo::new();
        job_repo
            .expect_find_many()
            .returning(move |_| Ok(jobs.clone()));

        let service = service_with(
            job_repo,
            MockProductRepo::new(),
            MockSaleRepo::new(),
            "2025-06-01",
        );

        let counts = service
            .service_counts(&ServiceJobListFilter::default())
            .await
            .unwrap();

        assert_eq!(counts.total, 2);
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.due, 1);
        assert_eq!(counts.due_in_30_days, 1);
        assert_eq!(counts.planned, 2);
    }

    #[tokio::test]
    async fn sale_generation_creates_one_job_per_occurrence() {
        let product_id = Uuid::new_v4();
        let customer_id = Uuid::new_v4();

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(quarterly_product(*id))));

        let mut job_repo = MockServiceJobRepo::new();
        job_repo
            .expect_create_many()
            .returning(|jobs| Ok(jobs.to_vec()));

        let service = service_with(
            job_repo,
            product_repo,
            MockSaleRepo::new(),
            "2025-06-01",
        );

        let sale = Sale {
            id: Uuid::new_v4(),
            customer_id,
            invoice_number: "INV-101".to_string(),
            sale_date: midnight("2025-01-01"),
            total_amount: 15000,
            payment_mode: Some("CASH".to_string()),
            notes: None,
            items: vec![SaleItem {
                id: Uuid::new_v4(),
                item_type: ItemType::Product,
                product_id: Some(product_id),
                spare_part_id: None,
                quantity: 1,
                unit_price: 15000,
                line_total: 15000,
            }],
            created_at: midnight("2025-01-01"),
            updated_at: midnight("2025-01-01"),
        };

        let jobs = service.generate_jobs_for_sale(&sale).await.unwrap();

        // Quarterly cadence pre-schedules the first year.
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[0].service_due_date, Some(midnight("2025-04-01")));
        assert_eq!(jobs[3].service_due_date, Some(midnight("2026-01-01")));
        for job in &jobs {
            assert_eq!(job.service_visit_status, ServiceVisitStatus::Unscheduled);
            assert_eq!(job.sale_id, Some(sale.id));
            assert_eq!(job.customer_product_id, Some(product_id));
        }
        // Sold in January, checked in June: the first visit is already
        // overdue, later ones still due.
        assert_eq!(jobs[0].service_due_status, Some(ServiceDueStatus::Overdue));
        assert_eq!(jobs[1].service_due_status, Some(ServiceDueStatus::Overdue));
        assert_eq!(jobs[2].service_due_status, Some(ServiceDueStatus::Due));
        assert_eq!(jobs[3].service_due_status, Some(ServiceDueStatus::Due));
    }
}
