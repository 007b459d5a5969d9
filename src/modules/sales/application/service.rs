use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::customers::domain::repository::CustomerRepository;
use crate::modules::sales::domain::{
    entities::{Sale, SaleItemInput},
    repository::SaleRepository,
};
use crate::modules::services::application::service::ServiceJobService;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::clock::Clock;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info, log_warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub customer_id: Uuid,
    pub invoice_number: String,
    pub sale_date: DateTime<Utc>,
    pub total_amount: i32,
    pub payment_mode: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<SaleItemInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSaleRequest {
    pub customer_id: Option<Uuid>,
    pub invoice_number: Option<String>,
    pub sale_date: Option<DateTime<Utc>>,
    pub total_amount: Option<i32>,
    pub payment_mode: Option<String>,
    pub notes: Option<String>,
    /// When present, the item collection is replaced as a unit.
    pub items: Option<Vec<SaleItemInput>>,
}

pub struct SaleService {
    sale_repo: Arc<dyn SaleRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    service_jobs: Arc<ServiceJobService>,
    clock: Arc<dyn Clock>,
}

impl SaleService {
    pub fn new(
        sale_repo: Arc<dyn SaleRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        service_jobs: Arc<ServiceJobService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sale_repo,
            customer_repo,
            service_jobs,
            clock,
        }
    }

    pub async fn list_sales(&self, search: Option<&str>) -> AppResult<Vec<Sale>> {
        self.sale_repo.find_many(search).await
    }

    pub async fn get_sale(&self, id: &Uuid) -> AppResult<Option<Sale>> {
        self.sale_repo.find_by_id(id).await
    }

    /// Record a sale. Line items referencing a product with a
    /// maintenance cadence cause follow-up service jobs to be
    /// generated from the sale date.
    pub async fn create_sale(&self, request: CreateSaleRequest) -> AppResult<Sale> {
        if request.invoice_number.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Invoice number cannot be empty".to_string(),
            ));
        }
        Validator::validate_amount("Total amount", request.total_amount)?;
        if request.items.is_empty() {
            return Err(AppError::ValidationError(
                "A sale needs at least one item".to_string(),
            ));
        }
        for item in &request.items {
            Validator::validate_quantity(item.quantity)?;
        }

        if self
            .customer_repo
            .find_by_id(&request.customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Customer with ID {} not found",
                request.customer_id
            )));
        }

        let now = self.clock.now();
        let sale = Sale {
            id: Uuid::new_v4(),
            customer_id: request.customer_id,
            invoice_number: request.invoice_number,
            sale_date: request.sale_date,
            total_amount: request.total_amount,
            payment_mode: request.payment_mode,
            notes: request.notes,
            items: request
                .items
                .into_iter()
                .map(SaleItemInput::into_item)
                .collect(),
            created_at: now,
            updated_at: now,
        };

        let saved = self.sale_repo.create(&sale).await?;
        log_info!(
            "Created sale {} (invoice {}) for customer {}",
            saved.id,
            saved.invoice_number,
            saved.customer_id
        );

        // Follow-up maintenance visits derived from the product
        // cadence. The sale itself is already committed; a failure
        // here must surface rather than silently leave the schedule
        // missing.
        let generated = self.service_jobs.generate_jobs_for_sale(&saved).await?;
        if !generated.is_empty() {
            log_debug!(
                "Sale {} scheduled {} maintenance visit(s)",
                saved.id,
                generated.len()
            );
        }

        Ok(saved)
    }

    pub async fn update_sale(&self, id: &Uuid, request: UpdateSaleRequest) -> AppResult<Sale> {
        let mut sale = self
            .sale_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sale with ID {} not found", id)))?;

        if let Some(customer_id) = request.customer_id {
            sale.customer_id = customer_id;
        }
        if let Some(invoice_number) = request.invoice_number {
            if invoice_number.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Invoice number cannot be empty".to_string(),
                ));
            }
            sale.invoice_number = invoice_number;
        }
        if let Some(sale_date) = request.sale_date {
            sale.sale_date = sale_date;
        }
        if let Some(total_amount) = request.total_amount {
            Validator::validate_amount("Total amount", total_amount)?;
            sale.total_amount = total_amount;
        }
        if request.payment_mode.is_some() {
            sale.payment_mode = request.payment_mode;
        }
        if request.notes.is_some() {
            sale.notes = request.notes;
        }
        if let Some(items) = request.items {
            for item in &items {
                Validator::validate_quantity(item.quantity)?;
            }
            sale.items = items.into_iter().map(SaleItemInput::into_item).collect();
        }
        sale.updated_at = self.clock.now();

        let updated = self.sale_repo.update(&sale).await?;
        log_debug!("Updated sale {}", updated.id);

        Ok(updated)
    }

    pub async fn delete_sale(&self, id: &Uuid) -> AppResult<()> {
        self.sale_repo.delete(id).await?;
        log_warn!("Deleted sale {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::modules::customers::domain::entities::Customer;
    use crate::modules::products::domain::entities::Product;
    use crate::modules::products::domain::repository::{ProductRepository, StockFilter};
    use crate::modules::products::domain::value_objects::ServiceFrequency;
    use crate::modules::services::domain::entities::{ServiceJob, ServiceJobPatch};
    use crate::modules::services::domain::repository::{ServiceJobQuery, ServiceJobRepository};
    use crate::modules::services::domain::value_objects::{ServiceDueStatus, ServiceVisitStatus};
    use crate::shared::domain::value_objects::ItemType;
    use crate::shared::utils::clock::FixedClock;
    use crate::shared::utils::dates::at_midnight;

    mockall::mock! {
        pub SaleRepo {}

        #[async_trait::async_trait]
        impl SaleRepository for SaleRepo {
            async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Sale>>;
            async fn find_many<'a>(&self, search: Option<&'a str>) -> AppResult<Vec<Sale>>;
            async fn find_recent(&self, limit: i64) -> AppResult<Vec<Sale>>;
            async fn create(&self, sale: &Sale) -> AppResult<Sale>;
            async fn update(&self, sale: &Sale) -> AppResult<Sale>;
            async fn delete(&self, id: &Uuid) -> AppResult<()>;
            async fn count(&self) -> AppResult<i64>;
        }
    }

    mockall::mock! {
        pub CustomerRepo {}

        #[async_trait::async_trait]
        impl CustomerRepository for CustomerRepo {
            async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Customer>>;
            async fn find_by_mobile(&self, mobile: &str) -> AppResult<Option<Customer>>;
            async fn find_many<'a>(&self, search: Option<&'a str>) -> AppResult<Vec<Customer>>;
            async fn create(&self, customer: &Customer) -> AppResult<Customer>;
            async fn update(&self, customer: &Customer) -> AppResult<Customer>;
            async fn delete(&self, id: &Uuid) -> AppResult<()>;
            async fn count(&self) -> AppResult<i64>;
        }
    }

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

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn midnight(s: &str) -> DateTime<Utc> {
        at_midnight(day(s))
    }

    fn customer(id: Uuid) -> Customer {
        let now = midnight("2025-01-01");
        Customer {
            id,
            full_name: "Asha Verma".to_string(),
            mobile: "9876543210".to_string(),
            alt_mobile: None,
            email: None,
            company_name: None,
            address: None,
            street: None,
            city: None,
            state: None,
            pincode: None,
            is_vip: false,
            is_active: true,
            notes: None,
            created_at: now,
            updated_at: now,
        }
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

    struct GeneratedCapture {
        jobs: std::sync::Arc<std::sync::Mutex<Vec<ServiceJob>>>,
    }

    fn sale_service(
        sale_repo: MockSaleRepo,
        customer_repo: MockCustomerRepo,
        product_repo: MockProductRepo,
        today: &str,
    ) -> (SaleService, GeneratedCapture) {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::on_day(today.parse().unwrap()));

        let generated = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let capture = std::sync::Arc::clone(&generated);

        let mut job_repo = MockServiceJobRepo::new();
        job_repo.expect_create_many().returning(move |jobs| {
            capture.lock().unwrap().extend(jobs.to_vec());
            Ok(jobs.to_vec())
        });

        let service_jobs = Arc::new(ServiceJobService::new(
            Arc::new(job_repo),
            Arc::new(product_repo),
            Arc::new(MockSaleRepo::new()),
            Arc::clone(&clock),
        ));

        (
            SaleService::new(
                Arc::new(sale_repo),
                Arc::new(customer_repo),
                service_jobs,
                clock,
            ),
            GeneratedCapture { jobs: generated },
        )
    }

    #[tokio::test]
    async fn sale_with_serviced_product_schedules_follow_ups() {
        let customer_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();

        let mut sale_repo = MockSaleRepo::new();
        sale_repo.expect_create().returning(|sale| Ok(sale.clone()));

        let mut customer_repo = MockCustomerRepo::new();
        customer_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(customer(*id))));

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(quarterly_product(*id))));

        let (service, generated) =
            sale_service(sale_repo, customer_repo, product_repo, "2025-01-15");

        let request = CreateSaleRequest {
            customer_id,
            invoice_number: "INV-2025-001".to_string(),
            sale_date: midnight("2025-01-01"),
            total_amount: 15000,
            payment_mode: Some("UPI".to_string()),
            notes: None,
            items: vec![SaleItemInput {
                item_type: ItemType::Product,
                product_id: Some(product_id),
                spare_part_id: None,
                quantity: 1,
                unit_price: 15000,
                line_total: 15000,
            }],
        };

        let sale = service.create_sale(request).await.unwrap();
        assert_eq!(sale.items.len(), 1);

        let jobs = generated.jobs.lock().unwrap();
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[0].service_due_date, Some(midnight("2025-04-01")));
        assert_eq!(jobs[0].service_visit_status, ServiceVisitStatus::Unscheduled);
        assert_eq!(jobs[0].service_due_status, Some(ServiceDueStatus::Due));
        assert!(jobs.iter().all(|j| j.sale_id == Some(sale.id)));
    }

    #[tokio::test]
    async fn sale_of_spare_parts_schedules_nothing() {
        let customer_id = Uuid::new_v4();

        let mut sale_repo = MockSaleRepo::new();
        sale_repo.expect_create().returning(|sale| Ok(sale.clone()));

        let mut customer_repo = MockCustomerRepo::new();
        customer_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(customer(*id))));

        let (service, generated) = sale_service(
            sale_repo,
            customer_repo,
            MockProductRepo::new(),
            "2025-01-15",
        );

        let request = CreateSaleRequest {
            customer_id,
            invoice_number: "INV-2025-002".to_string(),
            sale_date: midnight("2025-01-10"),
            total_amount: 600,
            payment_mode: Some("CASH".to_string()),
            notes: None,
            items: vec![SaleItemInput {
                item_type: ItemType::SparePart,
                product_id: None,
                spare_part_id: Some(Uuid::new_v4()),
                quantity: 2,
                unit_price: 300,
                line_total: 600,
            }],
        };

        service.create_sale(request).await.unwrap();
        assert!(generated.jobs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sale_for_unknown_customer_is_rejected() {
        let mut customer_repo = MockCustomerRepo::new();
        customer_repo.expect_find_by_id().returning(|_| Ok(None));

        let (service, _) = sale_service(
            MockSaleRepo::new(),
            customer_repo,
            MockProductRepo::new(),
            "2025-01-15",
        );

        let request = CreateSaleRequest {
            customer_id: Uuid::new_v4(),
            invoice_number: "INV-2025-003".to_string(),
            sale_date: midnight("2025-01-10"),
            total_amount: 100,
            payment_mode: None,
            notes: None,
            items: vec![SaleItemInput {
                item_type: ItemType::SparePart,
                product_id: None,
                spare_part_id: Some(Uuid::new_v4()),
                quantity: 1,
                unit_price: 100,
                line_total: 100,
            }],
        };

        let err = service.create_sale(request).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    // Keep the patch type honest at the seam the UI drives: a JSON
    // body with an explicit null must clear, a missing key must not.
    #[test]
    fn service_job_patch_distinguishes_null_from_absent() {
        let patch: ServiceJobPatch =
            serde_json::from_str(r#"{"visitScheduledDate": null}"#).unwrap();
        assert!(patch.visit_scheduled_date.is_cleared());
        assert!(patch.service_due_date.is_omitted());
        assert!(patch.service_visit_status.is_none());
    }
}
