use std::sync::Arc;

use serde::Serialize;

use crate::modules::customers::domain::repository::CustomerRepository;
use crate::modules::products::domain::entities::Product;
use crate::modules::products::domain::repository::ProductRepository;
use crate::modules::sales::domain::entities::Sale;
use crate::modules::sales::domain::repository::SaleRepository;
use crate::modules::services::domain::{
    aggregation::tally_service_jobs,
    entities::ServiceJob,
    repository::{ServiceJobQuery, ServiceJobRepository},
    value_objects::ServiceVisitStatus,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::clock::Clock;
use crate::shared::utils::dates::{date_only, is_same_date, start_of_month};

const RECENT_LIMIT: i64 = 5;
const LOW_STOCK_LIMIT: i64 = 5;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: i64,
    pub total_products: i64,
    pub total_sales: i64,
    pub total_service_jobs: i64,
    pub planned_services: i64,
    pub service_due_30_days: i64,
    pub overdue_services: i64,
    pub completed_services_this_month: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_sales: Vec<Sale>,
    pub recent_services: Vec<ServiceJob>,
    pub low_stock_products: Vec<Product>,
    pub todays_services: Vec<ServiceJob>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAlerts {
    pub services_due_in_30_days: i64,
    pub services_overdue: i64,
    pub services_planned: i64,
}

pub struct DashboardService {
    customer_repo: Arc<dyn CustomerRepository>,
    product_repo: Arc<dyn ProductRepository>,
    sale_repo: Arc<dyn SaleRepository>,
    service_job_repo: Arc<dyn ServiceJobRepository>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        product_repo: Arc<dyn ProductRepository>,
        sale_repo: Arc<dyn SaleRepository>,
        service_job_repo: Arc<dyn ServiceJobRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            customer_repo,
            product_repo,
            sale_repo,
            service_job_repo,
            clock,
        }
    }

    /// Landing-page summary: entity totals, service buckets re-derived
    /// against today, recent activity and low-stock alerts.
    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let today = self.clock.today();
        let now = self.clock.now();
        let month_start = start_of_month(today);

        let total_customers = self.customer_repo.count().await?;
        let total_products = self.product_repo.count().await?;
        let total_sales = self.sale_repo.count().await?;

        let mut jobs = self
            .service_job_repo
            .find_many(&ServiceJobQuery::default())
            .await?;
        for job in &mut jobs {
            job.refresh_due_status(today);
        }
        let counts = tally_service_jobs(&jobs, today);

        let completed_this_month = jobs
            .iter()
            .filter(|job| {
                job.service_visit_status == ServiceVisitStatus::Completed
                    && job
                        .visit_scheduled_date
                        .map(|d| date_only(d) >= month_start)
                        .unwrap_or(false)
            })
            .count() as i64;

        let todays_services: Vec<ServiceJob> = jobs
            .iter()
            .filter(|job| {
                job.visit_scheduled_date
                    .map(|d| is_same_date(d, now))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        let stats = DashboardStats {
            total_customers,
            total_products,
            total_sales,
            total_service_jobs: counts.total,
            planned_services: counts.planned,
            service_due_30_days: counts.due_in_30_days,
            overdue_services: counts.overdue,
            completed_services_this_month: completed_this_month,
        };

        let recent_sales = self.sale_repo.find_recent(RECENT_LIMIT).await?;
        let recent_services = self.service_job_repo.find_recent(RECENT_LIMIT).await?;
        let low_stock_products = self.product_repo.find_low_stock(LOW_STOCK_LIMIT).await?;

        Ok(DashboardSummary {
            stats,
            recent_sales,
            recent_services,
            low_stock_products,
            todays_services,
        })
    }

    /// Alert badges: due-soon, overdue and planned counts as of today.
    pub async fn alerts(&self) -> AppResult<DashboardAlerts> {
        let today = self.clock.today();
        let jobs = self
            .service_job_repo
            .find_many(&ServiceJobQuery::default())
            .await?;
        let counts = tally_service_jobs(&jobs, today);

        Ok(DashboardAlerts {
            services_due_in_30_days: counts.due_in_30_days,
            services_overdue: counts.overdue,
            services_planned: counts.planned,
        })
    }
}
