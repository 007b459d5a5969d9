//! Application wiring.
//!
//! Builds the connection pool, runs pending migrations and assembles
//! repositories into application services. The presentation layer (an
//! HTTP router, a desktop shell) holds an `AppServices` and calls into
//! it.

use std::sync::Arc;

use crate::log_info;
use crate::modules::{
    customers::{application::service::CustomerService, infrastructure::CustomerRepositoryImpl},
    dashboard::application::service::DashboardService,
    engineers::{application::service::EngineerService, infrastructure::EngineerRepositoryImpl},
    inventory::{application::service::InventoryService, infrastructure::InventoryRepositoryImpl},
    products::{application::service::ProductService, infrastructure::ProductRepositoryImpl},
    sales::{application::service::SaleService, infrastructure::SaleRepositoryImpl},
    services::{application::service::ServiceJobService, infrastructure::ServiceJobRepositoryImpl},
    spare_parts::{
        application::service::SparePartService, infrastructure::SparePartRepositoryImpl,
    },
};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::database::Database;
use crate::shared::utils::clock::Clock;
use crate::shared::utils::logger::init_logger;

pub struct AppServices {
    pub customers: Arc<CustomerService>,
    pub products: Arc<ProductService>,
    pub spare_parts: Arc<SparePartService>,
    pub engineers: Arc<EngineerService>,
    pub sales: Arc<SaleService>,
    pub service_jobs: Arc<ServiceJobService>,
    pub inventory: Arc<InventoryService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Initialize from the environment: load `.env`, set up logging,
    /// connect, migrate, wire.
    pub fn initialize() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        init_logger();

        let config = AppConfig::from_env()?;
        let database = Arc::new(Database::new(&config.database_url)?);
        database.run_pending_migrations()?;

        Ok(Self::wire(database, config.clock()))
    }

    /// Wire services onto an existing database and clock (useful for
    /// tests and alternate entry points).
    pub fn wire(database: Arc<Database>, clock: Arc<dyn Clock>) -> Self {
        let customer_repo = Arc::new(CustomerRepositoryImpl::new(Arc::clone(&database)));
        let product_repo = Arc::new(ProductRepositoryImpl::new(Arc::clone(&database)));
        let spare_part_repo = Arc::new(SparePartRepositoryImpl::new(Arc::clone(&database)));
        let engineer_repo = Arc::new(EngineerRepositoryImpl::new(Arc::clone(&database)));
        let sale_repo = Arc::new(SaleRepositoryImpl::new(Arc::clone(&database)));
        let service_job_repo = Arc::new(ServiceJobRepositoryImpl::new(Arc::clone(&database)));
        let inventory_repo = Arc::new(InventoryRepositoryImpl::new(Arc::clone(&database)));

        let service_jobs = Arc::new(ServiceJobService::new(
            service_job_repo.clone(),
            product_repo.clone(),
            sale_repo.clone(),
            Arc::clone(&clock),
        ));

        let services = Self {
            customers: Arc::new(CustomerService::new(customer_repo.clone())),
            products: Arc::new(ProductService::new(product_repo.clone())),
            spare_parts: Arc::new(SparePartService::new(spare_part_repo.clone())),
            engineers: Arc::new(EngineerService::new(engineer_repo)),
            sales: Arc::new(SaleService::new(
                sale_repo.clone(),
                customer_repo.clone(),
                Arc::clone(&service_jobs),
                Arc::clone(&clock),
            )),
            inventory: Arc::new(InventoryService::new(
                inventory_repo,
                product_repo.clone(),
                spare_part_repo,
                Arc::clone(&clock),
            )),
            dashboard: Arc::new(DashboardService::new(
                customer_repo,
                product_repo,
                sale_repo,
                service_job_repo,
                Arc::clone(&clock),
            )),
            service_jobs,
        };

        log_info!("Application services initialized");
        services
    }
}
