use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::customers::domain::{entities::Customer, repository::CustomerRepository};
use crate::modules::customers::infrastructure::models::{
    CustomerChangeset, CustomerModel, NewCustomer,
};
use crate::schema::customers;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct CustomerRepositoryImpl {
    db: Arc<Database>,
}

impl CustomerRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Customer>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<CustomerModel>> {
            let mut conn = db.get_connection()?;
            let m = customers::table
                .filter(customers::id.eq(id))
                .select(CustomerModel::as_select())
                .first::<CustomerModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(CustomerModel::into_entity))
    }

    async fn find_by_mobile(&self, mobile: &str) -> AppResult<Option<Customer>> {
        let db = Arc::clone(&self.db);
        let needle = mobile.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<CustomerModel>> {
            let mut conn = db.get_connection()?;
            let m = customers::table
                .filter(customers::mobile.eq(needle))
                .select(CustomerModel::as_select())
                .first::<CustomerModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(CustomerModel::into_entity))
    }

    async fn find_many(&self, search: Option<&str>) -> AppResult<Vec<Customer>> {
        let db = Arc::clone(&self.db);
        let search = search.map(|s| s.to_string());

        let models = task::spawn_blocking(move || -> AppResult<Vec<CustomerModel>> {
            let mut conn = db.get_connection()?;

            let mut query = customers::table
                .select(CustomerModel::as_select())
                .into_boxed();

            if let Some(needle) = search {
                let pattern = format!("%{}%", needle);
                query = query.filter(
                    customers::full_name
                        .ilike(pattern.clone())
                        .or(customers::mobile.ilike(pattern.clone()))
                        .or(customers::company_name.ilike(pattern)),
                );
            }

            let ms = query
                .order(customers::full_name.asc())
                .load::<CustomerModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(CustomerModel::into_entity).collect())
    }

    async fn create(&self, customer: &Customer) -> AppResult<Customer> {
        let db = Arc::clone(&self.db);
        let new_customer = NewCustomer::from_entity(customer);

        let model = task::spawn_blocking(move || -> AppResult<CustomerModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(customers::table)
                .values(&new_customer)
                .returning(CustomerModel::as_returning())
                .get_result(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!("Failed to create customer: {}", e))
                })?;
            Ok(m)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn update(&self, customer: &Customer) -> AppResult<Customer> {
        let db = Arc::clone(&self.db);
        let id = customer.id;
        let changeset = CustomerChangeset::from_entity(customer);

        let model = task::spawn_blocking(move || -> AppResult<CustomerModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(customers::table.filter(customers::id.eq(id)))
                .set(&changeset)
                .returning(CustomerModel::as_returning())
                .get_result(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let affected =
                diesel::delete(customers::table.filter(customers::id.eq(id))).execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Customer with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await??;

        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        let total = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = customers::table.count().get_result(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(total)
    }
}
