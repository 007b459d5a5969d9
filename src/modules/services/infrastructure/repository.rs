use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::services::domain::{
    entities::ServiceJob,
    repository::{ServiceJobQuery, ServiceJobRepository},
};
use crate::modules::services::infrastructure::models::{
    NewServiceJobItem, NewServiceJobRow, ServiceJobChangeset, ServiceJobItemModel, ServiceJobModel,
};
use crate::schema::{customers, engineers, service_job_items, service_jobs};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct ServiceJobRepositoryImpl {
    db: Arc<Database>,
}

impl ServiceJobRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Load the item collections for a batch of job rows and assemble
    /// entities, preserving the row order.
    fn attach_items(
        conn: &mut PgConnection,
        models: Vec<ServiceJobModel>,
    ) -> AppResult<Vec<ServiceJob>> {
        let items = ServiceJobItemModel::belonging_to(&models)
            .order(service_job_items::position.asc())
            .load::<ServiceJobItemModel>(conn)?
            .grouped_by(&models);

        Ok(models
            .into_iter()
            .zip(items)
            .map(|(model, items)| model.into_entity(items))
            .collect())
    }

    fn insert_job(conn: &mut PgConnection, job: &ServiceJob) -> AppResult<ServiceJobModel> {
        let row = NewServiceJobRow::from_entity(job);
        let inserted: ServiceJobModel = diesel::insert_into(service_jobs::table)
            .values(&row)
            .returning(ServiceJobModel::as_returning())
            .get_result(conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to create service job: {}", e)))?;

        let item_rows = NewServiceJobItem::from_items(job.id, &job.items);
        if !item_rows.is_empty() {
            diesel::insert_into(service_job_items::table)
                .values(&item_rows)
                .execute(conn)?;
        }

        Ok(inserted)
    }
}

#[async_trait]
impl ServiceJobRepository for ServiceJobRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<ServiceJob>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let job = task::spawn_blocking(move || -> AppResult<Option<ServiceJob>> {
            let mut conn = db.get_connection()?;
            let model = service_jobs::table
                .filter(service_jobs::id.eq(id))
                .select(ServiceJobModel::as_select())
                .first::<ServiceJobModel>(&mut conn)
                .optional()?;

            match model {
                Some(m) => Ok(Self::attach_items(&mut conn, vec![m])?.into_iter().next()),
                None => Ok(None),
            }
        })
        .await??;

        Ok(job)
    }

    async fn find_many(&self, query: &ServiceJobQuery) -> AppResult<Vec<ServiceJob>> {
        let db = Arc::clone(&self.db);
        let query = query.clone();

        let jobs = task::spawn_blocking(move || -> AppResult<Vec<ServiceJob>> {
            let mut conn = db.get_connection()?;

            let mut q = service_jobs::table
                .inner_join(customers::table)
                .left_join(engineers::table)
                .select(ServiceJobModel::as_select())
                .into_boxed();

            if let Some(needle) = &query.search {
                let pattern = format!("%{}%", needle);
                q = q.filter(
                    customers::full_name
                        .ilike(pattern.clone())
                        .or(engineers::name.ilike(pattern)),
                );
            }
            if let Some(due_status) = query.due_status {
                q = q.filter(service_jobs::service_due_status.eq(due_status));
            }
            if let Some(visit_status) = query.visit_status {
                q = q.filter(service_jobs::service_visit_status.eq(visit_status));
            }

            let models = q
                .order(service_jobs::visit_scheduled_date.asc())
                .load::<ServiceJobModel>(&mut conn)?;

            Self::attach_items(&mut conn, models)
        })
        .await??;

        Ok(jobs)
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<ServiceJob>> {
        let db = Arc::clone(&self.db);

        let jobs = task::spawn_blocking(move || -> AppResult<Vec<ServiceJob>> {
            let mut conn = db.get_connection()?;
            let models = service_jobs::table
                .order(service_jobs::visit_scheduled_date.desc())
                .limit(limit)
                .select(ServiceJobModel::as_select())
                .load::<ServiceJobModel>(&mut conn)?;

            Self::attach_items(&mut conn, models)
        })
        .await??;

        Ok(jobs)
    }

    async fn create(&self, job: &ServiceJob) -> AppResult<ServiceJob> {
        let db = Arc::clone(&self.db);
        let job = job.clone();

        let saved = task::spawn_blocking(move || -> AppResult<ServiceJob> {
            let mut conn = db.get_connection()?;
            conn.transaction(|conn| {
                let model = Self::insert_job(conn, &job)?;
                Ok(Self::attach_items(conn, vec![model])?
                    .into_iter()
                    .next()
                    .expect("inserted job row exists"))
            })
        })
        .await??;

        Ok(saved)
    }

    async fn create_many(&self, jobs: &[ServiceJob]) -> AppResult<Vec<ServiceJob>> {
        let db = Arc::clone(&self.db);
        let jobs = jobs.to_vec();

        let saved = task::spawn_blocking(move || -> AppResult<Vec<ServiceJob>> {
            let mut conn = db.get_connection()?;
            conn.transaction(|conn| {
                let mut models = Vec::with_capacity(jobs.len());
                for job in &jobs {
                    models.push(Self::insert_job(conn, job)?);
                }
                Self::attach_items(conn, models)
            })
        })
        .await??;

        Ok(saved)
    }

    async fn update(&self, job: &ServiceJob) -> AppResult<ServiceJob> {
        let db = Arc::clone(&self.db);
        let job = job.clone();

        let saved = task::spawn_blocking(move || -> AppResult<ServiceJob> {
            let mut conn = db.get_connection()?;
            conn.transaction(|conn| {
                let changeset = ServiceJobChangeset::from_entity(&job);
                let model: ServiceJobModel =
                    diesel::update(service_jobs::table.filter(service_jobs::id.eq(job.id)))
                        .set(&changeset)
                        .returning(ServiceJobModel::as_returning())
                        .get_result(conn)?;

                // Items are owned by the job and replaced as a unit.
                diesel::delete(
                    service_job_items::table
                        .filter(service_job_items::service_job_id.eq(job.id)),
                )
                .execute(conn)?;
                let item_rows = NewServiceJobItem::from_items(job.id, &job.items);
                if !item_rows.is_empty() {
                    diesel::insert_into(service_job_items::table)
                        .values(&item_rows)
                        .execute(conn)?;
                }

                Ok(Self::attach_items(conn, vec![model])?
                    .into_iter()
                    .next()
                    .expect("updated job row exists"))
            })
        })
        .await??;

        Ok(saved)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let affected = diesel::delete(service_jobs::table.filter(service_jobs::id.eq(id)))
                .execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Service job with ID {} not found",
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
            let n = service_jobs::table.count().get_result(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(total)
    }
}
