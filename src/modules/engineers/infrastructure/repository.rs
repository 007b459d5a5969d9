use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::engineers::domain::{entities::Engineer, repository::EngineerRepository};
use crate::modules::engineers::infrastructure::models::{
    EngineerChangeset, EngineerModel, NewEngineer,
};
use crate::schema::engineers;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct EngineerRepositoryImpl {
    db: Arc<Database>,
}

impl EngineerRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EngineerRepository for EngineerRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Engineer>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<EngineerModel>> {
            let mut conn = db.get_connection()?;
            let m = engineers::table
                .filter(engineers::id.eq(id))
                .select(EngineerModel::as_select())
                .first::<EngineerModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(EngineerModel::into_entity))
    }

    async fn find_many(&self) -> AppResult<Vec<Engineer>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<EngineerModel>> {
            let mut conn = db.get_connection()?;
            let ms = engineers::table
                .order(engineers::name.asc())
                .select(EngineerModel::as_select())
                .load::<EngineerModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(EngineerModel::into_entity).collect())
    }

    async fn create(&self, engineer: &Engineer) -> AppResult<Engineer> {
        let db = Arc::clone(&self.db);
        let new_engineer = NewEngineer::from_entity(engineer);

        let model = task::spawn_blocking(move || -> AppResult<EngineerModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(engineers::table)
                .values(&new_engineer)
                .returning(EngineerModel::as_returning())
                .get_result(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!("Failed to create engineer: {}", e))
                })?;
            Ok(m)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn update(&self, engineer: &Engineer) -> AppResult<Engineer> {
        let db = Arc::clone(&self.db);
        let id = engineer.id;
        let changeset = EngineerChangeset::from_entity(engineer);

        let model = task::spawn_blocking(move || -> AppResult<EngineerModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(engineers::table.filter(engineers::id.eq(id)))
                .set(&changeset)
                .returning(EngineerModel::as_returning())
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
                diesel::delete(engineers::table.filter(engineers::id.eq(id))).execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Engineer with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await??;

        Ok(())
    }
}
