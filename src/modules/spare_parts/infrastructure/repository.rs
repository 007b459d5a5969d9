use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::spare_parts::domain::{
    entities::SparePart,
    repository::{SparePartFilter, SparePartRepository},
};
use crate::modules::spare_parts::infrastructure::models::{
    NewSparePart, SparePartChangeset, SparePartModel,
};
use crate::schema::spare_parts;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

// Parts at or under this quantity count as low stock in listings.
const LOW_STOCK_THRESHOLD: i32 = 10;

pub struct SparePartRepositoryImpl {
    db: Arc<Database>,
}

impl SparePartRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SparePartRepository for SparePartRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SparePart>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<SparePartModel>> {
            let mut conn = db.get_connection()?;
            let m = spare_parts::table
                .filter(spare_parts::id.eq(id))
                .select(SparePartModel::as_select())
                .first::<SparePartModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(SparePartModel::into_entity))
    }

    async fn find_by_sku(&self, sku: &str) -> AppResult<Option<SparePart>> {
        let db = Arc::clone(&self.db);
        let needle = sku.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<SparePartModel>> {
            let mut conn = db.get_connection()?;
            let m = spare_parts::table
                .filter(spare_parts::sku.ilike(needle))
                .select(SparePartModel::as_select())
                .first::<SparePartModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(SparePartModel::into_entity))
    }

    async fn find_many(
        &self,
        search: Option<&str>,
        filter: Option<SparePartFilter>,
        product_id: Option<Uuid>,
    ) -> AppResult<Vec<SparePart>> {
        let db = Arc::clone(&self.db);
        let search = search.map(|s| s.to_string());

        let models = task::spawn_blocking(move || -> AppResult<Vec<SparePartModel>> {
            let mut conn = db.get_connection()?;

            let mut query = spare_parts::table
                .select(SparePartModel::as_select())
                .into_boxed();

            if let Some(needle) = search {
                let pattern = format!("%{}%", needle);
                query = query.filter(
                    spare_parts::name
                        .ilike(pattern.clone())
                        .or(spare_parts::sku.ilike(pattern.clone()))
                        .or(spare_parts::description.ilike(pattern)),
                );
            }

            match filter {
                Some(SparePartFilter::Active) => {
                    query = query.filter(spare_parts::is_active.eq(true));
                }
                Some(SparePartFilter::Inactive) => {
                    query = query.filter(spare_parts::is_active.eq(false));
                }
                Some(SparePartFilter::LowStock) => {
                    query = query.filter(spare_parts::stock_quantity.le(LOW_STOCK_THRESHOLD));
                }
                None => {}
            }

            if let Some(pid) = product_id {
                query = query.filter(spare_parts::product_id.eq(pid));
            }

            let ms = query
                .order(spare_parts::created_at.desc())
                .load::<SparePartModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models
            .into_iter()
            .map(SparePartModel::into_entity)
            .collect())
    }

    async fn create(&self, part: &SparePart) -> AppResult<SparePart> {
        let db = Arc::clone(&self.db);
        let new_part = NewSparePart::from_entity(part);

        let model = task::spawn_blocking(move || -> AppResult<SparePartModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(spare_parts::table)
                .values(&new_part)
                .returning(SparePartModel::as_returning())
                .get_result(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!("Failed to create spare part: {}", e))
                })?;
            Ok(m)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn update(&self, part: &SparePart) -> AppResult<SparePart> {
        let db = Arc::clone(&self.db);
        let id = part.id;
        let changeset = SparePartChangeset::from_entity(part);

        let model = task::spawn_blocking(move || -> AppResult<SparePartModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(spare_parts::table.filter(spare_parts::id.eq(id)))
                .set(&changeset)
                .returning(SparePartModel::as_returning())
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
            let affected = diesel::delete(spare_parts::table.filter(spare_parts::id.eq(id)))
                .execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Spare part with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await??;

        Ok(())
    }
}
