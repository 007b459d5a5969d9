use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::sales::domain::{entities::Sale, repository::SaleRepository};
use crate::modules::sales::infrastructure::models::{
    NewSale, NewSaleItem, SaleChangeset, SaleItemModel, SaleModel,
};
use crate::schema::{customers, sale_items, sales};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct SaleRepositoryImpl {
    db: Arc<Database>,
}

impl SaleRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn attach_items(conn: &mut PgConnection, models: Vec<SaleModel>) -> AppResult<Vec<Sale>> {
        let items = SaleItemModel::belonging_to(&models)
            .order(sale_items::position.asc())
            .load::<SaleItemModel>(conn)?
            .grouped_by(&models);

        Ok(models
            .into_iter()
            .zip(items)
            .map(|(model, items)| model.into_entity(items))
            .collect())
    }
}

#[async_trait]
impl SaleRepository for SaleRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Sale>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let sale = task::spawn_blocking(move || -> AppResult<Option<Sale>> {
            let mut conn = db.get_connection()?;
            let model = sales::table
                .filter(sales::id.eq(id))
                .select(SaleModel::as_select())
                .first::<SaleModel>(&mut conn)
                .optional()?;

            match model {
                Some(m) => Ok(Self::attach_items(&mut conn, vec![m])?.into_iter().next()),
                None => Ok(None),
            }
        })
        .await??;

        Ok(sale)
    }

    async fn find_many(&self, search: Option<&str>) -> AppResult<Vec<Sale>> {
        let db = Arc::clone(&self.db);
        let search = search.map(|s| s.to_string());

        let result = task::spawn_blocking(move || -> AppResult<Vec<Sale>> {
            let mut conn = db.get_connection()?;

            let mut query = sales::table
                .inner_join(customers::table)
                .select(SaleModel::as_select())
                .into_boxed();

            if let Some(needle) = search {
                let pattern = format!("%{}%", needle);
                query = query.filter(
                    sales::invoice_number
                        .ilike(pattern.clone())
                        .or(sales::payment_mode.ilike(pattern.clone()))
                        .or(customers::full_name.ilike(pattern)),
                );
            }

            let models = query
                .order(sales::sale_date.desc())
                .load::<SaleModel>(&mut conn)?;

            Self::attach_items(&mut conn, models)
        })
        .await??;

        Ok(result)
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Sale>> {
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<Vec<Sale>> {
            let mut conn = db.get_connection()?;
            let models = sales::table
                .order(sales::sale_date.desc())
                .limit(limit)
                .select(SaleModel::as_select())
                .load::<SaleModel>(&mut conn)?;

            Self::attach_items(&mut conn, models)
        })
        .await??;

        Ok(result)
    }

    async fn create(&self, sale: &Sale) -> AppResult<Sale> {
        let db = Arc::clone(&self.db);
        let sale = sale.clone();

        let saved = task::spawn_blocking(move || -> AppResult<Sale> {
            let mut conn = db.get_connection()?;
            conn.transaction(|conn| {
                let new_sale = NewSale::from_entity(&sale);
                let model: SaleModel = diesel::insert_into(sales::table)
                    .values(&new_sale)
                    .returning(SaleModel::as_returning())
                    .get_result(conn)
                    .map_err(|e| {
                        AppError::DatabaseError(format!("Failed to create sale: {}", e))
                    })?;

                let item_rows = NewSaleItem::from_items(sale.id, &sale.items);
                if !item_rows.is_empty() {
                    diesel::insert_into(sale_items::table)
                        .values(&item_rows)
                        .execute(conn)?;
                }

                Ok(Self::attach_items(conn, vec![model])?
                    .into_iter()
                    .next()
                    .expect("inserted sale row exists"))
            })
        })
        .await??;

        Ok(saved)
    }

    async fn update(&self, sale: &Sale) -> AppResult<Sale> {
        let db = Arc::clone(&self.db);
        let sale = sale.clone();

        let saved = task::spawn_blocking(move || -> AppResult<Sale> {
            let mut conn = db.get_connection()?;
            conn.transaction(|conn| {
                let changeset = SaleChangeset::from_entity(&sale);
                let model: SaleModel =
                    diesel::update(sales::table.filter(sales::id.eq(sale.id)))
                        .set(&changeset)
                        .returning(SaleModel::as_returning())
                        .get_result(conn)?;

                // Items are owned by the sale and replaced as a unit.
                diesel::delete(sale_items::table.filter(sale_items::sale_id.eq(sale.id)))
                    .execute(conn)?;
                let item_rows = NewSaleItem::from_items(sale.id, &sale.items);
                if !item_rows.is_empty() {
                    diesel::insert_into(sale_items::table)
                        .values(&item_rows)
                        .execute(conn)?;
                }

                Ok(Self::attach_items(conn, vec![model])?
                    .into_iter()
                    .next()
                    .expect("updated sale row exists"))
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
            let affected =
                diesel::delete(sales::table.filter(sales::id.eq(id))).execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!("Sale with ID {} not found", id)));
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
            let n = sales::table.count().get_result(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(total)
    }
}
