use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::products::domain::{
    entities::Product,
    repository::{ProductRepository, StockFilter},
};
use crate::modules::products::infrastructure::models::{
    NewProduct, ProductChangeset, ProductModel,
};
use crate::schema::products;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct ProductRepositoryImpl {
    db: Arc<Database>,
}

impl ProductRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Product>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<ProductModel>> {
            let mut conn = db.get_connection()?;
            let m = products::table
                .filter(products::id.eq(id))
                .select(ProductModel::as_select())
                .first::<ProductModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(ProductModel::into_entity))
    }

    async fn find_by_sku(&self, sku: &str) -> AppResult<Option<Product>> {
        let db = Arc::clone(&self.db);
        let needle = sku.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<ProductModel>> {
            let mut conn = db.get_connection()?;
            let m = products::table
                .filter(products::sku.ilike(needle))
                .select(ProductModel::as_select())
                .first::<ProductModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(ProductModel::into_entity))
    }

    async fn find_many(
        &self,
        search: Option<&str>,
        stock: Option<StockFilter>,
    ) -> AppResult<Vec<Product>> {
        let db = Arc::clone(&self.db);
        let search = search.map(|s| s.to_string());

        let models = task::spawn_blocking(move || -> AppResult<Vec<ProductModel>> {
            let mut conn = db.get_connection()?;

            let mut query = products::table
                .select(ProductModel::as_select())
                .into_boxed();

            if let Some(needle) = search {
                let pattern = format!("%{}%", needle);
                query = query.filter(
                    products::name
                        .ilike(pattern.clone())
                        .or(products::sku.ilike(pattern.clone()))
                        .or(products::category.ilike(pattern)),
                );
            }

            match stock {
                Some(StockFilter::InStock) => {
                    query = query.filter(products::current_stock.gt(0));
                }
                Some(StockFilter::LowStock) => {
                    query = query
                        .filter(products::current_stock.le(products::reorder_level));
                }
                Some(StockFilter::OutOfStock) => {
                    query = query.filter(products::current_stock.le(0));
                }
                None => {}
            }

            let ms = query
                .order(products::name.asc())
                .load::<ProductModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(ProductModel::into_entity).collect())
    }

    async fn find_low_stock(&self, limit: i64) -> AppResult<Vec<Product>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<ProductModel>> {
            let mut conn = db.get_connection()?;
            let ms = products::table
                .filter(products::current_stock.le(products::reorder_level))
                .filter(products::is_active.eq(true))
                .order(products::current_stock.asc())
                .limit(limit)
                .select(ProductModel::as_select())
                .load::<ProductModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(ProductModel::into_entity).collect())
    }

    async fn create(&self, product: &Product) -> AppResult<Product> {
        let db = Arc::clone(&self.db);
        let new_product = NewProduct::from_entity(product);

        let model = task::spawn_blocking(move || -> AppResult<ProductModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(products::table)
                .values(&new_product)
                .returning(ProductModel::as_returning())
                .get_result(&mut conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to create product: {}", e)))?;
            Ok(m)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn update(&self, product: &Product) -> AppResult<Product> {
        let db = Arc::clone(&self.db);
        let id = product.id;
        let changeset = ProductChangeset::from_entity(product);

        let model = task::spawn_blocking(move || -> AppResult<ProductModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(products::table.filter(products::id.eq(id)))
                .set(&changeset)
                .returning(ProductModel::as_returning())
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
                diesel::delete(products::table.filter(products::id.eq(id))).execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Product with ID {} not found",
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
            let n = products::table.count().get_result(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(total)
    }
}
