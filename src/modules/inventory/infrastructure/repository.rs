use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::inventory::domain::{
    entities::InventoryTransaction,
    repository::{InventoryQuery, InventoryRepository},
};
use crate::modules::inventory::infrastructure::models::{
    InventoryTransactionModel, NewInventoryTransaction,
};
use crate::schema::{inventory_transactions, products, spare_parts};
use crate::shared::domain::value_objects::ItemType;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct InventoryRepositoryImpl {
    db: Arc<Database>,
}

impl InventoryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryRepository for InventoryRepositoryImpl {
    async fn find_many(&self, query: &InventoryQuery) -> AppResult<Vec<InventoryTransaction>> {
        let db = Arc::clone(&self.db);
        let query = query.clone();

        let models =
            task::spawn_blocking(move || -> AppResult<Vec<InventoryTransactionModel>> {
                let mut conn = db.get_connection()?;

                let mut q = inventory_transactions::table
                    .select(InventoryTransactionModel::as_select())
                    .into_boxed();

                if let Some(item_type) = query.item_type {
                    q = q.filter(inventory_transactions::item_type.eq(item_type));
                }
                if let Some(product_id) = query.product_id {
                    q = q.filter(inventory_transactions::product_id.eq(product_id));
                }
                if let Some(spare_part_id) = query.spare_part_id {
                    q = q.filter(inventory_transactions::spare_part_id.eq(spare_part_id));
                }

                let ms = q
                    .order(inventory_transactions::created_at.desc())
                    .load::<InventoryTransactionModel>(&mut conn)?;
                Ok(ms)
            })
            .await??;

        Ok(models
            .into_iter()
            .map(InventoryTransactionModel::into_entity)
            .collect())
    }

    async fn record(&self, txn: &InventoryTransaction) -> AppResult<InventoryTransaction> {
        let db = Arc::clone(&self.db);
        let txn = txn.clone();

        let saved = task::spawn_blocking(move || -> AppResult<InventoryTransaction> {
            let mut conn = db.get_connection()?;
            conn.transaction(|conn| {
                let row = NewInventoryTransaction::from_entity(&txn);
                let inserted: InventoryTransactionModel =
                    diesel::insert_into(inventory_transactions::table)
                        .values(&row)
                        .returning(InventoryTransactionModel::as_returning())
                        .get_result(conn)
                        .map_err(|e| {
                            AppError::DatabaseError(format!(
                                "Failed to record inventory transaction: {}",
                                e
                            ))
                        })?;

                // Apply the stock delta to the referenced item inside
                // the same transaction.
                let delta = txn.kind.stock_delta(txn.quantity);
                match (txn.item_type, txn.product_id, txn.spare_part_id) {
                    (ItemType::Product, Some(product_id), _) => {
                        diesel::update(products::table.filter(products::id.eq(product_id)))
                            .set(
                                products::current_stock
                                    .eq(products::current_stock + delta),
                            )
                            .execute(conn)?;
                    }
                    (ItemType::SparePart, _, Some(spare_part_id)) => {
                        diesel::update(
                            spare_parts::table.filter(spare_parts::id.eq(spare_part_id)),
                        )
                        .set(
                            spare_parts::stock_quantity
                                .eq(spare_parts::stock_quantity + delta),
                        )
                        .execute(conn)?;
                    }
                    _ => {}
                }

                Ok(inserted.into_entity())
            })
        })
        .await??;

        Ok(saved)
    }
}
