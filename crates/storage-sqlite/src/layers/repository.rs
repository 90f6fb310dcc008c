use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use primekit_core::layers::{IncomeLayer, LayersRepositoryTrait, SpendingAllocation};
use primekit_core::Result;

use super::model::{IncomeLayerDB, SpendingAllocationDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{income_layers, spending_allocations};

pub struct LayersRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LayersRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LayersRepository { pool, writer }
    }
}

#[async_trait]
impl LayersRepositoryTrait for LayersRepository {
    fn income_layers_for_user(&self, user_id: &str) -> Result<Vec<IncomeLayer>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = income_layers::table
            .filter(income_layers::user_id.eq(user_id))
            .order(income_layers::created_at.asc())
            .load::<IncomeLayerDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(IncomeLayer::from).collect())
    }

    async fn replace_income_layers(
        &self,
        user_id: &str,
        rows: Vec<IncomeLayer>,
    ) -> Result<Vec<IncomeLayer>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<IncomeLayer>> {
                diesel::delete(income_layers::table.filter(income_layers::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let db_rows: Vec<IncomeLayerDB> = rows.iter().map(IncomeLayerDB::from).collect();
                if !db_rows.is_empty() {
                    diesel::insert_into(income_layers::table)
                        .values(&db_rows)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(rows)
            })
            .await
    }

    fn spending_allocations_for_user(&self, user_id: &str) -> Result<Vec<SpendingAllocation>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = spending_allocations::table
            .filter(spending_allocations::user_id.eq(user_id))
            .order(spending_allocations::created_at.asc())
            .load::<SpendingAllocationDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(SpendingAllocation::from).collect())
    }

    async fn replace_spending_allocations(
        &self,
        user_id: &str,
        rows: Vec<SpendingAllocation>,
    ) -> Result<Vec<SpendingAllocation>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<Vec<SpendingAllocation>> {
                    diesel::delete(
                        spending_allocations::table
                            .filter(spending_allocations::user_id.eq(&user_id)),
                    )
                    .execute(conn)
                    .map_err(StorageError::from)?;
                    let db_rows: Vec<SpendingAllocationDB> =
                        rows.iter().map(SpendingAllocationDB::from).collect();
                    if !db_rows.is_empty() {
                        diesel::insert_into(spending_allocations::table)
                            .values(&db_rows)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                    }
                    Ok(rows)
                },
            )
            .await
    }
}
