use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use primekit_core::budget::{BudgetRepositoryTrait, FutureBudgetPhase};
use primekit_core::Result;

use super::model::FutureBudgetPhaseDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::future_budget_phases;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn phases_for_user(&self, user_id: &str) -> Result<Vec<FutureBudgetPhase>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = future_budget_phases::table
            .filter(future_budget_phases::user_id.eq(user_id))
            .order(future_budget_phases::created_at.asc())
            .load::<FutureBudgetPhaseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(FutureBudgetPhase::from).collect())
    }

    async fn replace_for_user(
        &self,
        user_id: &str,
        phases: Vec<FutureBudgetPhase>,
    ) -> Result<Vec<FutureBudgetPhase>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<Vec<FutureBudgetPhase>> {
                    diesel::delete(
                        future_budget_phases::table
                            .filter(future_budget_phases::user_id.eq(&user_id)),
                    )
                    .execute(conn)
                    .map_err(StorageError::from)?;
                    let db_rows: Vec<FutureBudgetPhaseDB> =
                        phases.iter().map(FutureBudgetPhaseDB::from).collect();
                    if !db_rows.is_empty() {
                        diesel::insert_into(future_budget_phases::table)
                            .values(&db_rows)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                    }
                    Ok(phases)
                },
            )
            .await
    }
}
