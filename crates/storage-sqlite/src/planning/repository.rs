use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use primekit_core::planning::{
    DebtRow, EnoughEstimate, LifeExpectancyEstimate, PlanningRepositoryTrait,
};
use primekit_core::Result;

use super::model::{DebtRowDB, EnoughEstimateDB, LifeExpectancyEstimateDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{debt_paydown_rows, enough_estimates, life_expectancy_estimates};

pub struct PlanningRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PlanningRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PlanningRepository { pool, writer }
    }
}

#[async_trait]
impl PlanningRepositoryTrait for PlanningRepository {
    fn debts_for_user(&self, user_id: &str) -> Result<Vec<DebtRow>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = debt_paydown_rows::table
            .filter(debt_paydown_rows::user_id.eq(user_id))
            .order(debt_paydown_rows::created_at.asc())
            .load::<DebtRowDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(DebtRow::from).collect())
    }

    async fn replace_debts(&self, user_id: &str, rows: Vec<DebtRow>) -> Result<Vec<DebtRow>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<DebtRow>> {
                diesel::delete(
                    debt_paydown_rows::table.filter(debt_paydown_rows::user_id.eq(&user_id)),
                )
                .execute(conn)
                .into_core()?;
                let db_rows: Vec<DebtRowDB> = rows.iter().map(DebtRowDB::from).collect();
                if !db_rows.is_empty() {
                    diesel::insert_into(debt_paydown_rows::table)
                        .values(&db_rows)
                        .execute(conn)
                        .into_core()?;
                }
                Ok(rows)
            })
            .await
    }

    fn latest_life_expectancy(&self, user_id: &str) -> Result<Option<LifeExpectancyEstimate>> {
        let mut conn = get_connection(&self.pool)?;
        let row = life_expectancy_estimates::table
            .filter(life_expectancy_estimates::user_id.eq(user_id))
            .order(life_expectancy_estimates::created_at.desc())
            .first::<LifeExpectancyEstimateDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(LifeExpectancyEstimate::from))
    }

    async fn insert_life_expectancy(
        &self,
        estimate: LifeExpectancyEstimate,
    ) -> Result<LifeExpectancyEstimate> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<LifeExpectancyEstimate> {
                    let db_row = LifeExpectancyEstimateDB::from(&estimate);
                    diesel::insert_into(life_expectancy_estimates::table)
                        .values(&db_row)
                        .execute(conn)
                        .into_core()?;
                    Ok(estimate)
                },
            )
            .await
    }

    fn latest_enough_estimate(&self, user_id: &str) -> Result<Option<EnoughEstimate>> {
        let mut conn = get_connection(&self.pool)?;
        let row = enough_estimates::table
            .filter(enough_estimates::user_id.eq(user_id))
            .order(enough_estimates::created_at.desc())
            .first::<EnoughEstimateDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(EnoughEstimate::from))
    }

    async fn replace_enough_estimate(&self, estimate: EnoughEstimate) -> Result<EnoughEstimate> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<EnoughEstimate> {
                diesel::delete(
                    enough_estimates::table
                        .filter(enough_estimates::user_id.eq(&estimate.user_id)),
                )
                .execute(conn)
                .into_core()?;
                let db_row = EnoughEstimateDB::from(&estimate);
                diesel::insert_into(enough_estimates::table)
                    .values(&db_row)
                    .execute(conn)
                    .into_core()?;
                Ok(estimate)
            })
            .await
    }
}
