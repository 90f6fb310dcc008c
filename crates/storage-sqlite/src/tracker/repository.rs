use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use primekit_core::tracker::{NetWorthSnapshot, TrackerRepositoryTrait};
use primekit_core::Result;

use super::model::NetWorthSnapshotDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{
    assets, debt_paydown_rows, enough_estimates, epic_experiences, expense_items,
    future_budget_phases, income_layers, income_sources, liabilities, life_expectancy_estimates,
    net_worth_snapshots, spending_allocations, subscriptions,
};

pub struct TrackerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TrackerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TrackerRepository { pool, writer }
    }
}

#[async_trait]
impl TrackerRepositoryTrait for TrackerRepository {
    fn snapshots_for_user(&self, user_id: &str) -> Result<Vec<NetWorthSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = net_worth_snapshots::table
            .filter(net_worth_snapshots::user_id.eq(user_id))
            .order((
                net_worth_snapshots::year.asc(),
                net_worth_snapshots::month.asc(),
            ))
            .load::<NetWorthSnapshotDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(NetWorthSnapshot::from).collect())
    }

    async fn upsert_snapshot(&self, snapshot: NetWorthSnapshot) -> Result<NetWorthSnapshot> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<NetWorthSnapshot> {
                    let db_row = NetWorthSnapshotDB::from(&snapshot);
                    diesel::delete(
                        net_worth_snapshots::table
                            .filter(net_worth_snapshots::user_id.eq(&db_row.user_id))
                            .filter(net_worth_snapshots::year.eq(db_row.year))
                            .filter(net_worth_snapshots::month.eq(db_row.month)),
                    )
                    .execute(conn)
                    .map_err(StorageError::from)?;
                    diesel::insert_into(net_worth_snapshots::table)
                        .values(&db_row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    Ok(snapshot)
                },
            )
            .await
    }

    async fn reset_user_data(&self, user_id: &str) -> Result<()> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::delete(assets::table.filter(assets::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(liabilities::table.filter(liabilities::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(
                    income_sources::table.filter(income_sources::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                diesel::delete(expense_items::table.filter(expense_items::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(subscriptions::table.filter(subscriptions::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(
                    epic_experiences::table.filter(epic_experiences::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                diesel::delete(
                    future_budget_phases::table
                        .filter(future_budget_phases::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                diesel::delete(income_layers::table.filter(income_layers::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(
                    spending_allocations::table
                        .filter(spending_allocations::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                diesel::delete(
                    debt_paydown_rows::table.filter(debt_paydown_rows::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                diesel::delete(
                    life_expectancy_estimates::table
                        .filter(life_expectancy_estimates::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                diesel::delete(
                    enough_estimates::table.filter(enough_estimates::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer, WriteHandle};
    use crate::planning::PlanningRepository;
    use crate::records::RecordsRepository;
    use primekit_core::planning::{DebtRow, DebtRowInput, PlanningRepositoryTrait};
    use primekit_core::records::{AssetRow, AssetRowInput, RecordsRepositoryTrait};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    async fn create_test_db() -> (Arc<DbPool>, WriteHandle, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());
        (pool, writer, temp_dir)
    }

    fn create_test_user(pool: &Arc<DbPool>, user_id: &str) {
        let mut conn = get_connection(pool).expect("Failed to get connection");
        diesel::sql_query(format!(
            "INSERT INTO users (id, name, email, password_hash, created_at) \
             VALUES ('{}', 'Test User', '{}@example.com', 'hash', datetime('now'))",
            user_id, user_id
        ))
        .execute(&mut conn)
        .expect("Failed to create test user");
    }

    fn snapshot(user_id: &str, year: i32, month: u32, net_worth: i64) -> NetWorthSnapshot {
        NetWorthSnapshot::new(
            user_id,
            year,
            month,
            rust_decimal::Decimal::from(net_worth),
            rust_decimal::Decimal::ZERO,
            rust_decimal::Decimal::from(net_worth),
            None,
        )
    }

    #[tokio::test]
    async fn test_upsert_replaces_same_month() {
        let (pool, writer, _dir) = create_test_db().await;
        create_test_user(&pool, "u1");
        let repo = TrackerRepository::new(Arc::clone(&pool), writer);

        repo.upsert_snapshot(snapshot("u1", 2026, 3, 100_000))
            .await
            .unwrap();
        repo.upsert_snapshot(snapshot("u1", 2026, 3, 110_000))
            .await
            .unwrap();

        let stored = repo.snapshots_for_user("u1").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].net_worth, dec!(110000));
    }

    #[tokio::test]
    async fn test_snapshots_ordered_by_year_then_month() {
        let (pool, writer, _dir) = create_test_db().await;
        create_test_user(&pool, "u1");
        let repo = TrackerRepository::new(Arc::clone(&pool), writer);

        repo.upsert_snapshot(snapshot("u1", 2026, 2, 300))
            .await
            .unwrap();
        repo.upsert_snapshot(snapshot("u1", 2025, 11, 100))
            .await
            .unwrap();
        repo.upsert_snapshot(snapshot("u1", 2026, 1, 200))
            .await
            .unwrap();

        let stored = repo.snapshots_for_user("u1").unwrap();
        let order: Vec<(i32, u32)> = stored.iter().map(|s| (s.year, s.month)).collect();
        assert_eq!(order, vec![(2025, 11), (2026, 1), (2026, 2)]);
    }

    #[tokio::test]
    async fn test_reset_clears_planner_rows_but_keeps_snapshots() {
        let (pool, writer, _dir) = create_test_db().await;
        create_test_user(&pool, "u1");

        let records = RecordsRepository::new(Arc::clone(&pool), writer.clone());
        records
            .replace_assets(
                "u1",
                vec![AssetRow::from_input(
                    "u1",
                    AssetRowInput {
                        category: "Cash".to_string(),
                        description: "Savings".to_string(),
                        amount: dec!(20000),
                        owner: String::new(),
                        include: true,
                    },
                )],
            )
            .await
            .unwrap();

        let planning = PlanningRepository::new(Arc::clone(&pool), writer.clone());
        planning
            .replace_debts(
                "u1",
                vec![DebtRow::from_input(
                    "u1",
                    DebtRowInput {
                        name: "Card".to_string(),
                        principal: dec!(4000),
                        annual_rate_pct: dec!(19.9),
                        monthly_payment: dec!(300),
                        include: true,
                    },
                )],
            )
            .await
            .unwrap();

        let tracker = TrackerRepository::new(Arc::clone(&pool), writer);
        tracker
            .upsert_snapshot(snapshot("u1", 2026, 5, 50_000))
            .await
            .unwrap();

        tracker.reset_user_data("u1").await.unwrap();

        assert!(records.assets_for_user("u1").unwrap().is_empty());
        assert!(planning.debts_for_user("u1").unwrap().is_empty());
        assert_eq!(tracker.snapshots_for_user("u1").unwrap().len(), 1);
    }
}
