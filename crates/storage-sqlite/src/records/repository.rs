use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use primekit_core::records::{
    AssetRow, EpicRow, ExpenseRow, IncomeRow, LiabilityRow, RecordsRepositoryTrait,
    SubscriptionRow,
};
use primekit_core::Result;

use super::model::{
    AssetDB, EpicExperienceDB, ExpenseItemDB, IncomeSourceDB, LiabilityDB, SubscriptionDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{
    assets, epic_experiences, expense_items, income_sources, liabilities, subscriptions,
};

pub struct RecordsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RecordsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RecordsRepository { pool, writer }
    }
}

#[async_trait]
impl RecordsRepositoryTrait for RecordsRepository {
    fn assets_for_user(&self, user_id: &str) -> Result<Vec<AssetRow>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = assets::table
            .filter(assets::user_id.eq(user_id))
            .order(assets::created_at.asc())
            .load::<AssetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(AssetRow::from).collect())
    }

    fn liabilities_for_user(&self, user_id: &str) -> Result<Vec<LiabilityRow>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = liabilities::table
            .filter(liabilities::user_id.eq(user_id))
            .order(liabilities::created_at.asc())
            .load::<LiabilityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(LiabilityRow::from).collect())
    }

    fn income_for_user(&self, user_id: &str) -> Result<Vec<IncomeRow>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = income_sources::table
            .filter(income_sources::user_id.eq(user_id))
            .order(income_sources::created_at.asc())
            .load::<IncomeSourceDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(IncomeRow::from).collect())
    }

    fn expenses_for_user(&self, user_id: &str) -> Result<Vec<ExpenseRow>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expense_items::table
            .filter(expense_items::user_id.eq(user_id))
            .order(expense_items::created_at.asc())
            .load::<ExpenseItemDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(ExpenseRow::from).collect())
    }

    fn subscriptions_for_user(&self, user_id: &str) -> Result<Vec<SubscriptionRow>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = subscriptions::table
            .filter(subscriptions::user_id.eq(user_id))
            .order(subscriptions::created_at.asc())
            .load::<SubscriptionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(SubscriptionRow::from).collect())
    }

    fn epics_for_user(&self, user_id: &str) -> Result<Vec<EpicRow>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = epic_experiences::table
            .filter(epic_experiences::user_id.eq(user_id))
            .order(epic_experiences::created_at.asc())
            .load::<EpicExperienceDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(EpicRow::from).collect())
    }

    async fn replace_assets(&self, user_id: &str, rows: Vec<AssetRow>) -> Result<Vec<AssetRow>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<AssetRow>> {
                diesel::delete(assets::table.filter(assets::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let db_rows: Vec<AssetDB> = rows.iter().map(AssetDB::from).collect();
                if !db_rows.is_empty() {
                    diesel::insert_into(assets::table)
                        .values(&db_rows)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(rows)
            })
            .await
    }

    async fn replace_liabilities(
        &self,
        user_id: &str,
        rows: Vec<LiabilityRow>,
    ) -> Result<Vec<LiabilityRow>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<LiabilityRow>> {
                diesel::delete(liabilities::table.filter(liabilities::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let db_rows: Vec<LiabilityDB> = rows.iter().map(LiabilityDB::from).collect();
                if !db_rows.is_empty() {
                    diesel::insert_into(liabilities::table)
                        .values(&db_rows)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(rows)
            })
            .await
    }

    async fn replace_income(&self, user_id: &str, rows: Vec<IncomeRow>) -> Result<Vec<IncomeRow>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<IncomeRow>> {
                diesel::delete(
                    income_sources::table.filter(income_sources::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                let db_rows: Vec<IncomeSourceDB> = rows.iter().map(IncomeSourceDB::from).collect();
                if !db_rows.is_empty() {
                    diesel::insert_into(income_sources::table)
                        .values(&db_rows)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(rows)
            })
            .await
    }

    async fn replace_expenses(
        &self,
        user_id: &str,
        rows: Vec<ExpenseRow>,
    ) -> Result<Vec<ExpenseRow>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<ExpenseRow>> {
                diesel::delete(expense_items::table.filter(expense_items::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let db_rows: Vec<ExpenseItemDB> = rows.iter().map(ExpenseItemDB::from).collect();
                if !db_rows.is_empty() {
                    diesel::insert_into(expense_items::table)
                        .values(&db_rows)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(rows)
            })
            .await
    }

    async fn replace_subscriptions(
        &self,
        user_id: &str,
        rows: Vec<SubscriptionRow>,
    ) -> Result<Vec<SubscriptionRow>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<SubscriptionRow>> {
                diesel::delete(subscriptions::table.filter(subscriptions::user_id.eq(&user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let db_rows: Vec<SubscriptionDB> = rows.iter().map(SubscriptionDB::from).collect();
                if !db_rows.is_empty() {
                    diesel::insert_into(subscriptions::table)
                        .values(&db_rows)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(rows)
            })
            .await
    }

    async fn replace_epics(&self, user_id: &str, rows: Vec<EpicRow>) -> Result<Vec<EpicRow>> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<EpicRow>> {
                diesel::delete(
                    epic_experiences::table.filter(epic_experiences::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                let db_rows: Vec<EpicExperienceDB> =
                    rows.iter().map(EpicExperienceDB::from).collect();
                if !db_rows.is_empty() {
                    diesel::insert_into(epic_experiences::table)
                        .values(&db_rows)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(rows)
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
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use primekit_core::records::{AssetRow, AssetRowInput, LiabilityRow, LiabilityRowInput};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    /// Creates a test repository backed by a temp-file database.
    /// Returns the repository, pool and temp dir (to keep it alive).
    async fn create_test_repository() -> (RecordsRepository, Arc<DbPool>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");

        let writer = spawn_writer((*pool).clone());
        let repo = RecordsRepository::new(Arc::clone(&pool), writer);
        (repo, pool, temp_dir)
    }

    /// Creates a user row so foreign key constraints are satisfied.
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

    fn asset(user_id: &str, description: &str, amount: rust_decimal::Decimal) -> AssetRow {
        AssetRow::from_input(
            user_id,
            AssetRowInput {
                category: "Investments".to_string(),
                description: description.to_string(),
                amount,
                owner: "Joint".to_string(),
                include: true,
            },
        )
    }

    #[tokio::test]
    async fn test_replace_assets_swaps_entire_set() {
        let (repo, pool, _dir) = create_test_repository().await;
        create_test_user(&pool, "u1");

        let first = vec![
            asset("u1", "Shares", dec!(10000)),
            asset("u1", "Super", dec!(250000)),
        ];
        repo.replace_assets("u1", first).await.unwrap();
        assert_eq!(repo.assets_for_user("u1").unwrap().len(), 2);

        let second = vec![asset("u1", "Home", dec!(900000))];
        repo.replace_assets("u1", second).await.unwrap();

        let stored = repo.assets_for_user("u1").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].description, "Home");
        assert_eq!(stored[0].amount, dec!(900000));
    }

    #[tokio::test]
    async fn test_replace_is_scoped_to_one_user() {
        let (repo, pool, _dir) = create_test_repository().await;
        create_test_user(&pool, "u1");
        create_test_user(&pool, "u2");

        repo.replace_assets("u1", vec![asset("u1", "Shares", dec!(5000))])
            .await
            .unwrap();
        repo.replace_assets("u2", vec![asset("u2", "Boat", dec!(30000))])
            .await
            .unwrap();

        repo.replace_assets("u1", vec![]).await.unwrap();

        assert!(repo.assets_for_user("u1").unwrap().is_empty());
        let other = repo.assets_for_user("u2").unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].description, "Boat");
    }

    #[tokio::test]
    async fn test_rows_come_back_in_insertion_order() {
        let (repo, pool, _dir) = create_test_repository().await;
        create_test_user(&pool, "u1");

        let mut early = LiabilityRow::from_input(
            "u1",
            LiabilityRowInput {
                name: "Mortgage".to_string(),
                amount: dec!(400000),
                kind: "Loan".to_string(),
                monthly_payment: dec!(2500),
                notes: String::new(),
                include: true,
            },
        );
        let mut late = early.clone();
        late.id = "later".to_string();
        late.name = "Car loan".to_string();
        early.created_at = chrono::Utc::now() - chrono::Duration::days(2);
        late.created_at = chrono::Utc::now();

        repo.replace_liabilities("u1", vec![late, early]).await.unwrap();

        let stored = repo.liabilities_for_user("u1").unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].name, "Mortgage");
        assert_eq!(stored[1].name, "Car loan");
    }

    #[tokio::test]
    async fn test_decimal_amounts_round_trip_exactly() {
        let (repo, pool, _dir) = create_test_repository().await;
        create_test_user(&pool, "u1");

        repo.replace_assets("u1", vec![asset("u1", "Crypto", dec!(1234.56789))])
            .await
            .unwrap();

        let stored = repo.assets_for_user("u1").unwrap();
        assert_eq!(stored[0].amount, dec!(1234.56789));
    }
}
