use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use primekit_core::settings::UserSettingsRepositoryTrait;
use primekit_core::Result;

use super::model::UserSettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_settings;

pub struct UserSettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserSettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserSettingsRepository { pool, writer }
    }
}

#[async_trait]
impl UserSettingsRepositoryTrait for UserSettingsRepository {
    fn get_setting(&self, user_id: &str, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = user_settings::table
            .filter(user_settings::user_id.eq(user_id))
            .filter(user_settings::setting_key.eq(key))
            .select(user_settings::setting_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    async fn set_setting(&self, user_id: &str, key: &str, value: &str) -> Result<()> {
        let row = UserSettingDB {
            user_id: user_id.to_string(),
            setting_key: key.to_string(),
            setting_value: value.to_string(),
        };
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::replace_into(user_settings::table)
                    .values(&row)
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
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use tempfile::tempdir;

    async fn create_test_repository() -> (UserSettingsRepository, Arc<DbPool>, tempfile::TempDir)
    {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());
        let repo = UserSettingsRepository::new(Arc::clone(&pool), writer);
        (repo, pool, temp_dir)
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

    #[tokio::test]
    async fn test_get_missing_setting_is_none() {
        let (repo, pool, _dir) = create_test_repository().await;
        create_test_user(&pool, "u1");

        assert!(repo.get_setting("u1", "epic_horizon_years").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_overwrite() {
        let (repo, pool, _dir) = create_test_repository().await;
        create_test_user(&pool, "u1");
        create_test_user(&pool, "u2");

        repo.set_setting("u1", "epic_horizon_years", "10").await.unwrap();
        repo.set_setting("u1", "epic_horizon_years", "5").await.unwrap();
        repo.set_setting("u2", "epic_horizon_years", "20").await.unwrap();

        assert_eq!(
            repo.get_setting("u1", "epic_horizon_years").unwrap(),
            Some("5".to_string())
        );
        assert_eq!(
            repo.get_setting("u2", "epic_horizon_years").unwrap(),
            Some("20".to_string())
        );
    }
}
