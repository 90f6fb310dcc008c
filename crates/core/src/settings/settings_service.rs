//! Per-user settings service.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::constants::{DEFAULT_EPIC_HORIZON_YEARS, SETTING_EPIC_HORIZON_YEARS};
use crate::errors::Result;
use crate::settings::UserSettingsRepositoryTrait;

#[async_trait]
pub trait UserSettingsServiceTrait: Send + Sync {
    /// Get a single setting value by key. Returns None if not found.
    fn get_setting_value(&self, user_id: &str, key: &str) -> Result<Option<String>>;

    /// Set a single setting value by key.
    async fn set_setting_value(&self, user_id: &str, key: &str, value: &str) -> Result<()>;

    /// Years a one-off epic experience is spread over for this user.
    fn epic_horizon_years(&self, user_id: &str) -> Result<u32>;

    async fn set_epic_horizon_years(&self, user_id: &str, years: u32) -> Result<()>;
}

pub struct UserSettingsService {
    repository: Arc<dyn UserSettingsRepositoryTrait>,
}

impl UserSettingsService {
    pub fn new(repository: Arc<dyn UserSettingsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserSettingsServiceTrait for UserSettingsService {
    fn get_setting_value(&self, user_id: &str, key: &str) -> Result<Option<String>> {
        self.repository.get_setting(user_id, key)
    }

    async fn set_setting_value(&self, user_id: &str, key: &str, value: &str) -> Result<()> {
        self.repository.set_setting(user_id, key, value).await
    }

    fn epic_horizon_years(&self, user_id: &str) -> Result<u32> {
        let stored = self
            .repository
            .get_setting(user_id, SETTING_EPIC_HORIZON_YEARS)?;
        Ok(match stored {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Unparseable epic horizon '{}' for user {}, using default",
                    value, user_id
                );
                DEFAULT_EPIC_HORIZON_YEARS
            }),
            None => DEFAULT_EPIC_HORIZON_YEARS,
        })
    }

    async fn set_epic_horizon_years(&self, user_id: &str, years: u32) -> Result<()> {
        self.repository
            .set_setting(user_id, SETTING_EPIC_HORIZON_YEARS, &years.to_string())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    // ============== Mock Repository ==============

    #[derive(Default)]
    struct MockSettingsRepository {
        values: RwLock<HashMap<(String, String), String>>,
    }

    #[async_trait]
    impl UserSettingsRepositoryTrait for MockSettingsRepository {
        fn get_setting(&self, user_id: &str, key: &str) -> Result<Option<String>> {
            Ok(self
                .values
                .read()
                .unwrap()
                .get(&(user_id.to_string(), key.to_string()))
                .cloned())
        }

        async fn set_setting(&self, user_id: &str, key: &str, value: &str) -> Result<()> {
            self.values
                .write()
                .unwrap()
                .insert((user_id.to_string(), key.to_string()), value.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_epic_horizon_defaults_to_ten() {
        let service = UserSettingsService::new(Arc::new(MockSettingsRepository::default()));
        assert_eq!(service.epic_horizon_years("u1").unwrap(), 10);
    }

    #[tokio::test]
    async fn test_epic_horizon_round_trips() {
        let service = UserSettingsService::new(Arc::new(MockSettingsRepository::default()));
        service.set_epic_horizon_years("u1", 25).await.unwrap();
        assert_eq!(service.epic_horizon_years("u1").unwrap(), 25);
        // other users keep the default
        assert_eq!(service.epic_horizon_years("u2").unwrap(), 10);
    }

    #[tokio::test]
    async fn test_unparseable_horizon_falls_back_to_default() {
        let repo = Arc::new(MockSettingsRepository::default());
        let service = UserSettingsService::new(repo.clone());
        repo.set_setting("u1", SETTING_EPIC_HORIZON_YEARS, "soon")
            .await
            .unwrap();
        assert_eq!(service.epic_horizon_years("u1").unwrap(), 10);
    }
}
