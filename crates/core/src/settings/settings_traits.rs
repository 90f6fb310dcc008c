//! Repository trait for per-user settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Key/value settings scoped to a user.
#[async_trait]
pub trait UserSettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value. Returns None if the key was never set.
    fn get_setting(&self, user_id: &str, key: &str) -> Result<Option<String>>;

    /// Insert or update a single setting.
    async fn set_setting(&self, user_id: &str, key: &str, value: &str) -> Result<()>;
}
