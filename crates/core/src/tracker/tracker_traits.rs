use async_trait::async_trait;

use crate::errors::Result;
use crate::tracker::NetWorthSnapshot;

#[async_trait]
pub trait TrackerRepositoryTrait: Send + Sync {
    /// Snapshots ordered by year then month, oldest first.
    fn snapshots_for_user(&self, user_id: &str) -> Result<Vec<NetWorthSnapshot>>;

    /// Insert the snapshot, replacing any existing one for the same
    /// user/year/month.
    async fn upsert_snapshot(&self, snapshot: NetWorthSnapshot) -> Result<NetWorthSnapshot>;

    /// Delete every planner row the user has entered. Snapshots, assessments
    /// and the account itself survive.
    async fn reset_user_data(&self, user_id: &str) -> Result<()>;
}
