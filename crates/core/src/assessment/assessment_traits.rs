//! Repository trait for assessments.

use async_trait::async_trait;

use crate::assessment::Assessment;
use crate::errors::Result;

#[async_trait]
pub trait AssessmentRepositoryTrait: Send + Sync {
    /// The user's most recently created assessment, finalized or not.
    fn latest_for_user(&self, user_id: &str) -> Result<Option<Assessment>>;

    /// The user's most recent finalized assessment.
    fn latest_finalized_for_user(&self, user_id: &str) -> Result<Option<Assessment>>;

    async fn insert(&self, assessment: Assessment) -> Result<Assessment>;

    async fn update(&self, assessment: Assessment) -> Result<Assessment>;
}
