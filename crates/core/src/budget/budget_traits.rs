//! Repository trait for the future budget.

use async_trait::async_trait;

use crate::budget::FutureBudgetPhase;
use crate::errors::Result;

#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn phases_for_user(&self, user_id: &str) -> Result<Vec<FutureBudgetPhase>>;

    /// Swap the user's entire phase list inside one transaction.
    async fn replace_for_user(
        &self,
        user_id: &str,
        phases: Vec<FutureBudgetPhase>,
    ) -> Result<Vec<FutureBudgetPhase>>;
}
