use async_trait::async_trait;

use crate::errors::Result;
use crate::planning::debt_paydown::DebtRow;
use crate::planning::enough::EnoughEstimate;
use crate::planning::life_expectancy::LifeExpectancyEstimate;

/// Persistence for the planning calculators: the debt paydown worksheet,
/// life expectancy estimates and "enough" estimates.
#[async_trait]
pub trait PlanningRepositoryTrait: Send + Sync {
    fn debts_for_user(&self, user_id: &str) -> Result<Vec<DebtRow>>;
    async fn replace_debts(&self, user_id: &str, rows: Vec<DebtRow>) -> Result<Vec<DebtRow>>;

    fn latest_life_expectancy(&self, user_id: &str) -> Result<Option<LifeExpectancyEstimate>>;
    async fn insert_life_expectancy(
        &self,
        estimate: LifeExpectancyEstimate,
    ) -> Result<LifeExpectancyEstimate>;

    fn latest_enough_estimate(&self, user_id: &str) -> Result<Option<EnoughEstimate>>;
    async fn replace_enough_estimate(&self, estimate: EnoughEstimate) -> Result<EnoughEstimate>;
}
