//! Service for the future budget page.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::budget::{
    average_annual_budget, budget_targets, BudgetRepositoryTrait, BudgetTargets,
    FutureBudgetPhase, FutureBudgetPhaseInput,
};
use crate::errors::Result;

#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_phases(&self, user_id: &str) -> Result<Vec<FutureBudgetPhase>>;
    async fn save_phases(
        &self,
        user_id: &str,
        inputs: Vec<FutureBudgetPhaseInput>,
    ) -> Result<Vec<FutureBudgetPhase>>;
    fn targets(&self, user_id: &str) -> Result<BudgetTargets>;
    fn average_annual(&self, user_id: &str) -> Result<Decimal>;
}

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_phases(&self, user_id: &str) -> Result<Vec<FutureBudgetPhase>> {
        self.repository.phases_for_user(user_id)
    }

    async fn save_phases(
        &self,
        user_id: &str,
        inputs: Vec<FutureBudgetPhaseInput>,
    ) -> Result<Vec<FutureBudgetPhase>> {
        let phases: Vec<FutureBudgetPhase> = inputs
            .into_iter()
            .filter(|input| !input.phase.trim().is_empty())
            .map(|input| FutureBudgetPhase::from_input(user_id, input))
            .collect();
        debug!("Saving {} budget phases for user {}", phases.len(), user_id);
        self.repository.replace_for_user(user_id, phases).await
    }

    fn targets(&self, user_id: &str) -> Result<BudgetTargets> {
        let phases = self.repository.phases_for_user(user_id)?;
        Ok(budget_targets(&phases))
    }

    fn average_annual(&self, user_id: &str) -> Result<Decimal> {
        let phases = self.repository.phases_for_user(user_id)?;
        Ok(average_annual_budget(&phases))
    }
}
