//! Service for the income layers and spending allocation pages.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::layers::{
    IncomeLayer, IncomeLayerInput, LayersRepositoryTrait, SpendingAllocation,
    SpendingAllocationInput,
};

#[async_trait]
pub trait LayersServiceTrait: Send + Sync {
    fn get_income_layers(&self, user_id: &str) -> Result<Vec<IncomeLayer>>;
    async fn save_income_layers(
        &self,
        user_id: &str,
        inputs: Vec<IncomeLayerInput>,
    ) -> Result<Vec<IncomeLayer>>;

    fn get_spending_allocations(&self, user_id: &str) -> Result<Vec<SpendingAllocation>>;
    async fn save_spending_allocations(
        &self,
        user_id: &str,
        inputs: Vec<SpendingAllocationInput>,
    ) -> Result<Vec<SpendingAllocation>>;
}

pub struct LayersService {
    repository: Arc<dyn LayersRepositoryTrait>,
}

impl LayersService {
    pub fn new(repository: Arc<dyn LayersRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LayersServiceTrait for LayersService {
    fn get_income_layers(&self, user_id: &str) -> Result<Vec<IncomeLayer>> {
        self.repository.income_layers_for_user(user_id)
    }

    async fn save_income_layers(
        &self,
        user_id: &str,
        inputs: Vec<IncomeLayerInput>,
    ) -> Result<Vec<IncomeLayer>> {
        let rows: Vec<IncomeLayer> = inputs
            .into_iter()
            .filter(|input| !input.layer.trim().is_empty())
            .map(|input| IncomeLayer::from_input(user_id, input))
            .collect();
        debug!("Saving {} income layers for user {}", rows.len(), user_id);
        self.repository.replace_income_layers(user_id, rows).await
    }

    fn get_spending_allocations(&self, user_id: &str) -> Result<Vec<SpendingAllocation>> {
        let mut rows = self.repository.spending_allocations_for_user(user_id)?;
        for row in rows.iter_mut() {
            row.total = row.bucket_total();
        }
        Ok(rows)
    }

    async fn save_spending_allocations(
        &self,
        user_id: &str,
        inputs: Vec<SpendingAllocationInput>,
    ) -> Result<Vec<SpendingAllocation>> {
        let rows: Vec<SpendingAllocation> = inputs
            .into_iter()
            .filter(|input| !input.phase.trim().is_empty())
            .map(|input| SpendingAllocation::from_input(user_id, input))
            .collect();
        debug!(
            "Saving {} spending allocations for user {}",
            rows.len(),
            user_id
        );
        let mut saved = self
            .repository
            .replace_spending_allocations(user_id, rows)
            .await?;
        for row in saved.iter_mut() {
            row.total = row.bucket_total();
        }
        Ok(saved)
    }
}
