//! Repository trait for income layers and spending allocations.

use async_trait::async_trait;

use crate::errors::Result;
use crate::layers::{IncomeLayer, SpendingAllocation};

#[async_trait]
pub trait LayersRepositoryTrait: Send + Sync {
    fn income_layers_for_user(&self, user_id: &str) -> Result<Vec<IncomeLayer>>;
    async fn replace_income_layers(
        &self,
        user_id: &str,
        rows: Vec<IncomeLayer>,
    ) -> Result<Vec<IncomeLayer>>;

    fn spending_allocations_for_user(&self, user_id: &str) -> Result<Vec<SpendingAllocation>>;
    async fn replace_spending_allocations(
        &self,
        user_id: &str,
        rows: Vec<SpendingAllocation>,
    ) -> Result<Vec<SpendingAllocation>>;
}
