//! Repository trait for financial records.

use async_trait::async_trait;

use crate::errors::Result;
use crate::records::{
    AssetRow, EpicRow, ExpenseRow, IncomeRow, LiabilityRow, SubscriptionRow,
};

/// Repository trait for the six calculator record tables.
///
/// Reads are synchronous (pooled connections); writes go through the storage
/// crate's single writer. Each `replace_*` call swaps the user's entire set
/// for that category inside one transaction.
#[async_trait]
pub trait RecordsRepositoryTrait: Send + Sync {
    fn assets_for_user(&self, user_id: &str) -> Result<Vec<AssetRow>>;
    fn liabilities_for_user(&self, user_id: &str) -> Result<Vec<LiabilityRow>>;
    fn income_for_user(&self, user_id: &str) -> Result<Vec<IncomeRow>>;
    fn expenses_for_user(&self, user_id: &str) -> Result<Vec<ExpenseRow>>;
    fn subscriptions_for_user(&self, user_id: &str) -> Result<Vec<SubscriptionRow>>;
    fn epics_for_user(&self, user_id: &str) -> Result<Vec<EpicRow>>;

    async fn replace_assets(&self, user_id: &str, rows: Vec<AssetRow>) -> Result<Vec<AssetRow>>;
    async fn replace_liabilities(
        &self,
        user_id: &str,
        rows: Vec<LiabilityRow>,
    ) -> Result<Vec<LiabilityRow>>;
    async fn replace_income(&self, user_id: &str, rows: Vec<IncomeRow>) -> Result<Vec<IncomeRow>>;
    async fn replace_expenses(
        &self,
        user_id: &str,
        rows: Vec<ExpenseRow>,
    ) -> Result<Vec<ExpenseRow>>;
    async fn replace_subscriptions(
        &self,
        user_id: &str,
        rows: Vec<SubscriptionRow>,
    ) -> Result<Vec<SubscriptionRow>>;
    async fn replace_epics(&self, user_id: &str, rows: Vec<EpicRow>) -> Result<Vec<EpicRow>>;
}
