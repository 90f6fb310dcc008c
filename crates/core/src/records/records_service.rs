//! Service for reading and saving calculator record pages.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::records::{
    AssetRow, AssetRowInput, EpicRow, EpicRowInput, ExpenseRow, ExpenseRowInput, IncomeRow,
    IncomeRowInput, LiabilityRow, LiabilityRowInput, RecordsRepositoryTrait, SubscriptionRow,
    SubscriptionRowInput,
};

#[async_trait]
pub trait RecordsServiceTrait: Send + Sync {
    fn get_assets(&self, user_id: &str) -> Result<Vec<AssetRow>>;
    fn get_liabilities(&self, user_id: &str) -> Result<Vec<LiabilityRow>>;
    fn get_income(&self, user_id: &str) -> Result<Vec<IncomeRow>>;
    fn get_expenses(&self, user_id: &str) -> Result<Vec<ExpenseRow>>;
    fn get_subscriptions(&self, user_id: &str) -> Result<Vec<SubscriptionRow>>;
    fn get_epics(&self, user_id: &str) -> Result<Vec<EpicRow>>;

    async fn save_assets(&self, user_id: &str, inputs: Vec<AssetRowInput>)
        -> Result<Vec<AssetRow>>;
    async fn save_liabilities(
        &self,
        user_id: &str,
        inputs: Vec<LiabilityRowInput>,
    ) -> Result<Vec<LiabilityRow>>;
    async fn save_income(&self, user_id: &str, inputs: Vec<IncomeRowInput>)
        -> Result<Vec<IncomeRow>>;
    async fn save_expenses(
        &self,
        user_id: &str,
        inputs: Vec<ExpenseRowInput>,
    ) -> Result<Vec<ExpenseRow>>;
    async fn save_subscriptions(
        &self,
        user_id: &str,
        inputs: Vec<SubscriptionRowInput>,
    ) -> Result<Vec<SubscriptionRow>>;
    async fn save_epics(&self, user_id: &str, inputs: Vec<EpicRowInput>) -> Result<Vec<EpicRow>>;
}

/// Saves and lists the per-page record tables.
///
/// Form pages post their full row set on every save; rows whose label column
/// is blank are editor padding and are dropped before the replace.
pub struct RecordsService {
    repository: Arc<dyn RecordsRepositoryTrait>,
}

impl RecordsService {
    pub fn new(repository: Arc<dyn RecordsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RecordsServiceTrait for RecordsService {
    fn get_assets(&self, user_id: &str) -> Result<Vec<AssetRow>> {
        self.repository.assets_for_user(user_id)
    }

    fn get_liabilities(&self, user_id: &str) -> Result<Vec<LiabilityRow>> {
        self.repository.liabilities_for_user(user_id)
    }

    fn get_income(&self, user_id: &str) -> Result<Vec<IncomeRow>> {
        self.repository.income_for_user(user_id)
    }

    fn get_expenses(&self, user_id: &str) -> Result<Vec<ExpenseRow>> {
        self.repository.expenses_for_user(user_id)
    }

    fn get_subscriptions(&self, user_id: &str) -> Result<Vec<SubscriptionRow>> {
        let mut rows = self.repository.subscriptions_for_user(user_id)?;
        for row in rows.iter_mut() {
            row.annual_amount = row.annualized();
        }
        Ok(rows)
    }

    fn get_epics(&self, user_id: &str) -> Result<Vec<EpicRow>> {
        self.repository.epics_for_user(user_id)
    }

    async fn save_assets(
        &self,
        user_id: &str,
        inputs: Vec<AssetRowInput>,
    ) -> Result<Vec<AssetRow>> {
        let rows: Vec<AssetRow> = inputs
            .into_iter()
            .filter(|input| !input.description.trim().is_empty())
            .map(|input| AssetRow::from_input(user_id, input))
            .collect();
        debug!("Saving {} asset rows for user {}", rows.len(), user_id);
        self.repository.replace_assets(user_id, rows).await
    }

    async fn save_liabilities(
        &self,
        user_id: &str,
        inputs: Vec<LiabilityRowInput>,
    ) -> Result<Vec<LiabilityRow>> {
        let rows: Vec<LiabilityRow> = inputs
            .into_iter()
            .filter(|input| !input.name.trim().is_empty())
            .map(|input| LiabilityRow::from_input(user_id, input))
            .collect();
        debug!("Saving {} liability rows for user {}", rows.len(), user_id);
        self.repository.replace_liabilities(user_id, rows).await
    }

    async fn save_income(
        &self,
        user_id: &str,
        inputs: Vec<IncomeRowInput>,
    ) -> Result<Vec<IncomeRow>> {
        let rows: Vec<IncomeRow> = inputs
            .into_iter()
            .filter(|input| !input.source.trim().is_empty())
            .map(|input| IncomeRow::from_input(user_id, input))
            .collect();
        debug!("Saving {} income rows for user {}", rows.len(), user_id);
        self.repository.replace_income(user_id, rows).await
    }

    async fn save_expenses(
        &self,
        user_id: &str,
        inputs: Vec<ExpenseRowInput>,
    ) -> Result<Vec<ExpenseRow>> {
        let rows: Vec<ExpenseRow> = inputs
            .into_iter()
            .filter(|input| !input.item.trim().is_empty())
            .map(|input| ExpenseRow::from_input(user_id, input))
            .collect();
        debug!("Saving {} expense rows for user {}", rows.len(), user_id);
        self.repository.replace_expenses(user_id, rows).await
    }

    async fn save_subscriptions(
        &self,
        user_id: &str,
        inputs: Vec<SubscriptionRowInput>,
    ) -> Result<Vec<SubscriptionRow>> {
        let rows: Vec<SubscriptionRow> = inputs
            .into_iter()
            .filter(|input| !input.name.trim().is_empty())
            .map(|input| SubscriptionRow::from_input(user_id, input))
            .collect();
        debug!(
            "Saving {} subscription rows for user {}",
            rows.len(),
            user_id
        );
        let mut saved = self.repository.replace_subscriptions(user_id, rows).await?;
        for row in saved.iter_mut() {
            row.annual_amount = row.annualized();
        }
        Ok(saved)
    }

    async fn save_epics(&self, user_id: &str, inputs: Vec<EpicRowInput>) -> Result<Vec<EpicRow>> {
        let rows: Vec<EpicRow> = inputs
            .into_iter()
            .filter(|input| !input.item.trim().is_empty())
            .map(|input| EpicRow::from_input(user_id, input))
            .collect();
        debug!("Saving {} epic rows for user {}", rows.len(), user_id);
        self.repository.replace_epics(user_id, rows).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use rust_decimal_macros::dec;
    use std::sync::RwLock;

    // ============== Mock Repository ==============

    #[derive(Default)]
    struct MockRecordsRepository {
        assets: RwLock<Vec<AssetRow>>,
        subscriptions: RwLock<Vec<SubscriptionRow>>,
    }

    #[async_trait]
    impl RecordsRepositoryTrait for MockRecordsRepository {
        fn assets_for_user(&self, user_id: &str) -> Result<Vec<AssetRow>> {
            Ok(self
                .assets
                .read()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect())
        }
        fn liabilities_for_user(&self, _: &str) -> Result<Vec<LiabilityRow>> {
            Ok(Vec::new())
        }
        fn income_for_user(&self, _: &str) -> Result<Vec<IncomeRow>> {
            Ok(Vec::new())
        }
        fn expenses_for_user(&self, _: &str) -> Result<Vec<ExpenseRow>> {
            Ok(Vec::new())
        }
        fn subscriptions_for_user(&self, user_id: &str) -> Result<Vec<SubscriptionRow>> {
            Ok(self
                .subscriptions
                .read()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect())
        }
        fn epics_for_user(&self, _: &str) -> Result<Vec<EpicRow>> {
            Ok(Vec::new())
        }

        async fn replace_assets(
            &self,
            user_id: &str,
            rows: Vec<AssetRow>,
        ) -> Result<Vec<AssetRow>> {
            let mut store = self.assets.write().unwrap();
            store.retain(|r| r.user_id != user_id);
            store.extend(rows.clone());
            Ok(rows)
        }
        async fn replace_liabilities(
            &self,
            _: &str,
            rows: Vec<LiabilityRow>,
        ) -> Result<Vec<LiabilityRow>> {
            Ok(rows)
        }
        async fn replace_income(&self, _: &str, rows: Vec<IncomeRow>) -> Result<Vec<IncomeRow>> {
            Ok(rows)
        }
        async fn replace_expenses(
            &self,
            _: &str,
            rows: Vec<ExpenseRow>,
        ) -> Result<Vec<ExpenseRow>> {
            Ok(rows)
        }
        async fn replace_subscriptions(
            &self,
            user_id: &str,
            rows: Vec<SubscriptionRow>,
        ) -> Result<Vec<SubscriptionRow>> {
            let mut store = self.subscriptions.write().unwrap();
            store.retain(|r| r.user_id != user_id);
            store.extend(rows.clone());
            Ok(rows)
        }
        async fn replace_epics(&self, _: &str, rows: Vec<EpicRow>) -> Result<Vec<EpicRow>> {
            Ok(rows)
        }
    }

    fn service() -> RecordsService {
        RecordsService::new(Arc::new(MockRecordsRepository::default()))
    }

    // ==================== Save Tests ====================

    #[tokio::test]
    async fn test_save_assets_drops_blank_label_rows() {
        let service = service();
        let saved = service
            .save_assets(
                "u1",
                vec![
                    AssetRowInput {
                        category: "Property".to_string(),
                        description: "Home".to_string(),
                        amount: dec!(500000),
                        owner: String::new(),
                        include: true,
                    },
                    AssetRowInput {
                        category: String::new(),
                        description: "   ".to_string(),
                        amount: dec!(999),
                        owner: String::new(),
                        include: true,
                    },
                ],
            )
            .await
            .unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].description, "Home");
    }

    #[tokio::test]
    async fn test_save_replaces_previous_rows() {
        let service = service();
        let first = vec![AssetRowInput {
            category: "Cash".to_string(),
            description: "Savings".to_string(),
            amount: dec!(1000),
            owner: String::new(),
            include: true,
        }];
        service.save_assets("u1", first).await.unwrap();
        let second = vec![AssetRowInput {
            category: "Cash".to_string(),
            description: "Offset".to_string(),
            amount: dec!(2000),
            owner: String::new(),
            include: true,
        }];
        service.save_assets("u1", second).await.unwrap();

        let rows = service.get_assets("u1").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Offset");
    }

    #[tokio::test]
    async fn test_saves_are_scoped_per_user() {
        let service = service();
        let row = |desc: &str| {
            vec![AssetRowInput {
                category: String::new(),
                description: desc.to_string(),
                amount: dec!(1),
                owner: String::new(),
                include: true,
            }]
        };
        service.save_assets("u1", row("Mine")).await.unwrap();
        service.save_assets("u2", row("Theirs")).await.unwrap();

        let mine = service.get_assets("u1").unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].description, "Mine");
    }

    #[tokio::test]
    async fn test_subscriptions_report_derived_annual_amount() {
        let service = service();
        let saved = service
            .save_subscriptions(
                "u1",
                vec![SubscriptionRowInput {
                    name: "Gym".to_string(),
                    provider: String::new(),
                    amount: dec!(25),
                    frequency: "Weekly".to_string(),
                    notes: String::new(),
                    include: true,
                }],
            )
            .await
            .unwrap();
        assert_eq!(saved[0].annual_amount, dec!(1300));

        let listed = service.get_subscriptions("u1").unwrap();
        assert_eq!(listed[0].annual_amount, dec!(1300));
    }
}
