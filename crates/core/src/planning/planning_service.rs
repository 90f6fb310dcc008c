//! Service for the planning calculators.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::budget::BudgetServiceTrait;
use crate::errors::Result;
use crate::planning::debt_paydown::{DebtRow, DebtRowInput};
use crate::planning::enough::{EnoughEstimate, EnoughInput};
use crate::planning::life_expectancy::{self, LifeExpectancyEstimate, LifeExpectancyInput};
use crate::planning::PlanningRepositoryTrait;

#[async_trait]
pub trait PlanningServiceTrait: Send + Sync {
    fn get_debts(&self, user_id: &str) -> Result<Vec<DebtRow>>;
    async fn save_debts(&self, user_id: &str, inputs: Vec<DebtRowInput>) -> Result<Vec<DebtRow>>;

    fn latest_life_expectancy(&self, user_id: &str) -> Result<Option<LifeExpectancyEstimate>>;
    async fn estimate_life_expectancy(
        &self,
        user_id: &str,
        input: LifeExpectancyInput,
    ) -> Result<LifeExpectancyEstimate>;

    fn latest_enough_estimate(&self, user_id: &str) -> Result<Option<EnoughEstimate>>;
    async fn save_enough_estimate(
        &self,
        user_id: &str,
        input: EnoughInput,
    ) -> Result<EnoughEstimate>;
}

pub struct PlanningService {
    repository: Arc<dyn PlanningRepositoryTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
}

impl PlanningService {
    pub fn new(
        repository: Arc<dyn PlanningRepositoryTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
    ) -> Self {
        Self {
            repository,
            budget_service,
        }
    }
}

#[async_trait]
impl PlanningServiceTrait for PlanningService {
    fn get_debts(&self, user_id: &str) -> Result<Vec<DebtRow>> {
        let mut rows = self.repository.debts_for_user(user_id)?;
        for row in &mut rows {
            row.recompute_schedule();
        }
        Ok(rows)
    }

    async fn save_debts(&self, user_id: &str, inputs: Vec<DebtRowInput>) -> Result<Vec<DebtRow>> {
        let rows: Vec<DebtRow> = inputs
            .into_iter()
            .filter(|input| !input.name.trim().is_empty())
            .map(|input| DebtRow::from_input(user_id, input))
            .collect();
        debug!("Saving {} debt rows for user {}", rows.len(), user_id);
        self.repository.replace_debts(user_id, rows).await
    }

    fn latest_life_expectancy(&self, user_id: &str) -> Result<Option<LifeExpectancyEstimate>> {
        self.repository.latest_life_expectancy(user_id)
    }

    async fn estimate_life_expectancy(
        &self,
        user_id: &str,
        input: LifeExpectancyInput,
    ) -> Result<LifeExpectancyEstimate> {
        let estimate = life_expectancy::estimate(user_id, &input)?;
        debug!(
            "Life expectancy for user {}: {} years remaining",
            user_id, estimate.years_remaining
        );
        self.repository.insert_life_expectancy(estimate).await
    }

    fn latest_enough_estimate(&self, user_id: &str) -> Result<Option<EnoughEstimate>> {
        self.repository.latest_enough_estimate(user_id)
    }

    async fn save_enough_estimate(
        &self,
        user_id: &str,
        input: EnoughInput,
    ) -> Result<EnoughEstimate> {
        let annual_spend = if input.use_future_budget {
            self.budget_service.average_annual(user_id)?
        } else {
            input.manual_annual
        };
        let estimate = EnoughEstimate::from_parts(user_id, &input, annual_spend);
        self.repository.replace_enough_estimate(estimate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::RwLock;

    use crate::budget::{BudgetTargets, FutureBudgetPhase, FutureBudgetPhaseInput};

    // ============== Mock Repositories ==============

    #[derive(Default)]
    struct MockPlanningRepository {
        debts: RwLock<HashMap<String, Vec<DebtRow>>>,
        life: RwLock<Vec<LifeExpectancyEstimate>>,
        enough: RwLock<HashMap<String, EnoughEstimate>>,
    }

    #[async_trait]
    impl PlanningRepositoryTrait for MockPlanningRepository {
        fn debts_for_user(&self, user_id: &str) -> Result<Vec<DebtRow>> {
            Ok(self
                .debts
                .read()
                .unwrap()
                .get(user_id)
                .cloned()
                .unwrap_or_default())
        }

        async fn replace_debts(&self, user_id: &str, rows: Vec<DebtRow>) -> Result<Vec<DebtRow>> {
            self.debts
                .write()
                .unwrap()
                .insert(user_id.to_string(), rows.clone());
            Ok(rows)
        }

        fn latest_life_expectancy(&self, user_id: &str) -> Result<Option<LifeExpectancyEstimate>> {
            Ok(self
                .life
                .read()
                .unwrap()
                .iter()
                .rev()
                .find(|e| e.user_id == user_id)
                .cloned())
        }

        async fn insert_life_expectancy(
            &self,
            estimate: LifeExpectancyEstimate,
        ) -> Result<LifeExpectancyEstimate> {
            self.life.write().unwrap().push(estimate.clone());
            Ok(estimate)
        }

        fn latest_enough_estimate(&self, user_id: &str) -> Result<Option<EnoughEstimate>> {
            Ok(self.enough.read().unwrap().get(user_id).cloned())
        }

        async fn replace_enough_estimate(
            &self,
            estimate: EnoughEstimate,
        ) -> Result<EnoughEstimate> {
            self.enough
                .write()
                .unwrap()
                .insert(estimate.user_id.clone(), estimate.clone());
            Ok(estimate)
        }
    }

    struct MockBudgetService {
        average: Decimal,
    }

    #[async_trait]
    impl BudgetServiceTrait for MockBudgetService {
        fn get_phases(&self, _user_id: &str) -> Result<Vec<FutureBudgetPhase>> {
            unimplemented!()
        }

        async fn save_phases(
            &self,
            _user_id: &str,
            _inputs: Vec<FutureBudgetPhaseInput>,
        ) -> Result<Vec<FutureBudgetPhase>> {
            unimplemented!()
        }

        fn targets(&self, _user_id: &str) -> Result<BudgetTargets> {
            unimplemented!()
        }

        fn average_annual(&self, _user_id: &str) -> Result<Decimal> {
            Ok(self.average)
        }
    }

    fn service(average_budget: Decimal) -> PlanningService {
        PlanningService::new(
            Arc::new(MockPlanningRepository::default()),
            Arc::new(MockBudgetService {
                average: average_budget,
            }),
        )
    }

    fn debt_input(name: &str, principal: Decimal, rate: Decimal, payment: Decimal) -> DebtRowInput {
        DebtRowInput {
            name: name.to_string(),
            principal,
            annual_rate_pct: rate,
            monthly_payment: payment,
            include: true,
        }
    }

    // ==================== Debt Worksheet ====================

    #[tokio::test]
    async fn test_save_debts_drops_blank_rows_and_schedules_the_rest() {
        let service = service(Decimal::ZERO);
        let saved = service
            .save_debts(
                "u1",
                vec![
                    debt_input("Mortgage", dec!(300000), dec!(6), dec!(1800)),
                    debt_input("   ", dec!(100), dec!(1), dec!(10)),
                ],
            )
            .await
            .unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Mortgage");
        assert!(saved[0].months_to_payoff.is_some());

        let fetched = service.get_debts("u1").unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].months_to_payoff, saved[0].months_to_payoff);
    }

    // ==================== Life Expectancy ====================

    #[tokio::test]
    async fn test_life_expectancy_keeps_latest_estimate() {
        let service = service(Decimal::ZERO);
        service
            .estimate_life_expectancy(
                "u1",
                LifeExpectancyInput {
                    gender: "male".to_string(),
                    percentile: "50th".to_string(),
                    current_age: 60,
                },
            )
            .await
            .unwrap();
        service
            .estimate_life_expectancy(
                "u1",
                LifeExpectancyInput {
                    gender: "couple".to_string(),
                    percentile: "90th".to_string(),
                    current_age: 60,
                },
            )
            .await
            .unwrap();

        let latest = service.latest_life_expectancy("u1").unwrap().unwrap();
        assert_eq!(latest.expected_lifespan, 101);
        assert_eq!(latest.years_remaining, 41);
        assert!(service.latest_life_expectancy("u2").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_life_expectancy_rejects_unknown_percentile() {
        let service = service(Decimal::ZERO);
        let result = service
            .estimate_life_expectancy(
                "u1",
                LifeExpectancyInput {
                    gender: "male".to_string(),
                    percentile: "95th".to_string(),
                    current_age: 60,
                },
            )
            .await;
        assert!(result.is_err());
        assert!(service.latest_life_expectancy("u1").unwrap().is_none());
    }

    // ==================== Enough Calculator ====================

    fn enough_input(use_future_budget: bool, manual: Decimal) -> EnoughInput {
        EnoughInput {
            use_future_budget,
            manual_annual: manual,
            real_rate_pct: dec!(4),
            years: 30,
            pension: dec!(20000),
            part_time_income: dec!(0),
            part_time_years: dec!(0),
        }
    }

    #[tokio::test]
    async fn test_enough_uses_manual_spend() {
        let service = service(dec!(90000));
        let estimate = service
            .save_enough_estimate("u1", enough_input(false, dec!(60000)))
            .await
            .unwrap();
        assert_eq!(estimate.annual_spend, dec!(60000));
        assert_eq!(estimate.annual_shortfall, dec!(40000.00));
        assert_eq!(estimate.lump_sum_rule, dec!(1000000.00));
    }

    #[tokio::test]
    async fn test_enough_pulls_spend_from_future_budget() {
        let service = service(dec!(90000));
        let estimate = service
            .save_enough_estimate("u1", enough_input(true, dec!(60000)))
            .await
            .unwrap();
        assert_eq!(estimate.annual_spend, dec!(90000));
        assert_eq!(estimate.annual_shortfall, dec!(70000.00));
    }

    #[tokio::test]
    async fn test_enough_keeps_only_latest_run() {
        let service = service(Decimal::ZERO);
        service
            .save_enough_estimate("u1", enough_input(false, dec!(60000)))
            .await
            .unwrap();
        let second = service
            .save_enough_estimate("u1", enough_input(false, dec!(80000)))
            .await
            .unwrap();

        let latest = service.latest_enough_estimate("u1").unwrap().unwrap();
        assert_eq!(latest.id, second.id);
        assert_eq!(latest.annual_spend, dec!(80000));
    }
}
