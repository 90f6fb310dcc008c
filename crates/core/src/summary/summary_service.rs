//! Assembles the calculator summary from the per-page repositories.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::budget::{budget_targets, BudgetRepositoryTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::records::{FinancialRecord, RecordsRepositoryTrait};
use crate::settings::UserSettingsServiceTrait;
use crate::summary::engine::{aggregate, amortize_epics, net_position};
use crate::summary::{sorted_breakdown, BreakdownSlice, CalculatorSummary};

pub trait SummaryServiceTrait: Send + Sync {
    /// Aggregate every saved record into the summary payload. The same call
    /// backs the summary page, the dashboard, and the tracker.
    fn calculator_summary(&self, user_id: &str) -> Result<CalculatorSummary>;
}

pub struct SummaryService {
    records_repository: Arc<dyn RecordsRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    settings_service: Arc<dyn UserSettingsServiceTrait>,
}

impl SummaryService {
    pub fn new(
        records_repository: Arc<dyn RecordsRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        settings_service: Arc<dyn UserSettingsServiceTrait>,
    ) -> Self {
        Self {
            records_repository,
            budget_repository,
            settings_service,
        }
    }
}

fn rounded(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DECIMAL_PRECISION)
}

fn rounded_slices(slices: Vec<BreakdownSlice>) -> Vec<BreakdownSlice> {
    slices
        .into_iter()
        .map(|slice| BreakdownSlice {
            label: slice.label,
            value: rounded(slice.value),
        })
        .collect()
}

impl SummaryServiceTrait for SummaryService {
    fn calculator_summary(&self, user_id: &str) -> Result<CalculatorSummary> {
        let assets: Vec<FinancialRecord> = self
            .records_repository
            .assets_for_user(user_id)?
            .iter()
            .map(|r| r.to_record())
            .collect();
        let liabilities: Vec<FinancialRecord> = self
            .records_repository
            .liabilities_for_user(user_id)?
            .iter()
            .map(|r| r.to_record())
            .collect();
        let income: Vec<FinancialRecord> = self
            .records_repository
            .income_for_user(user_id)?
            .iter()
            .map(|r| r.to_record())
            .collect();
        let expenses: Vec<FinancialRecord> = self
            .records_repository
            .expenses_for_user(user_id)?
            .iter()
            .map(|r| r.to_record())
            .collect();
        let subscriptions: Vec<FinancialRecord> = self
            .records_repository
            .subscriptions_for_user(user_id)?
            .iter()
            .map(|r| r.to_record())
            .collect();
        let epics: Vec<FinancialRecord> = self
            .records_repository
            .epics_for_user(user_id)?
            .iter()
            .map(|r| r.to_record())
            .collect();

        let asset_agg = aggregate(&assets);
        let liability_agg = aggregate(&liabilities);
        let income_agg = aggregate(&income);
        let expense_agg = aggregate(&expenses);
        let subscription_agg = aggregate(&subscriptions);

        let horizon = self.settings_service.epic_horizon_years(user_id)?;
        let annual_epics = amortize_epics(&epics, horizon);

        let total_annual_expenses = subscription_agg.total + expense_agg.total + annual_epics;
        let position = net_position(
            asset_agg.total,
            liability_agg.total,
            income_agg.total,
            total_annual_expenses,
        );

        let phases = self.budget_repository.phases_for_user(user_id)?;
        let targets = budget_targets(&phases);

        let actual_breakdown = vec![
            BreakdownSlice {
                label: "Bills/Subscriptions".to_string(),
                value: rounded(subscription_agg.total),
            },
            BreakdownSlice {
                label: "Expenses".to_string(),
                value: rounded(expense_agg.total),
            },
            BreakdownSlice {
                label: "Epic Experiences".to_string(),
                value: rounded(annual_epics),
            },
        ];

        debug!(
            "Summary for user {}: net worth {}, annual surplus {}",
            user_id,
            position.net_worth,
            position.annual_surplus
        );

        Ok(CalculatorSummary {
            total_assets: rounded(asset_agg.total),
            total_liabilities: rounded(liability_agg.total),
            net_worth: rounded(position.net_worth),
            annual_income: rounded(income_agg.total),
            annual_subscriptions: rounded(subscription_agg.total),
            annual_expenses: rounded(expense_agg.total),
            annual_epics: rounded(annual_epics),
            total_annual_expenses: rounded(total_annual_expenses),
            annual_surplus: rounded(position.annual_surplus),
            monthly_surplus: rounded(position.monthly_surplus),
            asset_breakdown: rounded_slices(sorted_breakdown(asset_agg.breakdown)),
            liability_breakdown: rounded_slices(sorted_breakdown(liability_agg.breakdown)),
            income_breakdown: rounded_slices(sorted_breakdown(income_agg.breakdown)),
            subscription_breakdown: rounded_slices(sorted_breakdown(subscription_agg.breakdown)),
            expense_breakdown: rounded_slices(sorted_breakdown(expense_agg.breakdown)),
            actual_breakdown,
            budget_targets: targets,
            epic_horizon_years: horizon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{FutureBudgetPhase, FutureBudgetPhaseInput};
    use crate::records::{
        AssetRow, AssetRowInput, EpicRow, EpicRowInput, ExpenseRow, ExpenseRowInput, IncomeRow,
        IncomeRowInput, LiabilityRow, LiabilityRowInput, SubscriptionRow, SubscriptionRowInput,
    };
    use crate::settings::UserSettingsRepositoryTrait;
    use crate::settings::UserSettingsService;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::RwLock;

    // ============== Mock Repositories ==============

    #[derive(Default)]
    struct MockRecordsRepository {
        assets: Vec<AssetRow>,
        liabilities: Vec<LiabilityRow>,
        income: Vec<IncomeRow>,
        expenses: Vec<ExpenseRow>,
        subscriptions: Vec<SubscriptionRow>,
        epics: Vec<EpicRow>,
    }

    #[async_trait]
    impl RecordsRepositoryTrait for MockRecordsRepository {
        fn assets_for_user(&self, _: &str) -> Result<Vec<AssetRow>> {
            Ok(self.assets.clone())
        }
        fn liabilities_for_user(&self, _: &str) -> Result<Vec<LiabilityRow>> {
            Ok(self.liabilities.clone())
        }
        fn income_for_user(&self, _: &str) -> Result<Vec<IncomeRow>> {
            Ok(self.income.clone())
        }
        fn expenses_for_user(&self, _: &str) -> Result<Vec<ExpenseRow>> {
            Ok(self.expenses.clone())
        }
        fn subscriptions_for_user(&self, _: &str) -> Result<Vec<SubscriptionRow>> {
            Ok(self.subscriptions.clone())
        }
        fn epics_for_user(&self, _: &str) -> Result<Vec<EpicRow>> {
            Ok(self.epics.clone())
        }

        async fn replace_assets(&self, _: &str, rows: Vec<AssetRow>) -> Result<Vec<AssetRow>> {
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
            _: &str,
            rows: Vec<SubscriptionRow>,
        ) -> Result<Vec<SubscriptionRow>> {
            Ok(rows)
        }
        async fn replace_epics(&self, _: &str, rows: Vec<EpicRow>) -> Result<Vec<EpicRow>> {
            Ok(rows)
        }
    }

    #[derive(Default)]
    struct MockBudgetRepository {
        phases: Vec<FutureBudgetPhase>,
    }

    #[async_trait]
    impl BudgetRepositoryTrait for MockBudgetRepository {
        fn phases_for_user(&self, _: &str) -> Result<Vec<FutureBudgetPhase>> {
            Ok(self.phases.clone())
        }
        async fn replace_for_user(
            &self,
            _: &str,
            phases: Vec<FutureBudgetPhase>,
        ) -> Result<Vec<FutureBudgetPhase>> {
            Ok(phases)
        }
    }

    #[derive(Default)]
    struct MockSettingsRepository {
        values: RwLock<HashMap<(String, String), String>>,
    }

    #[async_trait]
    impl UserSettingsRepositoryTrait for MockSettingsRepository {
        fn get_setting(&self, user_id: &str, key: &str) -> Result<Option<String>> {
            Ok(self
                .values
                .read()
                .unwrap()
                .get(&(user_id.to_string(), key.to_string()))
                .cloned())
        }
        async fn set_setting(&self, user_id: &str, key: &str, value: &str) -> Result<()> {
            self.values
                .write()
                .unwrap()
                .insert((user_id.to_string(), key.to_string()), value.to_string());
            Ok(())
        }
    }

    fn fixture_records() -> MockRecordsRepository {
        MockRecordsRepository {
            assets: vec![
                AssetRow::from_input(
                    "u1",
                    AssetRowInput {
                        category: "Property".to_string(),
                        description: "Home".to_string(),
                        amount: dec!(800000),
                        owner: String::new(),
                        include: true,
                    },
                ),
                AssetRow::from_input(
                    "u1",
                    AssetRowInput {
                        category: "Shares".to_string(),
                        description: "ETF portfolio".to_string(),
                        amount: dec!(50000),
                        owner: String::new(),
                        include: false,
                    },
                ),
            ],
            liabilities: vec![LiabilityRow::from_input(
                "u1",
                LiabilityRowInput {
                    name: "Mortgage".to_string(),
                    amount: dec!(300000),
                    kind: "Home loan".to_string(),
                    monthly_payment: dec!(2500),
                    notes: String::new(),
                    include: true,
                },
            )],
            income: vec![IncomeRow::from_input(
                "u1",
                IncomeRowInput {
                    source: "Salary".to_string(),
                    amount: dec!(2000),
                    frequency: "Fortnightly".to_string(),
                    notes: String::new(),
                    include: true,
                },
            )],
            expenses: vec![ExpenseRow::from_input(
                "u1",
                ExpenseRowInput {
                    category: "Groceries".to_string(),
                    item: "Weekly shop".to_string(),
                    amount: dec!(250),
                    frequency: "Weekly".to_string(),
                    kind: "Essential".to_string(),
                    include: true,
                },
            )],
            subscriptions: vec![SubscriptionRow::from_input(
                "u1",
                SubscriptionRowInput {
                    name: "Streaming".to_string(),
                    provider: String::new(),
                    amount: dec!(20),
                    frequency: "Monthly".to_string(),
                    notes: String::new(),
                    include: true,
                },
            )],
            epics: vec![EpicRow::from_input(
                "u1",
                EpicRowInput {
                    item: "Round the world trip".to_string(),
                    amount: dec!(30000),
                    frequency: "Once only".to_string(),
                    include: true,
                },
            )],
        }
    }

    fn service_with(records: MockRecordsRepository) -> SummaryService {
        SummaryService::new(
            Arc::new(records),
            Arc::new(MockBudgetRepository::default()),
            Arc::new(UserSettingsService::new(Arc::new(
                MockSettingsRepository::default(),
            ))),
        )
    }

    // ==================== Summary Assembly Tests ====================

    #[test]
    fn test_summary_totals() {
        let summary = service_with(fixture_records())
            .calculator_summary("u1")
            .unwrap();

        // Excluded ETF row does not count toward assets.
        assert_eq!(summary.total_assets, dec!(800000));
        assert_eq!(summary.total_liabilities, dec!(300000));
        assert_eq!(summary.net_worth, dec!(500000));

        // 2000 fortnightly = 52000 annual.
        assert_eq!(summary.annual_income, dec!(52000));
        // 250 weekly = 13000; 20 monthly = 240; 30000 one-off over 10y = 3000.
        assert_eq!(summary.annual_expenses, dec!(13000));
        assert_eq!(summary.annual_subscriptions, dec!(240));
        assert_eq!(summary.annual_epics, dec!(3000));
        assert_eq!(summary.total_annual_expenses, dec!(16240));

        assert_eq!(summary.annual_surplus, dec!(35760));
        assert_eq!(summary.monthly_surplus, dec!(2980));
        assert_eq!(summary.epic_horizon_years, 10);
    }

    #[test]
    fn test_summary_actual_breakdown_series() {
        let summary = service_with(fixture_records())
            .calculator_summary("u1")
            .unwrap();
        let labels: Vec<&str> = summary
            .actual_breakdown
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Bills/Subscriptions", "Expenses", "Epic Experiences"]
        );
        assert_eq!(summary.actual_breakdown[0].value, dec!(240));
        assert_eq!(summary.actual_breakdown[1].value, dec!(13000));
        assert_eq!(summary.actual_breakdown[2].value, dec!(3000));
    }

    #[test]
    fn test_summary_budget_targets_sum_phase_columns() {
        let budget = MockBudgetRepository {
            phases: vec![
                FutureBudgetPhase::from_input(
                    "u1",
                    FutureBudgetPhaseInput {
                        phase: "Go-go".to_string(),
                        age_range: "65-75".to_string(),
                        years_in_phase: 10,
                        baseline_cost: dec!(50000),
                        one_off_costs: dec!(4000),
                        epic_cost: dec!(6000),
                    },
                ),
                FutureBudgetPhase::from_input(
                    "u1",
                    FutureBudgetPhaseInput {
                        phase: "Slow-go".to_string(),
                        age_range: "75-85".to_string(),
                        years_in_phase: 10,
                        baseline_cost: dec!(40000),
                        one_off_costs: dec!(2000),
                        epic_cost: dec!(3000),
                    },
                ),
            ],
        };
        let service = SummaryService::new(
            Arc::new(MockRecordsRepository::default()),
            Arc::new(budget),
            Arc::new(UserSettingsService::new(Arc::new(
                MockSettingsRepository::default(),
            ))),
        );
        let summary = service.calculator_summary("u1").unwrap();
        assert_eq!(summary.budget_targets.baseline, dec!(90000));
        assert_eq!(summary.budget_targets.one_off, dec!(6000));
        assert_eq!(summary.budget_targets.epic, dec!(9000));
        assert_eq!(summary.budget_targets.total, dec!(105000));
    }

    #[test]
    fn test_summary_deficit_is_reported_negative() {
        let records = MockRecordsRepository {
            expenses: vec![ExpenseRow::from_input(
                "u1",
                ExpenseRowInput {
                    category: "Rent".to_string(),
                    item: "Rent".to_string(),
                    amount: dec!(700),
                    frequency: "Weekly".to_string(),
                    kind: "Essential".to_string(),
                    include: true,
                },
            )],
            income: vec![IncomeRow::from_input(
                "u1",
                IncomeRowInput {
                    source: "Pension".to_string(),
                    amount: dec!(500),
                    frequency: "Weekly".to_string(),
                    notes: String::new(),
                    include: true,
                },
            )],
            ..Default::default()
        };
        let summary = service_with(records).calculator_summary("u1").unwrap();
        assert_eq!(summary.annual_surplus, dec!(-10400));
    }

    #[test]
    fn test_summary_uses_saved_epic_horizon() {
        let settings_repo = Arc::new(MockSettingsRepository::default());
        {
            let mut values = settings_repo.values.write().unwrap();
            values.insert(
                ("u1".to_string(), "epic_horizon_years".to_string()),
                "5".to_string(),
            );
        }
        let records = MockRecordsRepository {
            epics: vec![EpicRow::from_input(
                "u1",
                EpicRowInput {
                    item: "Safari".to_string(),
                    amount: dec!(10000),
                    frequency: "Once only".to_string(),
                    include: true,
                },
            )],
            ..Default::default()
        };
        let service = SummaryService::new(
            Arc::new(records),
            Arc::new(MockBudgetRepository::default()),
            Arc::new(UserSettingsService::new(settings_repo)),
        );
        let summary = service.calculator_summary("u1").unwrap();
        assert_eq!(summary.annual_epics, dec!(2000));
        assert_eq!(summary.epic_horizon_years, 5);
    }

    #[test]
    fn test_summary_is_deterministic() {
        let service = service_with(fixture_records());
        let first = service.calculator_summary("u1").unwrap();
        let second = service.calculator_summary("u1").unwrap();
        assert_eq!(first, second);
    }
}
