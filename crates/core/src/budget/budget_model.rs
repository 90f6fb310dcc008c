//! Future budget domain models.
//!
//! The future budget splits retirement into phases (for example "Go-go",
//! "Slow-go", "No-go"), each with an annual baseline cost, averaged one-off
//! costs, and an epic experiences allowance.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One life phase row of the future budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureBudgetPhase {
    pub id: String,
    pub user_id: String,
    pub phase: String,
    pub age_range: String,
    pub years_in_phase: i32,
    pub baseline_cost: Decimal,
    pub one_off_costs: Decimal,
    pub epic_cost: Decimal,
    pub total_annual_budget: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureBudgetPhaseInput {
    pub phase: String,
    #[serde(default)]
    pub age_range: String,
    #[serde(default)]
    pub years_in_phase: i32,
    #[serde(default)]
    pub baseline_cost: Decimal,
    #[serde(default)]
    pub one_off_costs: Decimal,
    #[serde(default)]
    pub epic_cost: Decimal,
}

impl FutureBudgetPhase {
    /// The total column is always derived from the three cost columns, never
    /// taken from the client.
    pub fn from_input(user_id: &str, input: FutureBudgetPhaseInput) -> Self {
        let now = Utc::now();
        let total = input.baseline_cost + input.one_off_costs + input.epic_cost;
        FutureBudgetPhase {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            phase: input.phase.trim().to_string(),
            age_range: input.age_range.trim().to_string(),
            years_in_phase: input.years_in_phase.max(0),
            baseline_cost: input.baseline_cost,
            one_off_costs: input.one_off_costs,
            epic_cost: input.epic_cost,
            total_annual_budget: total,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Column sums across all budget phases, the "target" side of the
/// budget-vs-actual comparison.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTargets {
    pub baseline: Decimal,
    pub one_off: Decimal,
    pub epic: Decimal,
    pub total: Decimal,
}

/// Sum the four money columns of the phase list.
pub fn budget_targets(phases: &[FutureBudgetPhase]) -> BudgetTargets {
    let mut targets = BudgetTargets::default();
    for phase in phases {
        targets.baseline += phase.baseline_cost;
        targets.one_off += phase.one_off_costs;
        targets.epic += phase.epic_cost;
        targets.total += phase.total_annual_budget;
    }
    targets
}

/// Average annual budget across phases, weighted by years in each phase.
///
/// Falls back to a simple mean when no phase has a positive year count, and
/// to zero when there are no phases at all.
pub fn average_annual_budget(phases: &[FutureBudgetPhase]) -> Decimal {
    if phases.is_empty() {
        return Decimal::ZERO;
    }
    let total_years: i64 = phases
        .iter()
        .map(|p| i64::from(p.years_in_phase.max(0)))
        .sum();
    if total_years > 0 {
        let weighted: Decimal = phases
            .iter()
            .map(|p| p.total_annual_budget * Decimal::from(p.years_in_phase.max(0)))
            .sum();
        weighted / Decimal::from(total_years)
    } else {
        let sum: Decimal = phases.iter().map(|p| p.total_annual_budget).sum();
        sum / Decimal::from(phases.len() as i64)
    }
}
