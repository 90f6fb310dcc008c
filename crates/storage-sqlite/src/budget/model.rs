use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use primekit_core::budget::FutureBudgetPhase;

use crate::utils::{format_timestamp, parse_decimal, parse_timestamp};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::future_budget_phases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct FutureBudgetPhaseDB {
    pub id: String,
    pub user_id: String,
    pub phase: String,
    pub age_range: String,
    pub years_in_phase: i32,
    pub baseline_cost: String,
    pub one_off_costs: String,
    pub epic_cost: String,
    pub total_annual_budget: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<FutureBudgetPhaseDB> for FutureBudgetPhase {
    fn from(db: FutureBudgetPhaseDB) -> Self {
        Self {
            baseline_cost: parse_decimal(&db.baseline_cost, "future_budget_phases.baseline_cost"),
            one_off_costs: parse_decimal(&db.one_off_costs, "future_budget_phases.one_off_costs"),
            epic_cost: parse_decimal(&db.epic_cost, "future_budget_phases.epic_cost"),
            total_annual_budget: parse_decimal(
                &db.total_annual_budget,
                "future_budget_phases.total_annual_budget",
            ),
            created_at: parse_timestamp(&db.created_at, "future_budget_phases.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "future_budget_phases.updated_at"),
            id: db.id,
            user_id: db.user_id,
            phase: db.phase,
            age_range: db.age_range,
            years_in_phase: db.years_in_phase,
        }
    }
}

impl From<&FutureBudgetPhase> for FutureBudgetPhaseDB {
    fn from(domain: &FutureBudgetPhase) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            phase: domain.phase.clone(),
            age_range: domain.age_range.clone(),
            years_in_phase: domain.years_in_phase,
            baseline_cost: domain.baseline_cost.to_string(),
            one_off_costs: domain.one_off_costs.to_string(),
            epic_cost: domain.epic_cost.to_string(),
            total_annual_budget: domain.total_annual_budget.to_string(),
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}
