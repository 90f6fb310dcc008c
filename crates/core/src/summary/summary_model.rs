//! Summary payload models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetTargets;

/// One labelled value in a breakdown series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownSlice {
    pub label: String,
    pub value: Decimal,
}

/// Render a breakdown map as a label-sorted series so JSON output is stable
/// across runs.
pub fn sorted_breakdown(breakdown: HashMap<String, Decimal>) -> Vec<BreakdownSlice> {
    let mut slices: Vec<BreakdownSlice> = breakdown
        .into_iter()
        .map(|(label, value)| BreakdownSlice { label, value })
        .collect();
    slices.sort_by(|a, b| a.label.cmp(&b.label));
    slices
}

/// Everything the summary and dashboard pages need, produced in one pass by
/// the aggregation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSummary {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,

    pub annual_income: Decimal,
    pub annual_subscriptions: Decimal,
    /// Living expense buckets only, excluding subscriptions and epics.
    pub annual_expenses: Decimal,
    pub annual_epics: Decimal,
    /// Subscriptions + expense buckets + amortized epics.
    pub total_annual_expenses: Decimal,

    pub annual_surplus: Decimal,
    pub monthly_surplus: Decimal,

    pub asset_breakdown: Vec<BreakdownSlice>,
    pub liability_breakdown: Vec<BreakdownSlice>,
    pub income_breakdown: Vec<BreakdownSlice>,
    pub subscription_breakdown: Vec<BreakdownSlice>,
    pub expense_breakdown: Vec<BreakdownSlice>,

    /// Actual annual spending series: bills/subscriptions, living expenses,
    /// epic experiences. Paired with `budget_targets` for the
    /// budget-vs-actual chart; no variance is computed.
    pub actual_breakdown: Vec<BreakdownSlice>,
    pub budget_targets: BudgetTargets,

    pub epic_horizon_years: u32,
}
