//! "How much is enough" retirement estimator.
//!
//! Compares planned annual spending against pension and part-time income
//! over the retirement horizon, then sizes the lump sum needed to cover the
//! shortfall two ways: a perpetuity at the real rate, and an annuity that
//! exhausts over the horizon.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnoughInput {
    /// Take annual spending from the future budget phases instead of
    /// `manual_annual`.
    #[serde(default)]
    pub use_future_budget: bool,
    #[serde(default)]
    pub manual_annual: Decimal,
    #[serde(default)]
    pub real_rate_pct: Decimal,
    #[serde(default)]
    pub years: i32,
    #[serde(default)]
    pub pension: Decimal,
    #[serde(default)]
    pub part_time_income: Decimal,
    #[serde(default)]
    pub part_time_years: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnoughOutcome {
    pub annual_shortfall: Decimal,
    pub lump_sum_rule: Decimal,
    pub lump_sum_annuity: Decimal,
}

/// Size the retirement lump sum for `annual_spend` per year.
///
/// Part-time income is averaged over the whole horizon: earning `part_time`
/// for `part_time_years` of an `years`-year retirement offsets spending by
/// `part_time * part_time_years / years` each year.
pub fn compute_outcome(
    annual_spend: Decimal,
    real_rate_pct: Decimal,
    years: i32,
    pension: Decimal,
    part_time_income: Decimal,
    part_time_years: Decimal,
) -> EnoughOutcome {
    let rate = real_rate_pct / Decimal::from(100);
    let horizon = years.max(0);
    let horizon_dec = Decimal::from(horizon);

    let average_part_time = if horizon > 0 {
        part_time_income * part_time_years.min(horizon_dec) / horizon_dec
    } else {
        Decimal::ZERO
    };

    let shortfall = (annual_spend - pension - average_part_time).max(Decimal::ZERO);

    let lump_sum_rule = if rate > Decimal::ZERO {
        shortfall / rate
    } else {
        shortfall * horizon_dec
    };
    let lump_sum_annuity = if rate > Decimal::ZERO {
        let discount = (Decimal::ONE + rate).powi(-i64::from(horizon));
        shortfall * (Decimal::ONE - discount) / rate
    } else {
        shortfall * horizon_dec
    };

    EnoughOutcome {
        annual_shortfall: shortfall.round_dp(DISPLAY_DECIMAL_PRECISION),
        lump_sum_rule: lump_sum_rule.round_dp(DISPLAY_DECIMAL_PRECISION),
        lump_sum_annuity: lump_sum_annuity.round_dp(DISPLAY_DECIMAL_PRECISION),
    }
}

/// One saved run of the estimator, inputs and results together. Only the
/// latest run per user is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnoughEstimate {
    pub id: String,
    pub user_id: String,
    pub use_future_budget: bool,
    pub manual_annual: Decimal,
    pub annual_spend: Decimal,
    pub real_rate_pct: Decimal,
    pub years: i32,
    pub pension: Decimal,
    pub part_time_income: Decimal,
    pub part_time_years: Decimal,
    pub annual_shortfall: Decimal,
    pub lump_sum_rule: Decimal,
    pub lump_sum_annuity: Decimal,
    pub created_at: DateTime<Utc>,
}

impl EnoughEstimate {
    pub fn from_parts(user_id: &str, input: &EnoughInput, annual_spend: Decimal) -> EnoughEstimate {
        let outcome = compute_outcome(
            annual_spend,
            input.real_rate_pct,
            input.years,
            input.pension,
            input.part_time_income,
            input.part_time_years,
        );
        EnoughEstimate {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            use_future_budget: input.use_future_budget,
            manual_annual: input.manual_annual,
            annual_spend,
            real_rate_pct: input.real_rate_pct,
            years: input.years,
            pension: input.pension,
            part_time_income: input.part_time_income,
            part_time_years: input.part_time_years,
            annual_shortfall: outcome.annual_shortfall,
            lump_sum_rule: outcome.lump_sum_rule,
            lump_sum_annuity: outcome.lump_sum_annuity,
            created_at: Utc::now(),
        }
    }
}
