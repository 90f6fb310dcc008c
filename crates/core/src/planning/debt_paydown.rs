//! Debt paydown schedule.
//!
//! Standard amortisation: with monthly rate `i`, principal `P` and payment
//! `M`, the payoff takes `ceil(-ln(1 - i*P/M) / ln(1 + i))` payments. When
//! the payment does not cover the interest the balance never falls.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payoff {
    /// Paid off after this many monthly payments.
    Months(u32),
    /// Payment never overtakes the accruing interest.
    NeverRepaid,
    /// Principal or payment is not positive, nothing to schedule.
    NotApplicable,
}

/// Number of monthly payments needed to clear `principal` at
/// `annual_rate_pct` interest paying `monthly_payment` per month.
pub fn months_to_payoff(
    principal: Decimal,
    annual_rate_pct: Decimal,
    monthly_payment: Decimal,
) -> Payoff {
    if principal <= Decimal::ZERO || monthly_payment <= Decimal::ZERO {
        return Payoff::NotApplicable;
    }
    let monthly_rate = annual_rate_pct / Decimal::from(1200);
    if monthly_rate <= Decimal::ZERO {
        let months = (principal / monthly_payment).ceil();
        return Payoff::Months(months.to_u32().unwrap_or(u32::MAX));
    }
    if monthly_payment <= principal * monthly_rate {
        return Payoff::NeverRepaid;
    }
    let remaining_share = Decimal::ONE - (monthly_rate * principal / monthly_payment);
    let months = (-remaining_share.ln() / (Decimal::ONE + monthly_rate).ln()).ceil();
    Payoff::Months(months.to_u32().unwrap_or(u32::MAX))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtRowInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub principal: Decimal,
    #[serde(default, alias = "annualInterestRate")]
    pub annual_rate_pct: Decimal,
    #[serde(default)]
    pub monthly_payment: Decimal,
    #[serde(default = "default_include")]
    pub include: bool,
}

fn default_include() -> bool {
    true
}

/// One debt on the paydown worksheet. The schedule columns are derived from
/// the inputs on every read, they are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub principal: Decimal,
    pub annual_rate_pct: Decimal,
    pub monthly_payment: Decimal,
    pub include: bool,
    #[serde(default)]
    pub months_to_payoff: Option<u32>,
    #[serde(default)]
    pub years_to_repay: Option<Decimal>,
    #[serde(default)]
    pub never_repaid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DebtRow {
    pub fn from_input(user_id: &str, input: DebtRowInput) -> DebtRow {
        let now = Utc::now();
        let mut row = DebtRow {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: input.name.trim().to_string(),
            principal: input.principal,
            annual_rate_pct: input.annual_rate_pct,
            monthly_payment: input.monthly_payment,
            include: input.include,
            months_to_payoff: None,
            years_to_repay: None,
            never_repaid: false,
            created_at: now,
            updated_at: now,
        };
        row.recompute_schedule();
        row
    }

    /// Refresh the derived schedule columns from the stored inputs.
    pub fn recompute_schedule(&mut self) {
        match months_to_payoff(self.principal, self.annual_rate_pct, self.monthly_payment) {
            Payoff::Months(months) => {
                self.months_to_payoff = Some(months);
                self.years_to_repay = Some((Decimal::from(months) / Decimal::from(12)).round_dp(2));
                self.never_repaid = false;
            }
            Payoff::NeverRepaid => {
                self.months_to_payoff = None;
                self.years_to_repay = None;
                self.never_repaid = true;
            }
            Payoff::NotApplicable => {
                self.months_to_payoff = None;
                self.years_to_repay = None;
                self.never_repaid = false;
            }
        }
    }
}
