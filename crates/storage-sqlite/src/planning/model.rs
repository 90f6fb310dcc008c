//! Database models for the planning calculators.
//!
//! Debt rows persist inputs only; payoff figures are recomputed by the
//! service on every read.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use primekit_core::planning::{
    DebtRow, EnoughEstimate, Gender, LifeExpectancyEstimate, Percentile,
};

use crate::utils::{format_timestamp, parse_decimal, parse_timestamp};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::debt_paydown_rows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DebtRowDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub principal: String,
    pub annual_rate_pct: String,
    pub monthly_payment: String,
    pub include: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<DebtRowDB> for DebtRow {
    fn from(db: DebtRowDB) -> Self {
        Self {
            principal: parse_decimal(&db.principal, "debt_paydown_rows.principal"),
            annual_rate_pct: parse_decimal(
                &db.annual_rate_pct,
                "debt_paydown_rows.annual_rate_pct",
            ),
            monthly_payment: parse_decimal(
                &db.monthly_payment,
                "debt_paydown_rows.monthly_payment",
            ),
            created_at: parse_timestamp(&db.created_at, "debt_paydown_rows.created_at"),
            updated_at: parse_timestamp(&db.updated_at, "debt_paydown_rows.updated_at"),
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            include: db.include,
            months_to_payoff: None,
            years_to_repay: None,
            never_repaid: false,
        }
    }
}

impl From<&DebtRow> for DebtRowDB {
    fn from(domain: &DebtRow) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            name: domain.name.clone(),
            principal: domain.principal.to_string(),
            annual_rate_pct: domain.annual_rate_pct.to_string(),
            monthly_payment: domain.monthly_payment.to_string(),
            include: domain.include,
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::life_expectancy_estimates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LifeExpectancyEstimateDB {
    pub id: String,
    pub user_id: String,
    pub gender: String,
    pub percentile: String,
    pub current_age: i32,
    pub expected_lifespan: i32,
    pub years_remaining: i32,
    pub estimated_year: i32,
    pub created_at: String,
}

impl From<LifeExpectancyEstimateDB> for LifeExpectancyEstimate {
    fn from(db: LifeExpectancyEstimateDB) -> Self {
        let gender = Gender::from_label(&db.gender).unwrap_or_else(|_| {
            log::error!("Unknown stored gender '{}', defaulting to couple", db.gender);
            Gender::Couple
        });
        let percentile = Percentile::from_label(&db.percentile).unwrap_or_else(|_| {
            log::error!(
                "Unknown stored percentile '{}', defaulting to 50th",
                db.percentile
            );
            Percentile::P50
        });
        Self {
            gender,
            percentile,
            created_at: parse_timestamp(&db.created_at, "life_expectancy_estimates.created_at"),
            id: db.id,
            user_id: db.user_id,
            current_age: db.current_age,
            expected_lifespan: db.expected_lifespan,
            years_remaining: db.years_remaining,
            estimated_year: db.estimated_year,
        }
    }
}

impl From<&LifeExpectancyEstimate> for LifeExpectancyEstimateDB {
    fn from(domain: &LifeExpectancyEstimate) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            gender: domain.gender.as_str().to_string(),
            percentile: domain.percentile.as_str().to_string(),
            current_age: domain.current_age,
            expected_lifespan: domain.expected_lifespan,
            years_remaining: domain.years_remaining,
            estimated_year: domain.estimated_year,
            created_at: format_timestamp(&domain.created_at),
        }
    }
}

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::enough_estimates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct EnoughEstimateDB {
    pub id: String,
    pub user_id: String,
    pub use_future_budget: bool,
    pub manual_annual: String,
    pub annual_spend: String,
    pub real_rate_pct: String,
    pub years: i32,
    pub pension: String,
    pub part_time_income: String,
    pub part_time_years: String,
    pub annual_shortfall: String,
    pub lump_sum_rule: String,
    pub lump_sum_annuity: String,
    pub created_at: String,
}

impl From<EnoughEstimateDB> for EnoughEstimate {
    fn from(db: EnoughEstimateDB) -> Self {
        Self {
            manual_annual: parse_decimal(&db.manual_annual, "enough_estimates.manual_annual"),
            annual_spend: parse_decimal(&db.annual_spend, "enough_estimates.annual_spend"),
            real_rate_pct: parse_decimal(&db.real_rate_pct, "enough_estimates.real_rate_pct"),
            pension: parse_decimal(&db.pension, "enough_estimates.pension"),
            part_time_income: parse_decimal(
                &db.part_time_income,
                "enough_estimates.part_time_income",
            ),
            part_time_years: parse_decimal(
                &db.part_time_years,
                "enough_estimates.part_time_years",
            ),
            annual_shortfall: parse_decimal(
                &db.annual_shortfall,
                "enough_estimates.annual_shortfall",
            ),
            lump_sum_rule: parse_decimal(&db.lump_sum_rule, "enough_estimates.lump_sum_rule"),
            lump_sum_annuity: parse_decimal(
                &db.lump_sum_annuity,
                "enough_estimates.lump_sum_annuity",
            ),
            created_at: parse_timestamp(&db.created_at, "enough_estimates.created_at"),
            id: db.id,
            user_id: db.user_id,
            use_future_budget: db.use_future_budget,
            years: db.years,
        }
    }
}

impl From<&EnoughEstimate> for EnoughEstimateDB {
    fn from(domain: &EnoughEstimate) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            use_future_budget: domain.use_future_budget,
            manual_annual: domain.manual_annual.to_string(),
            annual_spend: domain.annual_spend.to_string(),
            real_rate_pct: domain.real_rate_pct.to_string(),
            years: domain.years,
            pension: domain.pension.to_string(),
            part_time_income: domain.part_time_income.to_string(),
            part_time_years: domain.part_time_years.to_string(),
            annual_shortfall: domain.annual_shortfall.to_string(),
            lump_sum_rule: domain.lump_sum_rule.to_string(),
            lump_sum_annuity: domain.lump_sum_annuity.to_string(),
            created_at: format_timestamp(&domain.created_at),
        }
    }
}
