//! Life expectancy estimator.
//!
//! Benchmarks are the published Prime Time midlife lifespan tables: expected
//! lifespan by gender (or couple, meaning the longer-lived of two) and
//! survival percentile.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalculatorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Couple,
}

impl Gender {
    pub fn from_label(label: &str) -> Result<Gender> {
        match label.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "couple" => Ok(Gender::Couple),
            other => Err(CalculatorError::UnknownGender(other.to_string()).into()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Couple => "couple",
        }
    }
}

/// Survival percentile column of the benchmark table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Percentile {
    #[serde(rename = "25th")]
    P25,
    #[serde(rename = "50th")]
    P50,
    #[serde(rename = "75th")]
    P75,
    #[serde(rename = "90th")]
    P90,
}

impl Percentile {
    pub fn from_label(label: &str) -> Result<Percentile> {
        match label.trim().to_lowercase().as_str() {
            "25th" | "25" => Ok(Percentile::P25),
            "50th" | "50" => Ok(Percentile::P50),
            "75th" | "75" => Ok(Percentile::P75),
            "90th" | "90" => Ok(Percentile::P90),
            other => Err(CalculatorError::UnknownPercentile(other.to_string()).into()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Percentile::P25 => "25th",
            Percentile::P50 => "50th",
            Percentile::P75 => "75th",
            Percentile::P90 => "90th",
        }
    }
}

/// Expected lifespan in years for a gender/percentile pair.
pub fn expected_lifespan(gender: Gender, percentile: Percentile) -> i32 {
    match (gender, percentile) {
        (Gender::Male, Percentile::P25) => 85,
        (Gender::Male, Percentile::P50) => 89,
        (Gender::Male, Percentile::P75) => 95,
        (Gender::Male, Percentile::P90) => 98,
        (Gender::Female, Percentile::P25) => 87,
        (Gender::Female, Percentile::P50) => 91,
        (Gender::Female, Percentile::P75) => 97,
        (Gender::Female, Percentile::P90) => 100,
        (Gender::Couple, Percentile::P25) => 92,
        (Gender::Couple, Percentile::P50) => 95,
        (Gender::Couple, Percentile::P75) => 98,
        (Gender::Couple, Percentile::P90) => 101,
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeExpectancyInput {
    pub gender: String,
    pub percentile: String,
    pub current_age: i32,
}

/// One saved estimate. Estimates are append-only; the newest one is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeExpectancyEstimate {
    pub id: String,
    pub user_id: String,
    pub gender: Gender,
    pub percentile: Percentile,
    pub current_age: i32,
    pub expected_lifespan: i32,
    pub years_remaining: i32,
    pub estimated_year: i32,
    pub created_at: DateTime<Utc>,
}

/// Build an estimate from the inputs, anchored to the current calendar year.
pub fn estimate(user_id: &str, input: &LifeExpectancyInput) -> Result<LifeExpectancyEstimate> {
    let gender = Gender::from_label(&input.gender)?;
    let percentile = Percentile::from_label(&input.percentile)?;
    let expected = expected_lifespan(gender, percentile);
    let years_remaining = (expected - input.current_age).max(0);
    let now = Utc::now();
    Ok(LifeExpectancyEstimate {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        gender,
        percentile,
        current_age: input.current_age,
        expected_lifespan: expected,
        years_remaining,
        estimated_year: now.year() + years_remaining,
        created_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_table_corners() {
        assert_eq!(expected_lifespan(Gender::Male, Percentile::P25), 85);
        assert_eq!(expected_lifespan(Gender::Female, Percentile::P90), 100);
        assert_eq!(expected_lifespan(Gender::Couple, Percentile::P90), 101);
    }

    #[test]
    fn test_estimate_years_remaining() {
        let input = LifeExpectancyInput {
            gender: "female".to_string(),
            percentile: "50th".to_string(),
            current_age: 55,
        };
        let estimate = estimate("u1", &input).unwrap();
        assert_eq!(estimate.expected_lifespan, 91);
        assert_eq!(estimate.years_remaining, 36);
        assert_eq!(
            estimate.estimated_year,
            Utc::now().year() + 36
        );
    }

    #[test]
    fn test_estimate_never_returns_negative_years() {
        let input = LifeExpectancyInput {
            gender: "male".to_string(),
            percentile: "25th".to_string(),
            current_age: 92,
        };
        let estimate = estimate("u1", &input).unwrap();
        assert_eq!(estimate.years_remaining, 0);
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let input = LifeExpectancyInput {
            gender: "other".to_string(),
            percentile: "50th".to_string(),
            current_age: 60,
        };
        assert!(estimate("u1", &input).is_err());
    }

    #[test]
    fn test_percentile_labels_parse_loosely() {
        assert_eq!(Percentile::from_label(" 75TH ").unwrap(), Percentile::P75);
        assert_eq!(Percentile::from_label("90").unwrap(), Percentile::P90);
        assert!(Percentile::from_label("99th").is_err());
    }
}
