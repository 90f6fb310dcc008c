//! Wellbeing self-assessment domain models and scoring.
//!
//! The question plan is configuration, not code: categories and their
//! question counts live in [`AssessmentPlan`], answers are stored as a
//! key/value map, and the scorer walks the plan. Adding a category or a
//! question changes the plan only.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, ValidationError};

pub const MIN_ANSWER: i32 = 1;
pub const MAX_ANSWER: i32 = 5;

/// Category percentage at or above which it is reported as a strength.
pub const STRENGTH_THRESHOLD: i32 = 75;
/// Category percentage below which it is reported as a weakness.
pub const WEAKNESS_THRESHOLD: i32 = 40;

/// One question category: a stable key, a display name, and how many
/// questions it asks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentCategory {
    pub key: String,
    pub display_name: String,
    pub question_count: usize,
}

/// The ordered list of categories; one assessment step per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPlan {
    pub categories: Vec<AssessmentCategory>,
}

impl AssessmentPlan {
    /// The standard six-category, four-question plan.
    pub fn standard() -> Self {
        let category = |key: &str, display_name: &str| AssessmentCategory {
            key: key.to_string(),
            display_name: display_name.to_string(),
            question_count: 4,
        };
        AssessmentPlan {
            categories: vec![
                category("purpose", "Purpose & Direction"),
                category("spending", "Spending & Cashflow"),
                category("saving", "Saving & Emergency"),
                category("debt", "Debt & Financial Stress"),
                category("super", "Superannuation & Retirement Readiness"),
                category("protection", "Protecting & Preparing"),
            ],
        }
    }

    pub fn step_count(&self) -> usize {
        self.categories.len()
    }

    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|c| c.question_count).sum()
    }

    /// Answer-map keys for one category, `<key>_q1` through `<key>_qN`.
    pub fn question_keys(&self, category: &AssessmentCategory) -> Vec<String> {
        (1..=category.question_count)
            .map(|i| format!("{}_q{}", category.key, i))
            .collect()
    }

    pub fn category_at(&self, step_index: usize) -> Option<&AssessmentCategory> {
        self.categories.get(step_index)
    }

    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.display_name.as_str())
    }
}

impl Default for AssessmentPlan {
    fn default() -> Self {
        Self::standard()
    }
}

/// A user's assessment attempt. Answers accumulate step by step; the score
/// fields stay empty until the attempt is finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub user_id: String,
    pub answers: HashMap<String, i32>,
    pub total_score: Option<i32>,
    pub band: Option<Band>,
    pub category_scores: HashMap<String, i32>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    pub fn new(user_id: &str) -> Self {
        let now = Utc::now();
        Assessment {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            answers: HashMap::new(),
            total_score: None,
            band: None,
            category_scores: HashMap::new(),
            submitted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.total_score.is_some()
    }
}

/// Overall engagement band from the total percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Inactive,
    Reactive,
    Proactive,
}

impl Band {
    pub fn from_percent(total_percent: i32) -> Band {
        if total_percent <= 50 {
            Band::Inactive
        } else if total_percent <= 89 {
            Band::Reactive
        } else {
            Band::Proactive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Inactive => "Inactive",
            Band::Reactive => "Reactive",
            Band::Proactive => "Proactive",
        }
    }
}

/// Percentage score for one category, with its display name for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub key: String,
    pub display_name: String,
    pub percent: i32,
}

/// The scored outcome of a finalized assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub assessment_id: String,
    pub total_score: i32,
    pub band: Band,
    pub category_scores: Vec<CategoryScore>,
    pub key_strengths: Vec<String>,
    pub key_weaknesses: Vec<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

fn percent_of_max(sum: i32, max: i32) -> i32 {
    if max <= 0 {
        return 0;
    }
    (Decimal::from(sum) * Decimal::from(100) / Decimal::from(max))
        .round()
        .to_i32()
        .unwrap_or(0)
}

/// Validate one step's answers against the plan.
///
/// Every question in the step's category must be present and within the 1-5
/// scale. Returns [`ValidationError`] naming the category; the caller keeps
/// the assessment untouched and re-presents the same step.
pub fn validate_step_answers(
    plan: &AssessmentPlan,
    step_index: usize,
    answers: &HashMap<String, i32>,
) -> Result<()> {
    let category = plan.category_at(step_index).ok_or_else(|| {
        ValidationError::InvalidInput(format!("Unknown assessment step {}", step_index + 1))
    })?;
    for key in plan.question_keys(category) {
        match answers.get(&key) {
            None => {
                return Err(ValidationError::InvalidInput(format!(
                    "Please answer all {} questions before continuing.",
                    category.display_name
                ))
                .into());
            }
            Some(value) if *value < MIN_ANSWER || *value > MAX_ANSWER => {
                return Err(ValidationError::InvalidInput(format!(
                    "Answers for {} must be between {} and {}.",
                    category.display_name, MIN_ANSWER, MAX_ANSWER
                ))
                .into());
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Score a complete answer set.
///
/// Errors if any question in the plan is unanswered; partial attempts are
/// never scored.
pub fn score(plan: &AssessmentPlan, answers: &HashMap<String, i32>) -> Result<(i32, Band, HashMap<String, i32>)> {
    let mut missing: Vec<String> = Vec::new();
    let mut total_sum = 0;
    let mut category_scores = HashMap::new();

    for category in &plan.categories {
        let mut category_sum = 0;
        for key in plan.question_keys(category) {
            match answers.get(&key) {
                Some(value) => {
                    total_sum += value;
                    category_sum += value;
                }
                None => missing.push(key),
            }
        }
        category_scores.insert(
            category.key.clone(),
            percent_of_max(category_sum, (category.question_count * MAX_ANSWER as usize) as i32),
        );
    }

    if !missing.is_empty() {
        return Err(ValidationError::InvalidInput(format!(
            "Missing answers for: {}",
            missing.join(", ")
        ))
        .into());
    }

    let total_percent = percent_of_max(
        total_sum,
        (plan.total_questions() * MAX_ANSWER as usize) as i32,
    );
    Ok((total_percent, Band::from_percent(total_percent), category_scores))
}

/// Build the displayable result from a finalized assessment's stored scores.
pub fn build_result(plan: &AssessmentPlan, assessment: &Assessment) -> AssessmentResult {
    let category_scores: Vec<CategoryScore> = plan
        .categories
        .iter()
        .map(|category| CategoryScore {
            key: category.key.clone(),
            display_name: category.display_name.clone(),
            percent: assessment
                .category_scores
                .get(&category.key)
                .copied()
                .unwrap_or(0),
        })
        .collect();

    let key_strengths = category_scores
        .iter()
        .filter(|c| c.percent >= STRENGTH_THRESHOLD)
        .map(|c| c.display_name.clone())
        .collect();
    let key_weaknesses = category_scores
        .iter()
        .filter(|c| c.percent < WEAKNESS_THRESHOLD)
        .map(|c| c.display_name.clone())
        .collect();

    AssessmentResult {
        assessment_id: assessment.id.clone(),
        total_score: assessment.total_score.unwrap_or(0),
        band: assessment.band.unwrap_or(Band::Inactive),
        category_scores,
        key_strengths,
        key_weaknesses,
        submitted_at: assessment.submitted_at,
    }
}
