//! Step flow and finalization for the wellbeing self-assessment.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::assessment::{
    build_result, score, validate_step_answers, Assessment, AssessmentPlan,
    AssessmentRepositoryTrait, AssessmentResult,
};
use crate::errors::{Result, ValidationError};

/// Where a user is in the step flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentProgress {
    pub assessment_id: Option<String>,
    pub total_steps: usize,
    /// Step indices whose category is fully answered.
    pub completed_steps: Vec<usize>,
    /// First unanswered step, None once every step is complete.
    pub next_step: Option<usize>,
    pub finalized: bool,
}

#[async_trait]
pub trait AssessmentServiceTrait: Send + Sync {
    fn progress(&self, user_id: &str) -> Result<AssessmentProgress>;

    /// Record one step's answers. Step 0 may start a fresh attempt; later
    /// steps require one in progress. Invalid answers change nothing.
    async fn submit_step(
        &self,
        user_id: &str,
        step_index: usize,
        answers: HashMap<String, i32>,
    ) -> Result<AssessmentProgress>;

    /// Score the attempt. Requires every question answered.
    async fn finalize(&self, user_id: &str) -> Result<AssessmentResult>;

    fn latest_result(&self, user_id: &str) -> Result<Option<AssessmentResult>>;
}

pub struct AssessmentService {
    repository: Arc<dyn AssessmentRepositoryTrait>,
    plan: AssessmentPlan,
}

impl AssessmentService {
    pub fn new(repository: Arc<dyn AssessmentRepositoryTrait>) -> Self {
        Self {
            repository,
            plan: AssessmentPlan::standard(),
        }
    }

    pub fn with_plan(repository: Arc<dyn AssessmentRepositoryTrait>, plan: AssessmentPlan) -> Self {
        Self { repository, plan }
    }

    fn progress_of(&self, assessment: Option<&Assessment>) -> AssessmentProgress {
        let total_steps = self.plan.step_count();
        match assessment {
            None => AssessmentProgress {
                assessment_id: None,
                total_steps,
                completed_steps: Vec::new(),
                next_step: Some(0),
                finalized: false,
            },
            Some(assessment) => {
                let completed_steps: Vec<usize> = self
                    .plan
                    .categories
                    .iter()
                    .enumerate()
                    .filter(|(_, category)| {
                        self.plan
                            .question_keys(category)
                            .iter()
                            .all(|key| assessment.answers.contains_key(key))
                    })
                    .map(|(index, _)| index)
                    .collect();
                let next_step = (0..total_steps).find(|index| !completed_steps.contains(index));
                AssessmentProgress {
                    assessment_id: Some(assessment.id.clone()),
                    total_steps,
                    completed_steps,
                    next_step,
                    finalized: assessment.is_finalized(),
                }
            }
        }
    }

    /// The attempt new answers land in: the latest one, unless it has
    /// already been finalized.
    fn open_attempt(&self, user_id: &str) -> Result<Option<Assessment>> {
        Ok(self
            .repository
            .latest_for_user(user_id)?
            .filter(|a| !a.is_finalized()))
    }
}

#[async_trait]
impl AssessmentServiceTrait for AssessmentService {
    fn progress(&self, user_id: &str) -> Result<AssessmentProgress> {
        let latest = self.repository.latest_for_user(user_id)?;
        Ok(self.progress_of(latest.as_ref()))
    }

    async fn submit_step(
        &self,
        user_id: &str,
        step_index: usize,
        answers: HashMap<String, i32>,
    ) -> Result<AssessmentProgress> {
        validate_step_answers(&self.plan, step_index, &answers)?;

        let open = self.open_attempt(user_id)?;
        let mut assessment = match open {
            Some(assessment) => assessment,
            None if step_index == 0 => Assessment::new(user_id),
            None => {
                return Err(ValidationError::InvalidInput(
                    "No assessment in progress. Please start from the first step.".to_string(),
                )
                .into());
            }
        };

        let category = self
            .plan
            .category_at(step_index)
            .ok_or_else(|| ValidationError::InvalidInput("Unknown assessment step".to_string()))?;
        for key in self.plan.question_keys(category) {
            if let Some(value) = answers.get(&key) {
                assessment.answers.insert(key, *value);
            }
        }
        assessment.updated_at = Utc::now();

        debug!(
            "Assessment step {} recorded for user {} ({} answers total)",
            step_index + 1,
            user_id,
            assessment.answers.len()
        );

        let saved = if self.repository.latest_for_user(user_id)?.map(|a| a.id)
            == Some(assessment.id.clone())
        {
            self.repository.update(assessment).await?
        } else {
            self.repository.insert(assessment).await?
        };
        Ok(self.progress_of(Some(&saved)))
    }

    async fn finalize(&self, user_id: &str) -> Result<AssessmentResult> {
        let mut assessment = self.open_attempt(user_id)?.ok_or_else(|| {
            ValidationError::InvalidInput(
                "It seems that your last assessment was incomplete. Please redo the assessment to receive accurate results.".to_string(),
            )
        })?;

        let (total_percent, band, category_scores) = score(&self.plan, &assessment.answers)?;
        assessment.total_score = Some(total_percent);
        assessment.band = Some(band);
        assessment.category_scores = category_scores;
        assessment.submitted_at = Some(Utc::now());
        assessment.updated_at = Utc::now();

        let saved = self.repository.update(assessment).await?;
        Ok(build_result(&self.plan, &saved))
    }

    fn latest_result(&self, user_id: &str) -> Result<Option<AssessmentResult>> {
        Ok(self
            .repository
            .latest_finalized_for_user(user_id)?
            .map(|assessment| build_result(&self.plan, &assessment)))
    }
}
