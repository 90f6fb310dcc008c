//! Service for the progress tracker page.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use log::info;
use rust_decimal::Decimal;

use crate::budget::BudgetRepositoryTrait;
use crate::errors::{Result, ValidationError};
use crate::layers::LayersRepositoryTrait;
use crate::planning::PlanningRepositoryTrait;
use crate::records::RecordsRepositoryTrait;
use crate::summary::SummaryServiceTrait;
use crate::tracker::{NetWorthSnapshot, SnapshotInput, TrackerRepositoryTrait, TrackerStatus};

#[async_trait]
pub trait TrackerServiceTrait: Send + Sync {
    fn status(&self, user_id: &str) -> Result<TrackerStatus>;
    fn snapshots(&self, user_id: &str) -> Result<Vec<NetWorthSnapshot>>;
    async fn save_snapshot(&self, user_id: &str, input: SnapshotInput) -> Result<NetWorthSnapshot>;
    async fn reset(&self, user_id: &str) -> Result<()>;
}

/// Reads across every planner section to report completion, and captures
/// net worth snapshots from the live summary.
pub struct TrackerService {
    repository: Arc<dyn TrackerRepositoryTrait>,
    summary_service: Arc<dyn SummaryServiceTrait>,
    records_repository: Arc<dyn RecordsRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    layers_repository: Arc<dyn LayersRepositoryTrait>,
    planning_repository: Arc<dyn PlanningRepositoryTrait>,
}

impl TrackerService {
    pub fn new(
        repository: Arc<dyn TrackerRepositoryTrait>,
        summary_service: Arc<dyn SummaryServiceTrait>,
        records_repository: Arc<dyn RecordsRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        layers_repository: Arc<dyn LayersRepositoryTrait>,
        planning_repository: Arc<dyn PlanningRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            summary_service,
            records_repository,
            budget_repository,
            layers_repository,
            planning_repository,
        }
    }
}

#[async_trait]
impl TrackerServiceTrait for TrackerService {
    fn status(&self, user_id: &str) -> Result<TrackerStatus> {
        let summary = self.summary_service.calculator_summary(user_id)?;
        let status = TrackerStatus {
            life_expectancy: self
                .planning_repository
                .latest_life_expectancy(user_id)?
                .is_some(),
            assets: summary.total_assets > Decimal::ZERO,
            liabilities: summary.total_liabilities > Decimal::ZERO,
            income: summary.annual_income > Decimal::ZERO,
            expenses: summary.annual_expenses > Decimal::ZERO,
            subscriptions: summary.annual_subscriptions > Decimal::ZERO,
            future_budget: !self.budget_repository.phases_for_user(user_id)?.is_empty(),
            epic_experiences: !self.records_repository.epics_for_user(user_id)?.is_empty(),
            income_layers: !self
                .layers_repository
                .income_layers_for_user(user_id)?
                .is_empty(),
            spending_allocation: !self
                .layers_repository
                .spending_allocations_for_user(user_id)?
                .is_empty(),
            summary: summary.net_worth != Decimal::ZERO,
            ..Default::default()
        };
        Ok(status.tallied())
    }

    fn snapshots(&self, user_id: &str) -> Result<Vec<NetWorthSnapshot>> {
        self.repository.snapshots_for_user(user_id)
    }

    async fn save_snapshot(&self, user_id: &str, input: SnapshotInput) -> Result<NetWorthSnapshot> {
        let now = Utc::now();
        let year = input.year.unwrap_or_else(|| now.year());
        let month = input.month.unwrap_or_else(|| now.month());
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidInput(format!(
                "Month must be between 1 and 12, got {month}"
            ))
            .into());
        }
        let summary = self.summary_service.calculator_summary(user_id)?;
        let snapshot = NetWorthSnapshot::new(
            user_id,
            year,
            month,
            summary.total_assets,
            summary.total_liabilities,
            summary.net_worth,
            input.notes,
        );
        self.repository.upsert_snapshot(snapshot).await
    }

    async fn reset(&self, user_id: &str) -> Result<()> {
        info!("Resetting planner data for user {}", user_id);
        self.repository.reset_user_data(user_id).await
    }
}
