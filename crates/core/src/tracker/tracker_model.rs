//! Progress tracker models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which sections of the planner the user has filled in.
///
/// Section flags come from the live data, not from anything stored: totals
/// for the calculator sections, row presence for the worksheet sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStatus {
    pub life_expectancy: bool,
    pub assets: bool,
    pub liabilities: bool,
    pub income: bool,
    pub expenses: bool,
    pub subscriptions: bool,
    pub future_budget: bool,
    pub epic_experiences: bool,
    pub income_layers: bool,
    pub spending_allocation: bool,
    pub summary: bool,
    pub completed_count: u32,
    pub total_count: u32,
}

impl TrackerStatus {
    /// Fill in the counters from the section flags.
    pub fn tallied(mut self) -> TrackerStatus {
        let flags = [
            self.life_expectancy,
            self.assets,
            self.liabilities,
            self.income,
            self.expenses,
            self.subscriptions,
            self.future_budget,
            self.epic_experiences,
            self.income_layers,
            self.spending_allocation,
            self.summary,
        ];
        self.completed_count = flags.iter().filter(|flag| **flag).count() as u32;
        self.total_count = flags.len() as u32;
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInput {
    /// Defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
    /// 1-12, defaults to the current month.
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A point-in-time capture of the balance sheet, one per user per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshot {
    pub id: String,
    pub user_id: String,
    pub year: i32,
    pub month: u32,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NetWorthSnapshot {
    pub fn new(
        user_id: &str,
        year: i32,
        month: u32,
        total_assets: Decimal,
        total_liabilities: Decimal,
        net_worth: Decimal,
        notes: Option<String>,
    ) -> NetWorthSnapshot {
        let now = Utc::now();
        NetWorthSnapshot {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            year,
            month,
            total_assets,
            total_liabilities,
            net_worth,
            notes: notes.filter(|n| !n.trim().is_empty()),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tally_counts_completed_sections() {
        let status = TrackerStatus {
            assets: true,
            income: true,
            summary: true,
            ..Default::default()
        }
        .tallied();
        assert_eq!(status.completed_count, 3);
        assert_eq!(status.total_count, 11);
    }

    #[test]
    fn test_blank_notes_dropped() {
        let snapshot = NetWorthSnapshot::new(
            "u1",
            2026,
            3,
            dec!(100),
            dec!(40),
            dec!(60),
            Some("  ".to_string()),
        );
        assert_eq!(snapshot.notes, None);
    }
}
