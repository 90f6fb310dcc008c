//! The financial aggregation engine.
//!
//! Pure arithmetic over [`FinancialRecord`]s. Every surface that shows a
//! total (web summary, dashboard, tracker, spreadsheet import) goes through
//! these functions, so the numbers cannot drift between pages. Outputs
//! depend only on the input records, never on insertion order.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::constants::UNLABELLED_BREAKDOWN_KEY;
use crate::records::FinancialRecord;

/// Total plus per-label breakdown for one record category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryAggregate {
    pub total: Decimal,
    pub breakdown: HashMap<String, Decimal>,
}

/// Annualized value of a single record (amount times frequency factor).
pub fn annualized(record: &FinancialRecord) -> Decimal {
    record.amount * Decimal::from(record.frequency.annual_factor())
}

/// Sum the included records of one category into a total and a per-label
/// breakdown.
///
/// Labels are trimmed and title-cased before grouping, so "car insurance"
/// and "Car Insurance" land in the same slice; a blank label groups under
/// "Other". Excluded rows contribute to neither the total nor the breakdown.
pub fn aggregate(records: &[FinancialRecord]) -> CategoryAggregate {
    let mut result = CategoryAggregate::default();
    for record in records.iter().filter(|r| r.include) {
        let annual = annualized(record);
        *result
            .breakdown
            .entry(breakdown_label(&record.label))
            .or_insert(Decimal::ZERO) += annual;
        result.total += annual;
    }
    result
}

/// Normalize a record label into a breakdown key.
pub fn breakdown_label(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNLABELLED_BREAKDOWN_KEY.to_string();
    }
    title_case(trimmed)
}

/// Uppercase the first letter of each whitespace-separated word, lowercase
/// the rest. Collapses runs of whitespace to a single space.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Annual cost of the epic experiences list.
///
/// Recurring epics annualize like any other flow. One-off epics are spread
/// evenly over the amortization horizon; a zero horizon is treated as one
/// year so a one-off is never divided away.
pub fn amortize_epics(records: &[FinancialRecord], horizon_years: u32) -> Decimal {
    let mut recurring_annual = Decimal::ZERO;
    let mut one_off_total = Decimal::ZERO;
    for record in records.iter().filter(|r| r.include) {
        if record.frequency.is_one_off() {
            one_off_total += record.amount;
        } else {
            recurring_annual += annualized(record);
        }
    }
    recurring_annual + one_off_total / Decimal::from(horizon_years.max(1))
}

/// Net worth and surplus figures.
///
/// Both can legitimately be negative; nothing here clamps to zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetPosition {
    pub net_worth: Decimal,
    pub annual_surplus: Decimal,
    pub monthly_surplus: Decimal,
}

pub fn net_position(
    total_assets: Decimal,
    total_liabilities: Decimal,
    annual_income: Decimal,
    total_annual_expenses: Decimal,
) -> NetPosition {
    let annual_surplus = annual_income - total_annual_expenses;
    NetPosition {
        net_worth: total_assets - total_liabilities,
        annual_surplus,
        monthly_surplus: annual_surplus / Decimal::from(12),
    }
}
