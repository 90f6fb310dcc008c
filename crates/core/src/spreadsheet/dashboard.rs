//! Dashboard built from an uploaded workbook.
//!
//! The anonymous cousin of the web summary: same aggregation engine, but
//! fed from spreadsheet sheets instead of saved rows, and nothing is
//! persisted. Categories whose sheet is missing simply come back empty.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::constants::{DEFAULT_EPIC_HORIZON_YEARS, DISPLAY_DECIMAL_PRECISION};
use crate::errors::{ImportError, Result};
use crate::records::{FinancialRecord, RecordCategory};
use crate::spreadsheet::extract::{
    extract_items, find_sheet, parse_money, ASSET_KEYWORDS, EPIC_KEYWORDS, EXPENSE_KEYWORDS,
    INCOME_KEYWORDS, LIABILITY_KEYWORDS, SUBSCRIPTION_KEYWORDS,
};
use crate::spreadsheet::workbook::Workbook;
use crate::summary::{
    aggregate, amortize_epics, net_position, sorted_breakdown, BreakdownSlice, Frequency,
};

/// One category's slice of the dashboard: which sheet it came from, the
/// annual total and the per-item series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPanel {
    pub sheet: Option<String>,
    pub total: Decimal,
    pub items: Vec<BreakdownSlice>,
}

impl CategoryPanel {
    fn empty() -> CategoryPanel {
        CategoryPanel {
            sheet: None,
            total: Decimal::ZERO,
            items: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetDashboard {
    pub sheet_names: Vec<String>,
    pub assets: CategoryPanel,
    pub liabilities: CategoryPanel,
    pub income: CategoryPanel,
    pub expenses: CategoryPanel,
    pub subscriptions: CategoryPanel,
    /// Items are the sheet amounts; the total is the amortized annual cost.
    pub epic_experiences: CategoryPanel,
    pub net_worth: Decimal,
    pub total_annual_expenses: Decimal,
    pub annual_surplus: Decimal,
    pub monthly_surplus: Decimal,
    pub epic_horizon_years: u32,
}

/// Run the workbook through the aggregation engine.
pub fn build_dashboard(workbook: &Workbook) -> Result<SpreadsheetDashboard> {
    if workbook.sheets.is_empty() {
        return Err(ImportError::EmptyWorkbook.into());
    }
    let horizon = workbook_horizon(workbook);

    let (assets, asset_total) = category_panel(workbook, ASSET_KEYWORDS, RecordCategory::Asset);
    let (liabilities, liability_total) =
        category_panel(workbook, LIABILITY_KEYWORDS, RecordCategory::Liability);
    let (income, income_total) = category_panel(workbook, INCOME_KEYWORDS, RecordCategory::Income);
    let (expenses, expense_total) =
        category_panel(workbook, EXPENSE_KEYWORDS, RecordCategory::Expense);
    let (subscriptions, subscription_total) =
        category_panel(workbook, SUBSCRIPTION_KEYWORDS, RecordCategory::Subscription);
    let (epic_experiences, epic_annual) = epic_panel(workbook, horizon);

    let total_annual_expenses = expense_total + subscription_total + epic_annual;
    let position = net_position(asset_total, liability_total, income_total, total_annual_expenses);

    Ok(SpreadsheetDashboard {
        sheet_names: workbook.sheet_names(),
        assets,
        liabilities,
        income,
        expenses,
        subscriptions,
        epic_experiences,
        net_worth: rounded(position.net_worth),
        total_annual_expenses: rounded(total_annual_expenses),
        annual_surplus: rounded(position.annual_surplus),
        monthly_surplus: rounded(position.monthly_surplus),
        epic_horizon_years: horizon,
    })
}

/// Extract one ordinary category. Workbook values are already annual, so
/// every record carries `Frequency::Annually`.
fn category_panel(
    workbook: &Workbook,
    keywords: &[&str],
    category: RecordCategory,
) -> (CategoryPanel, Decimal) {
    let Some(sheet) = find_sheet(workbook, keywords) else {
        return (CategoryPanel::empty(), Decimal::ZERO);
    };
    let records: Vec<FinancialRecord> = extract_items(sheet)
        .into_iter()
        .map(|item| FinancialRecord {
            category,
            label: item.label,
            amount: item.value,
            frequency: Frequency::Annually,
            include: true,
        })
        .collect();
    let totals = aggregate(&records);
    let panel = CategoryPanel {
        sheet: Some(sheet.name.clone()),
        total: rounded(totals.total),
        items: rounded_slices(sorted_breakdown(totals.breakdown)),
    };
    (panel, totals.total)
}

/// Extract the epic experiences sheet. A frequency column is honoured when
/// present; otherwise every row is a one-off.
fn epic_panel(workbook: &Workbook, horizon_years: u32) -> (CategoryPanel, Decimal) {
    let Some(sheet) = find_sheet(workbook, EPIC_KEYWORDS) else {
        return (CategoryPanel::empty(), Decimal::ZERO);
    };
    let items = extract_items(sheet);
    let records: Vec<FinancialRecord> = items
        .iter()
        .map(|item| FinancialRecord {
            category: RecordCategory::Epic,
            label: item.label.clone(),
            amount: item.value,
            frequency: item
                .frequency
                .as_deref()
                .map(Frequency::from_label)
                .unwrap_or(Frequency::Once),
            include: true,
        })
        .collect();
    let annual = amortize_epics(&records, horizon_years);
    let panel = CategoryPanel {
        sheet: Some(sheet.name.clone()),
        total: rounded(annual),
        items: items
            .into_iter()
            .map(|item| BreakdownSlice {
                label: item.label,
                value: rounded(item.value),
            })
            .collect(),
    };
    (panel, annual)
}

/// Amortization horizon for one-off epics, overridable from a settings
/// sheet row labelled "horizon".
fn workbook_horizon(workbook: &Workbook) -> u32 {
    let settings = workbook.sheets.iter().find(|sheet| {
        let name = sheet.name.to_lowercase();
        name.contains("setting") || name.contains("config")
    });
    let Some(sheet) = settings else {
        return DEFAULT_EPIC_HORIZON_YEARS;
    };
    sheet
        .rows
        .iter()
        .find(|row| {
            row.first()
                .map(|cell| cell.to_lowercase().contains("horizon"))
                .unwrap_or(false)
        })
        .and_then(|row| row.iter().skip(1).find_map(|cell| parse_money(cell)))
        .and_then(|value| value.to_u32())
        .filter(|years| *years > 0)
        .unwrap_or(DEFAULT_EPIC_HORIZON_YEARS)
}

fn rounded(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DECIMAL_PRECISION)
}

fn rounded_slices(slices: Vec<BreakdownSlice>) -> Vec<BreakdownSlice> {
    slices
        .into_iter()
        .map(|slice| BreakdownSlice {
            label: slice.label,
            value: rounded(slice.value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::workbook::Sheet;
    use rust_decimal_macros::dec;

    fn sheet(name: &str, rows: &[&[&str]]) -> Sheet {
        Sheet {
            name: name.to_string(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }

    fn household_workbook() -> Workbook {
        Workbook {
            sheets: vec![
                sheet(
                    "Assets",
                    &[
                        &["Asset", "Value"],
                        &["Home", "800000"],
                        &["Super", "250000"],
                        &["Total", "1050000"],
                    ],
                ),
                sheet(
                    "Liabilities",
                    &[&["Loan", "Balance"], &["Mortgage", "300000"]],
                ),
                sheet(
                    "Income",
                    &[
                        &["Source", "Amount"],
                        &["Salary", "90000"],
                        &["Dividends", "4000"],
                    ],
                ),
                sheet(
                    "Expenses",
                    &[
                        &["Item", "Amount"],
                        &["Groceries", "15600"],
                        &["Rent", "26000"],
                    ],
                ),
                sheet("Subscriptions", &[&["Name", "Amount"], &["Streaming", "1200"]]),
                sheet(
                    "Epic",
                    &[
                        &["Experience", "Frequency", "Amount"],
                        &["Japan trip", "Once only", "12000"],
                        &["Ski season", "Annually", "4000"],
                    ],
                ),
            ],
        }
    }

    #[test]
    fn test_dashboard_totals() {
        let dashboard = build_dashboard(&household_workbook()).unwrap();

        assert_eq!(dashboard.assets.total, dec!(1050000.00));
        assert_eq!(dashboard.liabilities.total, dec!(300000.00));
        assert_eq!(dashboard.net_worth, dec!(750000.00));
        assert_eq!(dashboard.income.total, dec!(94000.00));

        // Epics: 4000 recurring plus 12000 spread over ten years.
        assert_eq!(dashboard.epic_experiences.total, dec!(5200.00));
        assert_eq!(dashboard.total_annual_expenses, dec!(48000.00));
        assert_eq!(dashboard.annual_surplus, dec!(46000.00));
        assert_eq!(dashboard.monthly_surplus, dec!(3833.33));
        assert_eq!(dashboard.epic_horizon_years, 10);
    }

    #[test]
    fn test_dashboard_panels_carry_sheet_and_items() {
        let dashboard = build_dashboard(&household_workbook()).unwrap();
        assert_eq!(dashboard.assets.sheet.as_deref(), Some("Assets"));
        let labels: Vec<&str> = dashboard
            .assets
            .items
            .iter()
            .map(|i| i.label.as_str())
            .collect();
        // Sorted by label, the total row dropped.
        assert_eq!(labels, vec!["Home", "Super"]);
        assert_eq!(dashboard.sheet_names.len(), 6);
    }

    #[test]
    fn test_missing_sheets_leave_empty_panels() {
        let workbook = Workbook {
            sheets: vec![sheet("Assets", &[&["Asset", "Value"], &["Home", "500000"]])],
        };
        let dashboard = build_dashboard(&workbook).unwrap();
        assert_eq!(dashboard.assets.total, dec!(500000.00));
        assert_eq!(dashboard.income.sheet, None);
        assert_eq!(dashboard.income.total, dec!(0));
        assert_eq!(dashboard.net_worth, dec!(500000.00));
        // No income and no expenses: nothing to overspend.
        assert_eq!(dashboard.annual_surplus, dec!(0.00));
    }

    #[test]
    fn test_deficit_is_reported_not_clamped() {
        let workbook = Workbook {
            sheets: vec![
                sheet("Income", &[&["Source", "Amount"], &["Salary", "40000"]]),
                sheet("Expenses", &[&["Item", "Amount"], &["Living", "52000"]]),
            ],
        };
        let dashboard = build_dashboard(&workbook).unwrap();
        assert_eq!(dashboard.annual_surplus, dec!(-12000.00));
        assert_eq!(dashboard.monthly_surplus, dec!(-1000.00));
    }

    #[test]
    fn test_settings_sheet_overrides_horizon() {
        let mut workbook = household_workbook();
        workbook.sheets.push(sheet(
            "Settings",
            &[&["Epic horizon (years)", "5"], &["Currency", "AUD"]],
        ));
        let dashboard = build_dashboard(&workbook).unwrap();
        assert_eq!(dashboard.epic_horizon_years, 5);
        // 4000 recurring plus 12000 over five years.
        assert_eq!(dashboard.epic_experiences.total, dec!(6400.00));
        assert_eq!(dashboard.annual_surplus, dec!(44800.00));
    }

    #[test]
    fn test_empty_workbook_is_an_error() {
        assert!(build_dashboard(&Workbook::default()).is_err());
    }
}
