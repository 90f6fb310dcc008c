//! Sheet detection and row extraction.
//!
//! Real household spreadsheets are messy: titles above the table, dollar
//! signs in headers, total rows at the bottom. Extraction probes the first
//! few rows for a header, then reads label/value pairs and quietly skips
//! anything that is not a data row.

use rust_decimal::Decimal;

use crate::spreadsheet::workbook::{Sheet, Workbook};

pub const ASSET_KEYWORDS: &[&str] = &["asset"];
pub const LIABILITY_KEYWORDS: &[&str] = &["liab", "debt", "loan", "mortgage"];
pub const EXPENSE_KEYWORDS: &[&str] = &["expense", "spending"];
pub const SUBSCRIPTION_KEYWORDS: &[&str] = &["subs", "subscription", "services"];
pub const INCOME_KEYWORDS: &[&str] = &["income", "salary", "earnings"];
pub const EPIC_KEYWORDS: &[&str] = &["epic"];

const VALUE_HEADER_HINTS: &[&str] = &["$", "value", "amount", "balance"];
const HEADER_PROBE_ROWS: usize = 5;

/// First sheet whose name contains any of the keywords, case-insensitive.
pub fn find_sheet<'a>(workbook: &'a Workbook, keywords: &[&str]) -> Option<&'a Sheet> {
    workbook.sheets.iter().find(|sheet| {
        let name = sheet.name.to_lowercase();
        keywords.iter().any(|keyword| name.contains(keyword))
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedItem {
    pub label: String,
    pub value: Decimal,
    /// Text of the frequency column, when the sheet has one.
    pub frequency: Option<String>,
}

struct SheetLayout {
    data_start: usize,
    value_col: usize,
    label_col: usize,
    frequency_col: Option<usize>,
}

fn locate_layout(sheet: &Sheet) -> SheetLayout {
    for (row_index, row) in sheet.rows.iter().take(HEADER_PROBE_ROWS).enumerate() {
        let value_col = row.iter().position(|cell| {
            let lowered = cell.to_lowercase();
            VALUE_HEADER_HINTS.iter().any(|hint| lowered.contains(hint))
        });
        if let Some(value_col) = value_col {
            let frequency_col = row
                .iter()
                .position(|cell| cell.to_lowercase().contains("freq"));
            let label_col = (0..row.len())
                .find(|col| *col != value_col && Some(*col) != frequency_col)
                .unwrap_or(0);
            return SheetLayout {
                data_start: row_index + 1,
                value_col,
                label_col,
                frequency_col,
            };
        }
    }
    // No recognisable header: labels in the first column, values in the last.
    let width = sheet.rows.iter().map(|row| row.len()).max().unwrap_or(0);
    SheetLayout {
        data_start: 0,
        value_col: width.saturating_sub(1),
        label_col: 0,
        frequency_col: None,
    }
}

/// Read the data rows of a sheet as labelled amounts.
///
/// Skipped rows: blank label or value, labels starting with "total", values
/// that do not parse as a number.
pub fn extract_items(sheet: &Sheet) -> Vec<ExtractedItem> {
    let layout = locate_layout(sheet);
    let mut items = Vec::new();
    for row in sheet.rows.iter().skip(layout.data_start) {
        let label = row
            .get(layout.label_col)
            .map(|cell| cell.trim())
            .unwrap_or_default();
        let raw_value = row
            .get(layout.value_col)
            .map(|cell| cell.trim())
            .unwrap_or_default();
        if label.is_empty() || raw_value.is_empty() {
            continue;
        }
        if label.to_lowercase().starts_with("total") {
            continue;
        }
        let Some(value) = parse_money(raw_value) else {
            continue;
        };
        let frequency = layout
            .frequency_col
            .and_then(|col| row.get(col))
            .map(|cell| cell.trim().to_string())
            .filter(|cell| !cell.is_empty());
        items.push(ExtractedItem {
            label: label.to_string(),
            value,
            frequency,
        });
    }
    items
}

/// Parse a cell as money: currency symbols, thousands separators and
/// surrounding whitespace are ignored, parentheses mean negative.
pub fn parse_money(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let (body, negative) = match trimmed.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => (inner, true),
        None => (trimmed, false),
    };
    let cleaned: String = body
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let value: Decimal = cleaned.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
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

    // ==================== Sheet Detection ====================

    #[test]
    fn test_find_sheet_matches_keyword_anywhere_in_name() {
        let workbook = Workbook {
            sheets: vec![
                sheet("Overview", &[]),
                sheet("My Liabilities 2026", &[]),
                sheet("Household Expenses", &[]),
            ],
        };
        assert_eq!(
            find_sheet(&workbook, LIABILITY_KEYWORDS).map(|s| s.name.as_str()),
            Some("My Liabilities 2026")
        );
        assert_eq!(
            find_sheet(&workbook, EXPENSE_KEYWORDS).map(|s| s.name.as_str()),
            Some("Household Expenses")
        );
        assert!(find_sheet(&workbook, EPIC_KEYWORDS).is_none());
    }

    #[test]
    fn test_find_sheet_takes_first_match() {
        let workbook = Workbook {
            sheets: vec![sheet("Loans", &[]), sheet("Debts", &[])],
        };
        assert_eq!(
            find_sheet(&workbook, LIABILITY_KEYWORDS).map(|s| s.name.as_str()),
            Some("Loans")
        );
    }

    // ==================== Extraction ====================

    #[test]
    fn test_extracts_below_detected_header() {
        let sheet = sheet(
            "Assets",
            &[
                &["Family wealth snapshot"],
                &["Asset", "Value ($)"],
                &["Home", "800,000"],
                &["Super", "$250000.50"],
                &["Total", "1050000.50"],
            ],
        );
        let items = extract_items(&sheet);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Home");
        assert_eq!(items[0].value, dec!(800000));
        assert_eq!(items[1].value, dec!(250000.50));
    }

    #[test]
    fn test_headerless_sheet_uses_first_and_last_columns() {
        let sheet = sheet(
            "income",
            &[&["Salary", "full time", "90000"], &["Dividends", "", "4000"]],
        );
        let items = extract_items(&sheet);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Salary");
        assert_eq!(items[0].value, dec!(90000));
    }

    #[test]
    fn test_skips_blank_and_unparseable_rows() {
        let sheet = sheet(
            "Expenses",
            &[
                &["Item", "Amount"],
                &["", "100"],
                &["Groceries", ""],
                &["Rent", "tbc"],
                &["Power", "2400"],
            ],
        );
        let items = extract_items(&sheet);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Power");
    }

    #[test]
    fn test_reads_frequency_column_when_present() {
        let sheet = sheet(
            "Epic",
            &[
                &["Experience", "Frequency", "Amount"],
                &["Japan trip", "Once only", "12000"],
                &["Ski season", "Annually", "4000"],
                &["Road trip", "", "3000"],
            ],
        );
        let items = extract_items(&sheet);
        assert_eq!(items[0].frequency.as_deref(), Some("Once only"));
        assert_eq!(items[1].frequency.as_deref(), Some("Annually"));
        assert_eq!(items[2].frequency, None);
    }

    #[test]
    fn test_value_column_not_first_shifts_label_column() {
        let sheet = sheet(
            "Liabilities",
            &[&["Balance", "Loan"], &["300000", "Mortgage"]],
        );
        let items = extract_items(&sheet);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Mortgage");
        assert_eq!(items[0].value, dec!(300000));
    }

    // ==================== Money Parsing ====================

    #[test]
    fn test_parse_money_variants() {
        assert_eq!(parse_money("$1,200.50"), Some(dec!(1200.50)));
        assert_eq!(parse_money(" 300 "), Some(dec!(300)));
        assert_eq!(parse_money("(450)"), Some(dec!(-450)));
        assert_eq!(parse_money("-80"), Some(dec!(-80)));
        assert_eq!(parse_money("n/a"), None);
        assert_eq!(parse_money(""), None);
    }
}
