//! Tabular workbook model and the CSV reader.
//!
//! The import pipeline works on plain string grids so the file format stays
//! at the edge. The built-in reader handles CSV, one file per sheet; a single
//! uploaded CSV is a one-sheet workbook named after the file.

use crate::errors::{ImportError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }
}

/// Parse one CSV buffer into a sheet. Rows keep their raw cell text; ragged
/// rows are allowed.
pub fn read_csv_sheet(name: &str, bytes: &[u8]) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ImportError::SheetRead {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(Sheet {
        name: sheet_name(name),
        rows,
    })
}

/// Assemble uploaded CSV files into a workbook, one sheet per file.
pub fn workbook_from_csv_files(files: &[(String, Vec<u8>)]) -> Result<Workbook> {
    let mut sheets = Vec::with_capacity(files.len());
    for (name, bytes) in files {
        sheets.push(read_csv_sheet(name, bytes)?);
    }
    if sheets.is_empty() {
        return Err(ImportError::EmptyWorkbook.into());
    }
    Ok(Workbook { sheets })
}

/// Sheet name from an uploaded file name: strip any path and the extension.
fn sheet_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    match base.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_ragged_csv() {
        let csv = b"Asset,Value\nHome,800000\nSuper,250000,extra\n";
        let sheet = read_csv_sheet("Assets.csv", csv).unwrap();
        assert_eq!(sheet.name, "Assets");
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(sheet.rows[0], vec!["Asset", "Value"]);
        assert_eq!(sheet.rows[2].len(), 3);
    }

    #[test]
    fn test_sheet_name_strips_path_and_extension() {
        assert_eq!(sheet_name("uploads/My Expenses.csv"), "My Expenses");
        assert_eq!(sheet_name("income"), "income");
        assert_eq!(sheet_name(".csv"), ".csv");
    }

    #[test]
    fn test_empty_upload_is_rejected() {
        assert!(workbook_from_csv_files(&[]).is_err());
    }

    #[test]
    fn test_multi_file_workbook_keeps_sheet_order() {
        let files = vec![
            ("assets.csv".to_string(), b"Home,800000\n".to_vec()),
            ("income.csv".to_string(), b"Salary,90000\n".to_vec()),
        ];
        let workbook = workbook_from_csv_files(&files).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["assets", "income"]);
    }
}
