pub mod dashboard;
pub mod extract;
pub mod workbook;

pub use dashboard::{build_dashboard, CategoryPanel, SpreadsheetDashboard};
pub use extract::{extract_items, find_sheet, parse_money, ExtractedItem};
pub use workbook::{read_csv_sheet, workbook_from_csv_files, Sheet, Workbook};
