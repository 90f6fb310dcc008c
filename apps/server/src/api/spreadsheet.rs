use std::sync::Arc;

use axum::{extract::Multipart, routing::post, Json, Router};

use primekit_core::spreadsheet::{build_dashboard, workbook_from_csv_files, SpreadsheetDashboard};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// One CSV file per sheet; the uploaded file name becomes the sheet name.
async fn import_spreadsheet(mut multipart: Multipart) -> ApiResult<Json<SpreadsheetDashboard>> {
    let mut sheets: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field
            .file_name()
            .or(field.name())
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("sheet{}", sheets.len() + 1));
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file content: {}", e)))?
            .to_vec();
        if bytes.is_empty() {
            continue;
        }
        sheets.push((name, bytes));
    }

    let workbook = workbook_from_csv_files(&sheets)?;
    let dashboard = build_dashboard(&workbook)?;
    Ok(Json(dashboard))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/spreadsheet/import", post(import_spreadsheet))
}
