use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use primekit_core::summary::CalculatorSummary;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<CalculatorSummary>> {
    Ok(Json(state.summary_service.calculator_summary(&user.id)?))
}

pub fn router() -> Router<Arc<AppState>> {
    // The dashboard renders the same aggregate the summary page does.
    Router::new()
        .route("/summary", get(get_summary))
        .route("/dashboard", get(get_summary))
}
