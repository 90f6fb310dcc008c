use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};

use primekit_core::assessment::{AssessmentProgress, AssessmentResult};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_progress(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<AssessmentProgress>> {
    Ok(Json(state.assessment_service.progress(&user.id)?))
}

async fn submit_step(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(step_index): Path<usize>,
    Json(answers): Json<HashMap<String, i32>>,
) -> ApiResult<Json<AssessmentProgress>> {
    let progress = state
        .assessment_service
        .submit_step(&user.id, step_index, answers)
        .await?;
    Ok(Json(progress))
}

async fn finalize(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<AssessmentResult>> {
    let result = state.assessment_service.finalize(&user.id).await?;
    Ok(Json(result))
}

async fn latest_result(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Option<AssessmentResult>>> {
    Ok(Json(state.assessment_service.latest_result(&user.id)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assessment", get(get_progress))
        .route("/assessment/steps/{index}", post(submit_step))
        .route("/assessment/submit", post(finalize))
        .route("/assessment/result", get(latest_result))
}
