use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Extension, Json, Router};

use primekit_core::tracker::{NetWorthSnapshot, SnapshotInput, TrackerStatus};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_status(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<TrackerStatus>> {
    Ok(Json(state.tracker_service.status(&user.id)?))
}

async fn list_snapshots(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<NetWorthSnapshot>>> {
    Ok(Json(state.tracker_service.snapshots(&user.id)?))
}

async fn save_snapshot(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(input): Json<SnapshotInput>,
) -> ApiResult<Json<NetWorthSnapshot>> {
    let snapshot = state.tracker_service.save_snapshot(&user.id, input).await?;
    Ok(Json(snapshot))
}

async fn reset(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.tracker_service.reset(&user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tracker", get(get_status).delete(reset))
        .route(
            "/tracker/snapshots",
            get(list_snapshots).post(save_snapshot),
        )
}
