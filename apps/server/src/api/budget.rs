use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use primekit_core::budget::{FutureBudgetPhase, FutureBudgetPhaseInput};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_future_budget(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<FutureBudgetPhase>>> {
    Ok(Json(state.budget_service.get_phases(&user.id)?))
}

async fn save_future_budget(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(inputs): Json<Vec<FutureBudgetPhaseInput>>,
) -> ApiResult<Json<Vec<FutureBudgetPhase>>> {
    let phases = state.budget_service.save_phases(&user.id, inputs).await?;
    Ok(Json(phases))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/future-budget",
        get(get_future_budget).put(save_future_budget),
    )
}
