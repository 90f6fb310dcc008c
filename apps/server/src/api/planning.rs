use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};

use primekit_core::planning::{
    DebtRow, DebtRowInput, EnoughEstimate, EnoughInput, LifeExpectancyEstimate,
    LifeExpectancyInput,
};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_debts(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<DebtRow>>> {
    Ok(Json(state.planning_service.get_debts(&user.id)?))
}

async fn save_debts(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(inputs): Json<Vec<DebtRowInput>>,
) -> ApiResult<Json<Vec<DebtRow>>> {
    let rows = state.planning_service.save_debts(&user.id, inputs).await?;
    Ok(Json(rows))
}

async fn latest_life_expectancy(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Option<LifeExpectancyEstimate>>> {
    Ok(Json(state.planning_service.latest_life_expectancy(&user.id)?))
}

async fn estimate_life_expectancy(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(input): Json<LifeExpectancyInput>,
) -> ApiResult<Json<LifeExpectancyEstimate>> {
    let estimate = state
        .planning_service
        .estimate_life_expectancy(&user.id, input)
        .await?;
    Ok(Json(estimate))
}

async fn get_enough_estimate(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Option<EnoughEstimate>>> {
    Ok(Json(state.planning_service.latest_enough_estimate(&user.id)?))
}

async fn save_enough_estimate(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(input): Json<EnoughInput>,
) -> ApiResult<Json<EnoughEstimate>> {
    let estimate = state
        .planning_service
        .save_enough_estimate(&user.id, input)
        .await?;
    Ok(Json(estimate))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debt-paydown", get(get_debts).put(save_debts))
        .route(
            "/life-expectancy",
            get(latest_life_expectancy).post(estimate_life_expectancy),
        )
        .route(
            "/enough-calculator",
            get(get_enough_estimate).put(save_enough_estimate),
        )
}
