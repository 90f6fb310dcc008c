use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use primekit_core::layers::{
    IncomeLayer, IncomeLayerInput, SpendingAllocation, SpendingAllocationInput,
};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_income_layers(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<IncomeLayer>>> {
    Ok(Json(state.layers_service.get_income_layers(&user.id)?))
}

async fn save_income_layers(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(inputs): Json<Vec<IncomeLayerInput>>,
) -> ApiResult<Json<Vec<IncomeLayer>>> {
    let layers = state
        .layers_service
        .save_income_layers(&user.id, inputs)
        .await?;
    Ok(Json(layers))
}

async fn get_spending_allocations(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<SpendingAllocation>>> {
    Ok(Json(
        state.layers_service.get_spending_allocations(&user.id)?,
    ))
}

async fn save_spending_allocations(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(inputs): Json<Vec<SpendingAllocationInput>>,
) -> ApiResult<Json<Vec<SpendingAllocation>>> {
    let allocations = state
        .layers_service
        .save_spending_allocations(&user.id, inputs)
        .await?;
    Ok(Json(allocations))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/income-layers",
            get(get_income_layers).put(save_income_layers),
        )
        .route(
            "/spending-allocation",
            get(get_spending_allocations).put(save_spending_allocations),
        )
}
