use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use primekit_core::records::{
    AssetRow, AssetRowInput, EpicRow, EpicRowInput, ExpenseRow, ExpenseRowInput, IncomeRow,
    IncomeRowInput, LiabilityRow, LiabilityRowInput, SubscriptionRow, SubscriptionRowInput,
};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_assets(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<AssetRow>>> {
    Ok(Json(state.records_service.get_assets(&user.id)?))
}

async fn save_assets(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(inputs): Json<Vec<AssetRowInput>>,
) -> ApiResult<Json<Vec<AssetRow>>> {
    let rows = state.records_service.save_assets(&user.id, inputs).await?;
    Ok(Json(rows))
}

async fn get_liabilities(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<LiabilityRow>>> {
    Ok(Json(state.records_service.get_liabilities(&user.id)?))
}

async fn save_liabilities(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(inputs): Json<Vec<LiabilityRowInput>>,
) -> ApiResult<Json<Vec<LiabilityRow>>> {
    let rows = state
        .records_service
        .save_liabilities(&user.id, inputs)
        .await?;
    Ok(Json(rows))
}

async fn get_income(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<IncomeRow>>> {
    Ok(Json(state.records_service.get_income(&user.id)?))
}

async fn save_income(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(inputs): Json<Vec<IncomeRowInput>>,
) -> ApiResult<Json<Vec<IncomeRow>>> {
    let rows = state.records_service.save_income(&user.id, inputs).await?;
    Ok(Json(rows))
}

async fn get_expenses(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<ExpenseRow>>> {
    Ok(Json(state.records_service.get_expenses(&user.id)?))
}

async fn save_expenses(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(inputs): Json<Vec<ExpenseRowInput>>,
) -> ApiResult<Json<Vec<ExpenseRow>>> {
    let rows = state
        .records_service
        .save_expenses(&user.id, inputs)
        .await?;
    Ok(Json(rows))
}

async fn get_subscriptions(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<SubscriptionRow>>> {
    Ok(Json(state.records_service.get_subscriptions(&user.id)?))
}

async fn save_subscriptions(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(inputs): Json<Vec<SubscriptionRowInput>>,
) -> ApiResult<Json<Vec<SubscriptionRow>>> {
    let rows = state
        .records_service
        .save_subscriptions(&user.id, inputs)
        .await?;
    Ok(Json(rows))
}

/// The epics page carries its amortisation horizon alongside the rows.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicPage {
    pub rows: Vec<EpicRow>,
    pub horizon_years: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicPageUpdate {
    pub rows: Vec<EpicRowInput>,
    #[serde(default)]
    pub horizon_years: Option<u32>,
}

async fn get_epics(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<EpicPage>> {
    let rows = state.records_service.get_epics(&user.id)?;
    let horizon_years = state.settings_service.epic_horizon_years(&user.id)?;
    Ok(Json(EpicPage {
        rows,
        horizon_years,
    }))
}

async fn save_epics(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<EpicPageUpdate>,
) -> ApiResult<Json<EpicPage>> {
    if let Some(years) = payload.horizon_years {
        state
            .settings_service
            .set_epic_horizon_years(&user.id, years)
            .await?;
    }
    let rows = state
        .records_service
        .save_epics(&user.id, payload.rows)
        .await?;
    let horizon_years = state.settings_service.epic_horizon_years(&user.id)?;
    Ok(Json(EpicPage {
        rows,
        horizon_years,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(get_assets).put(save_assets))
        .route("/liabilities", get(get_liabilities).put(save_liabilities))
        .route("/income", get(get_income).put(save_income))
        .route("/expenses", get(get_expenses).put(save_expenses))
        .route(
            "/subscriptions",
            get(get_subscriptions).put(save_subscriptions),
        )
        .route("/epics", get(get_epics).put(save_epics))
}
