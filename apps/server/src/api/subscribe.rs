use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};

use primekit_core::users::Subscriber;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub name: Option<String>,
}

/// Signing up twice returns the existing row, still 201.
async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubscribeRequest>,
) -> ApiResult<(StatusCode, Json<Subscriber>)> {
    let name = payload.name.unwrap_or_else(|| "there".to_string());
    let subscriber = state
        .subscriber_service
        .subscribe(&payload.email, &name)
        .await?;
    Ok((StatusCode::CREATED, Json(subscriber)))
}

pub fn router() -> Router<Arc<AppState>> {
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(GlobalKeyExtractor)
            .per_second(20)
            .burst_size(5)
            .finish()
            .unwrap(),
    );

    Router::new()
        .route("/subscribe", post(subscribe))
        .layer(GovernorLayer::new(governor_config))
}
