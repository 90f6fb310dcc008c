use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};

use primekit_core::users::{NewUser, User};

use crate::{
    auth::{AuthError, CurrentUser},
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub requires_auth: bool,
    pub token_ttl_secs: u64,
}

fn validate_registration(payload: &RegisterRequest) -> Result<(), ApiError> {
    let name = payload.name.trim();
    if name.len() < 2 || name.len() > 150 {
        return Err(ApiError::Validation(
            "Name must be between 2 and 150 characters.".to_string(),
        ));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters long.".to_string(),
        ));
    }
    let has_letter = payload.password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = payload.password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(ApiError::Validation(
            "Password must include both letters and numbers.".to_string(),
        ));
    }
    Ok(())
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    validate_registration(&payload)?;
    let password_hash = state.auth.hash_password(&payload.password)?;
    let user = state
        .users_service
        .register(NewUser {
            name: payload.name,
            email: payload.email,
            password_hash,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    // Unknown email and wrong password answer identically.
    let user = state
        .users_service
        .find_by_email(&payload.email)
        .map_err(|e| AuthError::Internal(e.to_string()))?
        .ok_or(AuthError::InvalidCredentials)?;
    state
        .auth
        .verify_password(&payload.password, &user.password_hash)?;
    let token = state.auth.issue_token(&user.id)?;
    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.expires_in().as_secs(),
    }))
}

async fn auth_status(State(state): State<Arc<AppState>>) -> Json<AuthStatusResponse> {
    Json(AuthStatusResponse {
        requires_auth: true,
        token_ttl_secs: state.auth.expires_in().as_secs(),
    })
}

async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<User> {
    Json(user)
}

pub fn public_router() -> Router<Arc<AppState>> {
    // Register and login share one small global rate limit; status is
    // unthrottled.
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(GlobalKeyExtractor)
            .per_second(12)
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .layer(GovernorLayer::new(governor_config))
        .route("/auth/status", get(auth_status))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}
