use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use primekit_core::errors::{DatabaseError, Error as CoreError};

use crate::auth::AuthError;

/// Message returned for any 5xx so internals never leak to clients. The
/// real cause goes to the logs.
const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Internal(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Core(err) => core_error_response(err),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE.to_string())
            }
            ApiError::Anyhow(err) => {
                tracing::error!("Unhandled error: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE.to_string())
            }
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

fn core_error_response(err: CoreError) -> (StatusCode, String) {
    match err {
        CoreError::Validation(inner) => (StatusCode::UNPROCESSABLE_ENTITY, inner.to_string()),
        CoreError::Calculation(inner) => (StatusCode::UNPROCESSABLE_ENTITY, inner.to_string()),
        CoreError::Import(inner) => (StatusCode::UNPROCESSABLE_ENTITY, inner.to_string()),
        CoreError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg),
        CoreError::Database(DatabaseError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
        CoreError::Database(DatabaseError::UniqueViolation(msg)) => (StatusCode::CONFLICT, msg),
        other => {
            tracing::error!("Unhandled error: {other:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE.to_string())
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => ApiError::Unauthorized("Unauthorized".to_string()),
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}
