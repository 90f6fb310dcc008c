use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

use primekit_server::{api::app_router, build_state, config::Config};

/// Stand up the full router against a throwaway database. The tempdir guard
/// goes back to the caller; it must outlive every request the test sends.
pub async fn build_test_router() -> (axum::Router, TempDir) {
    let tmp = tempdir().unwrap();
    std::env::set_var("PK_DB_PATH", tmp.path().join("test.db"));

    let mut secret_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut secret_bytes);
    std::env::set_var("PK_SECRET_KEY", BASE64.encode(secret_bytes));

    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

pub fn cleanup_env() {
    for key in ["PK_DB_PATH", "PK_SECRET_KEY"] {
        std::env::remove_var(key);
    }
}

/// Send one JSON request and read the response back as JSON. Empty bodies
/// come back as `Null` so 204s go through the same path.
pub async fn request(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (u16, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn register_and_login(app: &axum::Router) -> String {
    let (status, _) = request(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({
            "name": "Avery Planner",
            "email": "avery@example.com",
            "password": "plann3r-pass",
        })),
    )
    .await;
    assert_eq!(status, 201);

    let (status, body) = request(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(serde_json::json!({
            "email": "avery@example.com",
            "password": "plann3r-pass",
        })),
    )
    .await;
    assert_eq!(status, 200);
    body["accessToken"].as_str().unwrap().to_string()
}
