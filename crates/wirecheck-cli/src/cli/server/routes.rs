//! Route table and handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get, post};
use axum::{Json, Router};
use wirecheck_core::email_header;
use wirecheck_core::validate;

use super::AppState;

const JSON: [(header::HeaderName, &str); 1] = [(header::CONTENT_TYPE, "application/json")];

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(index))
        .route("/ping", get(ping).fallback(method_not_allowed))
        .route("/echo", post(echo).fallback(method_not_allowed))
        .route(
            "/email-header",
            get(email_header_json).fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn index() -> &'static str {
    "Hello, world\n"
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "method not allowed\n")
}

async fn ping() -> Response {
    (JSON, r#"{"message":"pong"}"#).into_response()
}

/// Returns the body unchanged if it is exactly one JSON value.
async fn echo(body: Bytes) -> Response {
    if validate::require_non_empty(&body).is_err() {
        return (StatusCode::BAD_REQUEST, "empty body\n").into_response();
    }
    if let Err(e) = validate::validate_json(&body) {
        tracing::debug!(error = %e, "rejected echo body");
        return (StatusCode::BAD_REQUEST, format!("invalid JSON: {}\n", e)).into_response();
    }
    (JSON, body).into_response()
}

async fn email_header_json(State(state): State<AppState>) -> Response {
    let AppState {
        email_url,
        email_timeout,
    } = state;
    let result = tokio::task::spawn_blocking(move || {
        email_header::create_email_header(&email_url, email_timeout)
    })
    .await;
    match result {
        Ok(Ok(headers)) => Json(serde_json::json!({ "headers": headers })).into_response(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "email header failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{}\n", e)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "email header task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error\n").into_response()
        }
    }
}
