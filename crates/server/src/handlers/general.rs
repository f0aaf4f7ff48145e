//! # General Route Handlers
//!
//! The root, health check, and router fallback handlers. The fallbacks
//! short-circuit `OPTIONS` to a bare 200 so CORS pre-flights succeed on any
//! path, known or not.

use super::AppState;
use crate::types::HealthResponse;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "roadmap server is running."
}

/// The handler for the health check (`/health`) endpoint.
///
/// `groq_available` reports whether an upstream credential is configured,
/// i.e. whether roadmaps are generated or served from the fallback template.
pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        groq_available: app_state.generator.is_configured(),
        model: app_state.config.provider.model_name.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// The router fallback for unknown paths.
pub async fn not_found(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

/// The router fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}
