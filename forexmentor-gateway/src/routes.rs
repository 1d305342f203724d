//! Axum route handlers for the ForexMentor gateway API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use forexmentor_backend::InviteCodeValidator;
use forexmentor_core::{
    CrosshairSettings, InviteCodeCheckRequest, InviteCodeCheckResult, LineStyleOption,
    DEFAULT_CROSSHAIR_SETTINGS, LINE_STYLE_OPTIONS,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Validator = Arc<dyn InviteCodeValidator>;

// ── Response types ───────────────────────────────────────────────────────────

/// Body of `GET /api/chart/crosshair`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairCatalog {
    pub defaults: CrosshairSettings,
    pub line_style_options: &'static [LineStyleOption],
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router around the given validator.
pub fn create_router(validator: Validator) -> Router {
    Router::new()
        .route("/api/validate-invite-code", post(validate_invite_code))
        .route("/api/chart/crosshair", get(crosshair_settings))
        .route("/health", get(health))
        .with_state(validator)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /health`: liveness check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /api/validate-invite-code` — check a code against the backend.
///
/// The body is parsed strictly before the backend is contacted. On success
/// the backend's verdict is relayed unchanged with 200.
///
/// # Errors
/// Returns [`GatewayError::UnreadableBody`] or [`GatewayError::MalformedRequest`]
/// (400) for bad input, and [`GatewayError::Upstream`] (500) if the backend
/// call fails. The call is made once and never retried.
pub async fn validate_invite_code(
    State(validator): State<Validator>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<InviteCodeCheckResult>, GatewayError> {
    let request = body
        .map_err(GatewayError::from)
        .and_then(|bytes| InviteCodeCheckRequest::from_slice(&bytes).map_err(GatewayError::from))
        .inspect_err(|e| tracing::debug!(error = %e, "rejected invite code request"))?;

    let verdict = validator
        .validate_code(&request.code)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "invite code validation failed"))?;

    Ok(Json(verdict))
}

/// `GET /api/chart/crosshair` — default crosshair settings and selectable line styles.
pub async fn crosshair_settings() -> Json<CrosshairCatalog> {
    Json(CrosshairCatalog {
        defaults: DEFAULT_CROSSHAIR_SETTINGS,
        line_style_options: &LINE_STYLE_OPTIONS,
    })
}
