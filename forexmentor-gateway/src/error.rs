//! Error types for the gateway crate.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forexmentor_backend::BackendError;
use forexmentor_core::{CoreError, InviteCodeCheckResult};

/// Errors that can occur while handling an invite code check.
///
/// Every variant renders as an [`InviteCodeCheckResult`] with
/// `isValid: false`; the underlying detail is never sent to the client.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The request body could not be read.
    #[error("unreadable request body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    /// The request body is not `{ "code": <string> }`.
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] CoreError),

    /// The backend could not produce a verdict.
    #[error("invite code validation failed: {0}")]
    Upstream(#[from] BackendError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, verdict) = match &self {
            GatewayError::UnreadableBody(_) | GatewayError::MalformedRequest(_) => {
                (StatusCode::BAD_REQUEST, InviteCodeCheckResult::invalid_request())
            }
            GatewayError::Upstream(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, InviteCodeCheckResult::server_error())
            }
        };
        (status, Json(verdict)).into_response()
    }
}

/// Errors raised while reading process configuration at startup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    /// An environment variable is set to an unusable value.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
