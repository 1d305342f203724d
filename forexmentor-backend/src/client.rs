//! HTTP client for the backend's named-query API.
//!
//! Each call is a single `POST {base}/api/query`. There is no retry here;
//! a failed call surfaces as a [`BackendError`] and the caller decides what
//! to report.

use async_trait::async_trait;
use forexmentor_core::{InviteCodeCheckRequest, InviteCodeCheckResult};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    query::{QueryRequest, QueryResponse},
    BackendConfig, BackendError, InviteCodeValidator,
};

/// Name of the backend query that checks an invite code.
pub const VALIDATE_CODE_QUERY: &str = "inviteCodes:validateCode";

/// Longest prefix of a non-2xx response body kept in [`BackendError::Status`].
pub const MAX_ERROR_BODY_BYTES: usize = 512;

/// Connection-pooled client for the backend query service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    query_url: Url,
}

impl QueryClient {
    /// Build a client for the given backend.
    ///
    /// # Errors
    /// Returns [`BackendError::ClientBuild`] if the TLS backend cannot be
    /// initialised, or [`BackendError::InvalidUrl`] if the query endpoint
    /// cannot be derived from the base URL.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(BackendError::ClientBuild)?;

        Ok(Self { http, query_url: config.query_url()? })
    }

    /// The fully resolved query endpoint.
    #[must_use]
    pub fn query_url(&self) -> &Url {
        &self.query_url
    }

    /// Run the named query `path` with `args` and decode its value as `T`.
    ///
    /// # Errors
    /// - [`BackendError::Transport`] on connection or timeout failure
    /// - [`BackendError::Status`] on a non-2xx response
    /// - [`BackendError::Query`] if the backend reports a query error
    /// - [`BackendError::MalformedResponse`] if the envelope or value does not decode
    pub async fn query<A, T>(&self, path: &str, args: &A) -> Result<T, BackendError>
    where
        A: Serialize + Sync,
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .post(self.query_url.clone())
            .json(&QueryRequest::json(path, args))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: truncate_body(body, MAX_ERROR_BODY_BYTES),
            });
        }

        match serde_json::from_str::<QueryResponse>(&body)? {
            QueryResponse::Success { value, log_lines } => {
                for line in &log_lines {
                    tracing::debug!(query = %path, %line, "backend log");
                }
                Ok(serde_json::from_value(value)?)
            }
            QueryResponse::Error { error_message, log_lines } => {
                for line in &log_lines {
                    tracing::debug!(query = %path, %line, "backend log");
                }
                Err(BackendError::Query { path: path.to_owned(), message: error_message })
            }
        }
    }
}

/// Cut `body` to at most `limit` bytes on a char boundary, marking the cut.
fn truncate_body(mut body: String, limit: usize) -> String {
    if body.len() <= limit {
        return body;
    }
    let mut end = limit;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body.truncate(end);
    body.push_str("...");
    body
}

#[async_trait]
impl InviteCodeValidator for QueryClient {
    async fn validate_code(&self, code: &str) -> Result<InviteCodeCheckResult, BackendError> {
        self.query(VALIDATE_CODE_QUERY, &InviteCodeCheckRequest::new(code)).await
    }
}
