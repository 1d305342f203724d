//! Error types for the backend client crate.

/// Errors that can occur while talking to the backend query service.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BackendError {
    /// The configured base URL is unusable.
    #[error("invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection, timeout, or body transfer failure.
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend ran the query and reported an error.
    #[error("backend query '{path}' failed: {message}")]
    Query { path: String, message: String },

    /// The response body did not have the expected shape.
    #[error("malformed backend response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
