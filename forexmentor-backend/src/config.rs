//! Backend connection settings.

use std::time::Duration;

use url::Url;

use crate::BackendError;

/// Where and how to reach the backend query service.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BackendConfig {
    /// Deployment base URL, e.g. `https://example.backend.cloud`.
    pub base_url: Url,

    /// Per-request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    /// Create a config with no explicit timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self { base_url, timeout: None }
    }

    /// Parse and check a base URL string.
    ///
    /// # Errors
    /// Returns [`BackendError::InvalidUrl`] if `raw` is not an absolute
    /// `http` or `https` URL.
    pub fn parse(raw: &str) -> Result<Self, BackendError> {
        let invalid = |reason: String| BackendError::InvalidUrl { url: raw.to_owned(), reason };

        let base_url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base_url.scheme())));
        }
        if base_url.cannot_be_a_base() || base_url.host().is_none() {
            return Err(invalid("URL has no host".to_owned()));
        }
        Ok(Self::new(base_url))
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Endpoint that executes named queries, relative to the base URL.
    ///
    /// # Errors
    /// Returns [`BackendError::InvalidUrl`] if the join fails.
    pub fn query_url(&self) -> Result<Url, BackendError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join("api/query").map_err(|e| BackendError::InvalidUrl {
            url: self.base_url.to_string(),
            reason: e.to_string(),
        })
    }
}
