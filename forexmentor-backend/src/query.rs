//! Wire format of the backend's named-query endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/query`.
#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest<'a, A> {
    pub path: &'a str,
    pub args: &'a A,
    pub format: &'static str,
}

impl<'a, A: Serialize> QueryRequest<'a, A> {
    pub fn json(path: &'a str, args: &'a A) -> Self {
        Self { path, args, format: "json" }
    }
}

/// Envelope wrapping every query response.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum QueryResponse {
    Success {
        value: Value,
        #[serde(default, rename = "logLines")]
        log_lines: Vec<String>,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
        #[serde(default, rename = "logLines")]
        log_lines: Vec<String>,
    },
}
