//! Invite code request and result types.
//!
//! The request side is parsed strictly from raw body bytes so that malformed
//! input is rejected before any call leaves the process. The result side is
//! an opaque pass-through: only `isValid` and `reason` are understood, every
//! other field the validator returns is carried along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Reason reported when a request body fails the strict parse step.
pub const INVALID_REQUEST_REASON: &str = "Invalid request";

/// Reason reported when the external validator could not be consulted.
pub const SERVER_ERROR_REASON: &str = "Server error";

/// A well-formed invite code check request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct InviteCodeCheckRequest {
    /// The code exactly as the client submitted it.
    pub code: String,
}

impl InviteCodeCheckRequest {
    /// Creates a request for the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Parses a request from a raw JSON body.
    ///
    /// The body must be a JSON object whose `code` member is a string. Other
    /// members are ignored. The code is kept verbatim, including when empty;
    /// whether an empty code is acceptable is the validator's call.
    ///
    /// # Errors
    /// Returns [`CoreError::MalformedRequest`] if the body is not JSON, is not
    /// an object, or lacks a textual `code`.
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| malformed(e.to_string()))?;

        let Value::Object(mut fields) = value else {
            return Err(malformed("body is not a JSON object"));
        };

        match fields.remove("code") {
            Some(Value::String(code)) => Ok(Self { code }),
            Some(other) => Err(malformed(format!("`code` must be a string, got {}", kind(&other)))),
            None => Err(malformed("missing `code`")),
        }
    }
}

fn malformed(reason: impl Into<String>) -> CoreError {
    CoreError::MalformedRequest { reason: reason.into() }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Outcome of an invite code check.
///
/// Serialized as `{ "isValid": bool, "reason"?: string, ... }`. Fields other
/// than `isValid` and a textual `reason` are preserved in
/// [`extra`](Self::extra) so the validator's verdict can be relayed without
/// loss. A `"reason": null` from the validator stays in `extra` as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawVerdict")]
#[non_exhaustive]
pub struct InviteCodeCheckResult {
    /// Whether the code grants access.
    pub is_valid: bool,
    /// Human-readable explanation, set on failure paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Any further fields supplied by the validator.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decoding shape of a verdict before `reason` is split out of the rest.
#[derive(Deserialize)]
struct RawVerdict {
    #[serde(rename = "isValid")]
    is_valid: bool,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl TryFrom<RawVerdict> for InviteCodeCheckResult {
    type Error = CoreError;

    fn try_from(raw: RawVerdict) -> Result<Self, Self::Error> {
        let RawVerdict { is_valid, mut rest } = raw;
        let reason = match rest.remove("reason") {
            None => None,
            Some(Value::String(reason)) => Some(reason),
            Some(Value::Null) => {
                rest.insert("reason".to_owned(), Value::Null);
                None
            }
            Some(other) => {
                return Err(CoreError::MalformedVerdict {
                    reason: format!("`reason` must be a string or null, got {}", kind(&other)),
                })
            }
        };
        Ok(Self { is_valid, reason, extra: rest })
    }
}

impl InviteCodeCheckResult {
    /// A bare positive verdict.
    #[must_use]
    pub fn valid() -> Self {
        Self { is_valid: true, reason: None, extra: Map::new() }
    }

    /// A negative verdict carrying `reason`.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self { is_valid: false, reason: Some(reason.into()), extra: Map::new() }
    }

    /// The verdict returned for a malformed request body.
    #[must_use]
    pub fn invalid_request() -> Self {
        Self::invalid(INVALID_REQUEST_REASON)
    }

    /// The fail-closed verdict returned when the validator is unavailable.
    #[must_use]
    pub fn server_error() -> Self {
        Self::invalid(SERVER_ERROR_REASON)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(body: &str) -> Result<InviteCodeCheckRequest, CoreError> {
        InviteCodeCheckRequest::from_slice(body.as_bytes())
    }

    #[test]
    fn parse_accepts_textual_code_verbatim() {
        let request = match parse(r#"{"code": "  AbC-123 "}"#) {
            Ok(r) => r,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(request.code, "  AbC-123 ", "code must not be trimmed or normalised");
    }

    #[test]
    fn parse_ignores_unrelated_fields() {
        let request = parse(r#"{"code": "ABC123", "email": "a@b.c", "n": 4}"#);
        assert_eq!(request.ok(), Some(InviteCodeCheckRequest::new("ABC123")));
    }

    #[test]
    fn parse_rejects_missing_code() {
        assert!(matches!(parse("{}"), Err(CoreError::MalformedRequest { .. })));
    }

    #[test]
    fn parse_rejects_non_string_code() {
        for body in [
            r#"{"code": 123}"#,
            r#"{"code": null}"#,
            r#"{"code": ["A"]}"#,
            r#"{"code": true}"#,
        ] {
            assert!(
                matches!(parse(body), Err(CoreError::MalformedRequest { .. })),
                "body {body} must be rejected"
            );
        }
    }

    #[test]
    fn parse_forwards_empty_code() {
        assert_eq!(parse(r#"{"code": ""}"#).ok(), Some(InviteCodeCheckRequest::new("")));
    }

    #[test]
    fn parse_rejects_non_object_bodies() {
        for body in ["", "not json", "null", r#"["ABC123"]"#, r#""ABC123""#, "{\"code\": \"A\""] {
            assert!(
                matches!(parse(body), Err(CoreError::MalformedRequest { .. })),
                "body {body:?} must be rejected"
            );
        }
    }

    #[test]
    fn malformed_reason_names_the_offending_type() {
        let err = match parse(r#"{"code": 5}"#) {
            Ok(r) => panic!("expected error, got {r:?}"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("number"), "got {err}");
    }

    #[test]
    fn result_serializes_in_camel_case_without_empty_reason() {
        let value = serde_json::to_value(InviteCodeCheckResult::valid()).ok();
        assert_eq!(value, Some(json!({"isValid": true})));
    }

    #[test]
    fn canned_failures_match_wire_contract() {
        assert_eq!(
            serde_json::to_value(InviteCodeCheckResult::invalid_request()).ok(),
            Some(json!({"isValid": false, "reason": "Invalid request"}))
        );
        assert_eq!(
            serde_json::to_value(InviteCodeCheckResult::server_error()).ok(),
            Some(json!({"isValid": false, "reason": "Server error"}))
        );
    }

    #[test]
    fn result_preserves_unknown_fields() {
        let upstream =
            json!({"isValid": false, "reason": "Code already used", "usedAt": 1_700_000_000});
        let result: InviteCodeCheckResult = match serde_json::from_value(upstream.clone()) {
            Ok(r) => r,
            Err(e) => panic!("deserialize failed: {e}"),
        };
        assert!(!result.is_valid);
        assert_eq!(result.reason.as_deref(), Some("Code already used"));
        assert_eq!(serde_json::to_value(&result).ok(), Some(upstream));
    }

    #[test]
    fn result_keeps_null_reason_on_relay() {
        let upstream = json!({"isValid": true, "reason": null});
        let result: InviteCodeCheckResult = match serde_json::from_value(upstream.clone()) {
            Ok(r) => r,
            Err(e) => panic!("deserialize failed: {e}"),
        };
        assert!(result.is_valid);
        assert_eq!(result.reason, None);
        assert_eq!(serde_json::to_value(&result).ok(), Some(upstream));
    }

    #[test]
    fn result_requires_boolean_is_valid() {
        for upstream in [
            json!({}),
            json!({"isValid": "yes"}),
            json!(null),
            json!({"valid": true}),
            json!({"isValid": false, "reason": 42}),
        ] {
            assert!(
                serde_json::from_value::<InviteCodeCheckResult>(upstream.clone()).is_err(),
                "{upstream} must not decode"
            );
        }
    }

    proptest::proptest! {
        #[test]
        fn proptest_parse_never_panics_on_arbitrary_bytes(
            body in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..256usize),
        ) {
            let _ = InviteCodeCheckRequest::from_slice(&body);
        }

        #[test]
        fn proptest_any_textual_code_round_trips_exactly(code in "\\PC{0,64}") {
            let body = json!({"code": code.clone()}).to_string();
            let parsed = InviteCodeCheckRequest::from_slice(body.as_bytes());
            proptest::prop_assert_eq!(parsed.ok().map(|r| r.code), Some(code));
        }
    }
}
