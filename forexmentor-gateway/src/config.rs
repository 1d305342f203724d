//! Process configuration read from the environment at startup.

use std::time::Duration;

use forexmentor_backend::BackendConfig;

use crate::error::ConfigError;

/// Base URL of the backend query service. Required.
pub const BACKEND_URL_VAR: &str = "FOREXMENTOR_BACKEND_URL";
/// Socket address to listen on.
pub const LISTEN_ADDR_VAR: &str = "FOREXMENTOR_LISTEN_ADDR";
/// Per-request backend timeout in whole seconds.
pub const BACKEND_TIMEOUT_VAR: &str = "FOREXMENTOR_BACKEND_TIMEOUT_SECS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Gateway settings resolved once before the server starts.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    pub listen_addr: String,
    pub backend: BackendConfig,
}

impl GatewayConfig {
    /// Read settings from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the backend URL is missing or any value is unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] if [`BACKEND_URL_VAR`] is unset, or
    /// [`ConfigError::Invalid`] if a value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let raw_url = get(BACKEND_URL_VAR).ok_or(ConfigError::Missing(BACKEND_URL_VAR))?;
        let mut backend = BackendConfig::parse(&raw_url).map_err(|e| ConfigError::Invalid {
            var: BACKEND_URL_VAR,
            reason: e.to_string(),
        })?;

        if let Some(raw) = get(BACKEND_TIMEOUT_VAR) {
            backend = backend.with_timeout(parse_timeout(&raw)?);
        }

        let listen_addr = get(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());

        Ok(Self { listen_addr, backend })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid { var: BACKEND_TIMEOUT_VAR, reason };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be greater than zero".to_owned())),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(invalid(format!("'{raw}': {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
        let env: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        GatewayConfig::from_lookup(|var| env.get(var).cloned())
    }

    #[test]
    fn missing_backend_url_fails_fast() {
        assert!(matches!(load(&[]), Err(ConfigError::Missing(BACKEND_URL_VAR))));
        assert!(matches!(
            load(&[(BACKEND_URL_VAR, "  ")]),
            Err(ConfigError::Missing(BACKEND_URL_VAR))
        ));
    }

    #[test]
    fn unparsable_backend_url_is_invalid() {
        match load(&[(BACKEND_URL_VAR, "not-a-url")]) {
            Err(ConfigError::Invalid { var, .. }) => assert_eq!(var, BACKEND_URL_VAR),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn optional_values_take_defaults() {
        let config = match load(&[(BACKEND_URL_VAR, "https://happy-otter-123.backend.cloud")]) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert!(config.backend.timeout.is_none(), "timeout must be left to the client default");
        assert_eq!(config.backend.base_url.host_str(), Some("happy-otter-123.backend.cloud"));
    }

    #[test]
    fn optional_values_are_read_when_set() {
        let config = match load(&[
            (BACKEND_URL_VAR, "http://localhost:3210"),
            (LISTEN_ADDR_VAR, "0.0.0.0:8080"),
            (BACKEND_TIMEOUT_VAR, "10"),
        ]) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.backend.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn bad_timeout_is_invalid() {
        for raw in ["0", "-3", "ten", "1.5"] {
            match load(&[(BACKEND_URL_VAR, "http://localhost:3210"), (BACKEND_TIMEOUT_VAR, raw)]) {
                Err(ConfigError::Invalid { var, .. }) => assert_eq!(var, BACKEND_TIMEOUT_VAR),
                other => panic!("timeout {raw:?}: expected Invalid, got {other:?}"),
            }
        }
    }
}
