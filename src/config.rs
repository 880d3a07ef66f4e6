//! Client configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! The only value the dispatcher strictly needs is the API base URL. It is
//! resolved once, when the config is built, and never re-read afterwards.
//! An unset or empty override falls back to the local development backend.

use std::time::Duration;

pub const API_BASE_ENV: &str = "DEALERMATE_API_BASE";
pub const CONNECT_TIMEOUT_ENV: &str = "DEALERMATE_CONNECT_TIMEOUT_SECS";

pub const DEFAULT_API_BASE: &str = "http://localhost:8001";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix every request path is appended to, verbatim.
    pub api_base: String,
    /// TCP connect timeout for the underlying HTTP client.
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Config pointing at `api_base` with default connection settings.
    /// An empty `api_base` resolves to [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: resolve_api_base(Some(&api_base)),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `DEALERMATE_API_BASE`: default `http://localhost:8001`
    /// - `DEALERMATE_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        let api_base = resolve_api_base(std::env::var(API_BASE_ENV).ok().as_deref());
        let connect_secs = env_parse_u64(CONNECT_TIMEOUT_ENV, DEFAULT_CONNECT_TIMEOUT_SECS);
        Self { api_base, connect_timeout: Duration::from_secs(connect_secs) }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Pick the override when present and non-empty, otherwise the default base.
#[must_use]
pub fn resolve_api_base(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
