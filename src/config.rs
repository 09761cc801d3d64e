//! Client configuration
//!
//! The base URL and transport options are an explicit value handed to
//! [`ApiClient::new`](crate::client::ApiClient::new). Nothing is read from
//! global state after construction.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "BVMT_API_URL";

/// Environment variable holding an optional request timeout in seconds
pub const TIMEOUT_ENV: &str = "BVMT_API_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Settings for the dashboard API client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// No timeout when unset; the transport default applies
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with everything else defaulted
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read configuration from the process environment
    ///
    /// Unset or empty variables fall back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_base_url);

        let timeout_secs = match lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ApiError::Config(format!("Invalid {}: {} ({})", TIMEOUT_ENV, raw, e))
            })?),
            None => None,
        };

        Ok(Self {
            base_url,
            timeout_secs,
            user_agent: None,
        })
    }

    /// Validated base URL without a trailing slash
    ///
    /// Endpoint paths are appended to this string verbatim.
    pub fn normalized_base_url(&self) -> Result<String> {
        let trimmed = self.base_url.trim();
        let parsed = Url::parse(trimmed)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {}", trimmed, e)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ApiError::Config(format!(
                    "Unsupported URL scheme '{}' in base URL",
                    other
                )))
            }
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::Config(
                "Base URL must not carry a query or fragment".to_string(),
            ));
        }

        Ok(trimmed.trim_end_matches('/').to_string())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (BASE_URL_ENV, "https://api.example.tn/"),
            (TIMEOUT_ENV, "15"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.example.tn/");
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_empty_env_value_uses_default() {
        let config = ClientConfig::from_lookup(lookup_from(&[(BASE_URL_ENV, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_bad_timeout_is_config_error() {
        let err = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_normalized_base_url() {
        let config = ClientConfig::new("http://localhost:8000/backend/");
        assert_eq!(
            config.normalized_base_url().unwrap(),
            "http://localhost:8000/backend"
        );

        assert!(ClientConfig::new("not a url").normalized_base_url().is_err());
        assert!(ClientConfig::new("ftp://host").normalized_base_url().is_err());
        assert!(ClientConfig::new("http://host/?x=1").normalized_base_url().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, Some(5));
    }
}
