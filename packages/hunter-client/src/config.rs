//! Client configuration with secure credential handling.
//!
//! Uses the `secrecy` crate so the API key never shows up in logs, debug
//! output, or error messages.

use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::fmt;

/// Default Hunter.io API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.hunter.io/v2";

/// Hunter API key. Redacted in `Debug` output.
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Only call this when actually building a request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Hunter client configuration.
///
/// An empty API key is accepted here; every operation checks for it before
/// touching the network and reports it as a configuration error.
#[derive(Clone, Debug)]
pub struct HunterConfig {
    /// Hunter.io API key. Get one at https://hunter.io/users/sign_up
    pub api_key: ApiKey,

    /// API base URL, without trailing slash
    pub base_url: String,
}

impl HunterConfig {
    /// Create a configuration for the public Hunter.io API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load from `HUNTER_API_KEY` and optional `HUNTER_BASE_URL`.
    ///
    /// Reads a `.env` file first if one is present. A missing key yields an
    /// empty one rather than an error.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let config = Self::new(env::var("HUNTER_API_KEY").unwrap_or_default());
        match env::var("HUNTER_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }

    /// Set a custom base URL (proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether a usable API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_not_in_debug() {
        let config = HunterConfig::new("hk-super-secret-key");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hk-super"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_api_key_exposed_only_on_request() {
        let key = ApiKey::from("hk-super-secret-key".to_string());
        assert_eq!(format!("{:?}", key), "ApiKey([REDACTED])");
        assert_eq!(key.expose(), "hk-super-secret-key");
        assert!(ApiKey::new("").is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = HunterConfig::new("key");
        assert_eq!(config.base_url, "https://api.hunter.io/v2");
        assert!(config.has_api_key());
        assert!(!HunterConfig::new("").has_api_key());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = HunterConfig::new("key").with_base_url("http://localhost:9000/v2/");
        assert_eq!(config.base_url, "http://localhost:9000/v2");
    }
}
