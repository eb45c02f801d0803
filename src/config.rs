// ABOUTME: Environment-based client configuration read once at process start
// ABOUTME: Base URL and request timeout with warn-and-fall-back parsing
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;
use url::Url;

use crate::errors::ClientError;

/// Environment variable naming the backend base URL
pub const ENV_BASE_URL: &str = "BLOG_API_BASE_URL";

/// Environment variable naming the request timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "BLOG_API_TIMEOUT_MS";

/// Default backend base URL for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client configuration, read once at startup. No hot reload.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL every request path is joined against
    pub base_url: Url,
    /// Fixed per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with explicit values
    #[must_use]
    pub const fn new(base_url: Url, timeout: Duration) -> Self {
        Self { base_url, timeout }
    }

    /// Load configuration from the environment.
    ///
    /// `BLOG_API_BASE_URL` defaults to `http://localhost:8000`. An invalid
    /// `BLOG_API_TIMEOUT_MS` falls back to the default with a warning rather
    /// than failing startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("invalid {ENV_BASE_URL}: {base_url}"))?;

        let timeout_ms = env::var(ENV_TIMEOUT_MS)
            .ok()
            .map_or(DEFAULT_TIMEOUT_MS, |raw| match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    warn!(
                        value = %raw,
                        "invalid {ENV_TIMEOUT_MS}, using default of {DEFAULT_TIMEOUT_MS}ms"
                    );
                    DEFAULT_TIMEOUT_MS
                }
            });

        Ok(Self::new(base_url, Duration::from_millis(timeout_ms)))
    }

    /// Resolve a request path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestSetup`] when the path cannot be joined.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::request_setup(format!("invalid request path {path}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_TIMEOUT_MS);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var(ENV_BASE_URL, "https://blog.example.com");
        env::set_var(ENV_TIMEOUT_MS, "5000");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url.host_str(), Some("blog.example.com"));
        assert_eq!(config.timeout, Duration::from_millis(5000));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout_falls_back() {
        clear_env();
        env::set_var(ENV_TIMEOUT_MS, "not-a-number");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_url() {
        clear_env();
        env::set_var(ENV_BASE_URL, "not a url");
        assert!(ClientConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_endpoint_join() {
        let config = ClientConfig::new(
            Url::parse("http://api.test:8000").unwrap(),
            Duration::from_secs(5),
        );
        let url = config.endpoint("/api/articles").unwrap();
        assert_eq!(url.as_str(), "http://api.test:8000/api/articles");
    }
}
