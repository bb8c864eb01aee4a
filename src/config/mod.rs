//! Configuration management for the daybook library.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! journal backend base URL, the bearer token sent with requests, and the
//! request timeout.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_API_URL`: Base URL of the journal backend (defaults to
//!   `http://127.0.0.1:8000`)
//! - `DAYBOOK_AUTH_TOKEN`: Optional bearer token attached to every request
//! - `DAYBOOK_API_TIMEOUT`: Request timeout in whole seconds (defaults to 10)

use crate::constants::{
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_API_URL, ENV_VAR_API_TIMEOUT, ENV_VAR_API_URL,
    ENV_VAR_AUTH_TOKEN, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use tracing::debug;

/// Configuration for the journal backend client.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use daybook::Config;
///
/// let config = Config {
///     api_base_url: "http://localhost:8000".to_string(),
///     auth_token: None,
///     timeout_secs: 10,
/// };
/// assert_eq!(config.timeout_secs, 10);
/// ```
pub struct Config {
    /// Base URL of the journal backend, without a trailing slash.
    pub api_base_url: String,

    /// Bearer token attached to every backend request, if the identity
    /// provider issued one.
    pub auth_token: Option<String>,

    /// Request timeout in whole seconds.
    pub timeout_secs: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DAYBOOK_API_URL` is set but not an
    /// http(s) URL, or if `DAYBOOK_API_TIMEOUT` is set but not a positive
    /// integer.
    pub fn load() -> AppResult<Self> {
        let api_base_url = match env::var(ENV_VAR_API_URL) {
            Ok(url) => validate_base_url(&url)?,
            Err(_) => DEFAULT_API_URL.to_string(),
        };

        let auth_token = env::var(ENV_VAR_AUTH_TOKEN).ok().filter(|t| !t.is_empty());

        let timeout_secs = match env::var(ENV_VAR_API_TIMEOUT) {
            Ok(raw) => raw.parse::<u64>().ok().filter(|t| *t > 0).ok_or_else(|| {
                AppError::Config(format!(
                    "{} must be a positive integer number of seconds, got '{}'",
                    ENV_VAR_API_TIMEOUT, raw
                ))
            })?,
            Err(_) => DEFAULT_API_TIMEOUT_SECS,
        };

        debug!(
            base_url = %api_base_url,
            timeout_secs,
            has_token = auth_token.is_some(),
            "Loaded backend configuration"
        );

        Ok(Config {
            api_base_url,
            auth_token,
            timeout_secs,
        })
    }
}

fn validate_base_url(url: &str) -> AppResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(AppError::Config(format!(
            "{} must be an http(s) URL, got '{}'",
            ENV_VAR_API_URL, url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, DEFAULT_API_TIMEOUT_SECS);
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn test_validate_base_url_strips_trailing_slash() {
        assert_eq!(
            validate_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_validate_base_url_rejects_non_http() {
        assert!(matches!(
            validate_base_url("ftp://api.example.com"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(validate_base_url(""), Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config {
            api_base_url: DEFAULT_API_URL.to_string(),
            auth_token: Some("secret-token".to_string()),
            timeout_secs: 10,
        };
        let output = format!("{:?}", config);
        assert!(!output.contains("secret-token"));
        assert!(output.contains(REDACTED_PLACEHOLDER));
    }
}
