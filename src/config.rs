//! Sync configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_FIGMA_API_BASE_URL: &str = "https://api.figma.com";
pub const DEFAULT_FIGMA_TOKEN_ENV: &str = "FIGMA_ACCESS_TOKEN";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading [`SyncConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required env var {var}")]
    Missing { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Timeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub file_key: String,
    pub access_token: String,
    pub api_base_url: String,
    pub timeouts: Timeouts,
}

impl SyncConfig {
    /// Build typed sync config from environment variables.
    ///
    /// Required:
    /// - `FIGMA_FILE_KEY`
    /// - the access token, read from the variable named by `FIGMA_TOKEN_ENV`
    ///   (default `FIGMA_ACCESS_TOKEN`)
    ///
    /// Optional:
    /// - `FIGMA_API_BASE_URL`: default `https://api.figma.com`
    /// - `FIGMA_REQUEST_TIMEOUT_SECS`: default 30
    /// - `FIGMA_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        let file_key = std::env::var("FIGMA_FILE_KEY").map_err(|_| ConfigError::Missing {
            var: "FIGMA_FILE_KEY".into(),
        })?;
        if file_key.trim().is_empty() {
            return Err(ConfigError::Parse("FIGMA_FILE_KEY is empty".into()));
        }

        let token_var = std::env::var("FIGMA_TOKEN_ENV").unwrap_or_else(|_| DEFAULT_FIGMA_TOKEN_ENV.to_string());
        let access_token = std::env::var(&token_var).map_err(|_| ConfigError::Missing { var: token_var.clone() })?;

        let api_base_url = std::env::var("FIGMA_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_FIGMA_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = Timeouts {
            request_secs: env_parse_u64("FIGMA_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse_u64("FIGMA_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { file_key: file_key.trim().to_string(), access_token, api_base_url, timeouts })
    }

    /// Endpoint for the file's local variables.
    #[must_use]
    pub fn variables_url(&self) -> String {
        format!("{}/v1/files/{}/variables", self.api_base_url, self.file_key)
    }
}

fn env_parse_u64(key: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Parse(format!("{key} must be a non-negative integer, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
