//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_QUEUE_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_QUEUE_API_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid QUEUE_API_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
    #[error("QUEUE_API_URL must start with http:// or https://, got {0}")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the queue backend, without a trailing slash.
    pub queue_api_url: String,
    pub queue_api_timeout: Duration,
    /// Directory served at `/assets` (alert sound and other static media).
    pub assets_dir: PathBuf,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `QUEUE_API_URL`: default `http://127.0.0.1:5000`
    /// - `QUEUE_API_TIMEOUT_SECS`: default 10
    /// - `ASSETS_DIR`: default `<crate>/assets`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let queue_api_url = parse_upstream(
            std::env::var("QUEUE_API_URL")
                .as_deref()
                .unwrap_or(DEFAULT_QUEUE_API_URL),
        )?;

        let timeout_secs = match std::env::var("QUEUE_API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            Err(_) => DEFAULT_QUEUE_API_TIMEOUT_SECS,
        };

        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"));

        Ok(Self { port, queue_api_url, queue_api_timeout: Duration::from_secs(timeout_secs), assets_dir })
    }
}

fn parse_upstream(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstream(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}
