//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no queue data of its own: it holds the outbound HTTP client
//! used to reach the queue backend and the parsed host config.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use crate::config::HostConfig;

/// Seconds allowed to establish the upstream TCP connection.
const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to build upstream HTTP client: {0}")]
    HttpClientBuild(String),
}

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<HostConfig>,
}

impl AppState {
    /// Build state with an upstream client honoring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: HostConfig) -> Result<Self, StateError> {
        let http = reqwest::Client::builder()
            .timeout(config.queue_api_timeout)
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS).min(config.queue_api_timeout))
            .build()
            .map_err(|e| StateError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
