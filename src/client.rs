//! High-level client — `LogentriesClient` with one sub-client per resource.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the composition.

use crate::domain::log::client::LogClient;
use crate::domain::log_set::client::{LogSetClient, LogSetsClient};
use crate::error::{LogentriesError, LogentriesResult};
use crate::http::LogentriesHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::shared::ApiKey;

use reqwest::Url;
use std::time::Duration;

/// The primary entry point for the Logentries API.
///
/// All three sub-clients share one immutable configuration (API key, base
/// URL, timeout) fixed at construction.
#[derive(Debug, Clone)]
pub struct LogentriesClient {
    pub log: LogClient,
    pub log_set: LogSetClient,
    pub log_sets: LogSetsClient,
}

impl LogentriesClient {
    /// Client for the default service origin.
    pub fn new(api_key: impl Into<ApiKey>) -> LogentriesResult<Self> {
        Self::builder(api_key).build()
    }

    /// Client that sends every request to `proxy_url` instead of the default origin.
    pub fn with_proxy(api_key: impl Into<ApiKey>, proxy_url: &str) -> LogentriesResult<Self> {
        Self::builder(api_key).base_url(proxy_url).build()
    }

    pub fn builder(api_key: impl Into<ApiKey>) -> LogentriesClientBuilder {
        LogentriesClientBuilder::new(api_key)
    }

    pub fn base_url(&self) -> &str {
        self.log.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct LogentriesClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
}

impl LogentriesClientBuilder {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the service origin, e.g. to go through a proxy.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Must be non-zero.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client. No network I/O happens here.
    pub fn build(self) -> LogentriesResult<LogentriesClient> {
        let parsed = Url::parse(&self.base_url).map_err(|e| {
            LogentriesError::InvalidConfig(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LogentriesError::InvalidConfig(format!(
                "base URL must be http or https, got: {}",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(LogentriesError::InvalidConfig(
                "timeout must be non-zero".to_string(),
            ));
        }

        let http = LogentriesHttp::new(&self.base_url, self.api_key, self.timeout)?;
        tracing::debug!(
            base_url = http.base_url(),
            timeout_ms = self.timeout.as_millis() as u64,
            "Built Logentries client"
        );

        Ok(LogentriesClient {
            log: LogClient { http: http.clone() },
            log_set: LogSetClient { http: http.clone() },
            log_sets: LogSetsClient { http },
        })
    }
}
