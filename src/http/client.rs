//! Low-level HTTP transport — `LogentriesHttp`.
//!
//! One HTTP call per invocation. The caller passes the status it treats as
//! success; the transport classifies everything else into a
//! [`LogentriesError`] and hands back the raw body bytes on success.
//! Decoding into typed responses happens in the resource sub-clients.

use crate::error::{LogentriesError, LogentriesResult};
use crate::network::API_KEY_HEADER;
use crate::shared::ApiKey;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use std::time::Duration;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Low-level HTTP client for the Logentries REST API.
#[derive(Debug, Clone)]
pub struct LogentriesHttp {
    base_url: String,
    api_key: ApiKey,
    client: Client,
}

impl LogentriesHttp {
    pub fn new(base_url: &str, api_key: ApiKey, timeout: Duration) -> LogentriesResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a resource path against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL of a single entity under `resource`. An empty id would address
    /// the collection itself, so it is rejected.
    pub fn entity_url(&self, resource: &str, id: &str) -> LogentriesResult<String> {
        if id.trim().is_empty() {
            return Err(LogentriesError::InvalidConfig(format!(
                "empty id for {}",
                resource
            )));
        }
        Ok(format!("{}/{}", self.url(resource), urlencoding::encode(id)))
    }

    pub async fn get(&self, url: &str, expected: StatusCode) -> LogentriesResult<Vec<u8>> {
        self.execute(Method::GET, url, None::<&()>, expected).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &B,
        expected: StatusCode,
    ) -> LogentriesResult<Vec<u8>> {
        self.execute(Method::POST, url, Some(payload), expected).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &B,
        expected: StatusCode,
    ) -> LogentriesResult<Vec<u8>> {
        self.execute(Method::PUT, url, Some(payload), expected).await
    }

    /// Returns `true` once the service answered with `expected`; any other
    /// outcome is an error.
    pub async fn delete(&self, url: &str, expected: StatusCode) -> LogentriesResult<bool> {
        self.execute(Method::DELETE, url, None::<&()>, expected).await?;
        Ok(true)
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        expected: StatusCode,
    ) -> LogentriesResult<Vec<u8>> {
        let mut req = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(API_KEY_HEADER, self.api_key.expose());

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(%method, url, "Sending request");
        let resp = req.send().await?;
        let status = resp.status();
        tracing::debug!(
            %method,
            url,
            status = status.as_u16(),
            expected = expected.as_u16(),
            "Received response"
        );

        // 404 wins over the expected status
        if status == StatusCode::NOT_FOUND {
            return Err(LogentriesError::NotFound {
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;

        if status != expected {
            return Err(LogentriesError::UnexpectedStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}
