//! LogSet sub-clients — single-logset CRUD and the logsets listing.

use crate::domain::log_set::wire::{
    LogSetBody, LogSetCreateRequest, LogSetCreateResponse, LogSetDeleteRequest,
    LogSetReadRequest, LogSetReadResponse, LogSetUpdateRequest, LogSetUpdateResponse,
    LogSetsReadRequest, LogSetsReadResponse,
};
use crate::error::LogentriesResult;
use crate::http::LogentriesHttp;
use crate::network::LOGSETS_RESOURCE;

use reqwest::StatusCode;

/// Sub-client for a single logset.
#[derive(Debug, Clone)]
pub struct LogSetClient {
    pub(crate) http: LogentriesHttp,
}

impl LogSetClient {
    pub async fn create(
        &self,
        request: &LogSetCreateRequest,
    ) -> LogentriesResult<LogSetCreateResponse> {
        let url = self.http.url(LOGSETS_RESOURCE);
        let body = LogSetBody {
            log_set: &request.log_set,
        };
        let bytes = self.http.post(&url, &body, StatusCode::CREATED).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn read(&self, request: &LogSetReadRequest) -> LogentriesResult<LogSetReadResponse> {
        let url = self.http.entity_url(LOGSETS_RESOURCE, &request.id)?;
        let bytes = self.http.get(&url, StatusCode::OK).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The body carries the target id even when `request.log_set.id` is unset.
    pub async fn update(
        &self,
        request: &LogSetUpdateRequest,
    ) -> LogentriesResult<LogSetUpdateResponse> {
        let url = self.http.entity_url(LOGSETS_RESOURCE, &request.id)?;
        let mut log_set = request.log_set.clone();
        log_set.id.get_or_insert_with(|| request.id.clone());

        let body = LogSetBody { log_set: &log_set };
        let bytes = self.http.put(&url, &body, StatusCode::OK).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn delete(&self, request: &LogSetDeleteRequest) -> LogentriesResult<bool> {
        let url = self.http.entity_url(LOGSETS_RESOURCE, &request.id)?;
        self.http.delete(&url, StatusCode::NO_CONTENT).await
    }
}

/// Sub-client for the logsets collection.
#[derive(Debug, Clone)]
pub struct LogSetsClient {
    pub(crate) http: LogentriesHttp,
}

impl LogSetsClient {
    /// List every logset, in the order the service returns them.
    pub async fn read(
        &self,
        _request: &LogSetsReadRequest,
    ) -> LogentriesResult<LogSetsReadResponse> {
        let url = self.http.url(LOGSETS_RESOURCE);
        let bytes = self.http.get(&url, StatusCode::OK).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
