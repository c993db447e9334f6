//! Log sub-client — create, read, update and delete single logs.

use crate::domain::log::wire::{
    LogBody, LogCreateRequest, LogCreateResponse, LogDeleteRequest, LogReadRequest,
    LogReadResponse, LogUpdateRequest, LogUpdateResponse,
};
use crate::error::LogentriesResult;
use crate::http::LogentriesHttp;
use crate::network::LOGS_RESOURCE;

use reqwest::StatusCode;

#[derive(Debug, Clone)]
pub struct LogClient {
    pub(crate) http: LogentriesHttp,
}

impl LogClient {
    pub async fn create(&self, request: &LogCreateRequest) -> LogentriesResult<LogCreateResponse> {
        let url = self.http.url(LOGS_RESOURCE);
        let body = LogBody { log: &request.log };
        let bytes = self.http.post(&url, &body, StatusCode::CREATED).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn read(&self, request: &LogReadRequest) -> LogentriesResult<LogReadResponse> {
        let url = self.http.entity_url(LOGS_RESOURCE, &request.id)?;
        let bytes = self.http.get(&url, StatusCode::OK).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn update(&self, request: &LogUpdateRequest) -> LogentriesResult<LogUpdateResponse> {
        let url = self.http.entity_url(LOGS_RESOURCE, &request.id)?;
        let mut log = request.log.clone();
        log.id.get_or_insert_with(|| request.id.clone());

        let body = LogBody { log: &log };
        let bytes = self.http.put(&url, &body, StatusCode::OK).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn delete(&self, request: &LogDeleteRequest) -> LogentriesResult<bool> {
        let url = self.http.entity_url(LOGS_RESOURCE, &request.id)?;
        self.http.delete(&url, StatusCode::NO_CONTENT).await
    }
}
