//! Request and response envelopes for the logs resource.

use crate::domain::log::Log;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct LogCreateRequest {
    pub log: Log,
}

#[derive(Debug, Clone)]
pub struct LogReadRequest {
    pub id: String,
}

/// Replace the log `id` with `log`.
#[derive(Debug, Clone)]
pub struct LogUpdateRequest {
    pub id: String,
    pub log: Log,
}

#[derive(Debug, Clone)]
pub struct LogDeleteRequest {
    pub id: String,
}

/// Single-log body, `{"log": {...}}`, used in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponse {
    pub log: Log,
}

pub type LogCreateResponse = LogResponse;
pub type LogReadResponse = LogResponse;
pub type LogUpdateResponse = LogResponse;

#[derive(Debug, Serialize)]
pub(crate) struct LogBody<'a> {
    pub log: &'a Log,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_response_deserialize() {
        let json = r#"{"log": {"id": "abc", "name": "nginx"}}"#;
        let resp: LogResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.log.id.as_deref(), Some("abc"));
        assert_eq!(resp.log.name, "nginx");
    }

    #[test]
    fn test_log_body_envelope() {
        let log = Log::new("nginx");
        let json = serde_json::to_value(LogBody { log: &log }).unwrap();
        assert_eq!(json, serde_json::json!({"log": {"name": "nginx"}}));
    }
}
