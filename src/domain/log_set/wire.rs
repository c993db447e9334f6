//! Request and response envelopes for the logsets resource.

use crate::domain::log_set::LogSet;
use serde::{Deserialize, Serialize};

/// List every logset on the account.
#[derive(Debug, Clone, Default)]
pub struct LogSetsReadRequest {}

/// REST response for the logsets list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSetsReadResponse {
    #[serde(rename = "logsets")]
    pub log_sets: Vec<LogSet>,
}

#[derive(Debug, Clone)]
pub struct LogSetCreateRequest {
    pub log_set: LogSet,
}

#[derive(Debug, Clone)]
pub struct LogSetReadRequest {
    pub id: String,
}

/// Replace the logset `id` with `log_set`.
#[derive(Debug, Clone)]
pub struct LogSetUpdateRequest {
    pub id: String,
    pub log_set: LogSet,
}

#[derive(Debug, Clone)]
pub struct LogSetDeleteRequest {
    pub id: String,
}

/// Single-logset body, `{"logset": {...}}`, used in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSetResponse {
    #[serde(rename = "logset")]
    pub log_set: LogSet,
}

pub type LogSetCreateResponse = LogSetResponse;
pub type LogSetReadResponse = LogSetResponse;
pub type LogSetUpdateResponse = LogSetResponse;

#[derive(Debug, Serialize)]
pub(crate) struct LogSetBody<'a> {
    #[serde(rename = "logset")]
    pub log_set: &'a LogSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logsets_response_deserialize() {
        let json = r#"{"logsets": [{"name": "a"}, {"name": "b"}]}"#;
        let resp: LogSetsReadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.log_sets, vec![LogSet::new("a"), LogSet::new("b")]);
    }

    #[test]
    fn test_logsets_response_requires_key() {
        let result = serde_json::from_str::<LogSetsReadResponse>(r#"{"sets": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_logset_body_envelope() {
        let log_set = LogSet {
            description: Some("edge".to_string()),
            ..LogSet::new("cdn")
        };
        let json = serde_json::to_value(LogSetBody { log_set: &log_set }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"logset": {"name": "cdn", "description": "edge"}})
        );
    }
}
