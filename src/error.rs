//! Error types for the Logentries client.

use thiserror::Error;

/// Every failure a Logentries call can produce.
///
/// The variant is decided once, at the transport boundary, so callers can
/// branch on it directly (e.g. treat [`LogentriesError::NotFound`] as
/// "does not exist").
#[derive(Debug, Error)]
pub enum LogentriesError {
    /// The service answered 404 for the requested resource.
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// The service answered with a status other than the expected one.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The request could not be completed (connect, DNS, timeout, request build).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rejected locally before any request was sent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LogentriesError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LogentriesError::NotFound { .. })
    }

    /// HTTP status carried by the error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            LogentriesError::NotFound { .. } => Some(404),
            LogentriesError::UnexpectedStatus { status, .. } => Some(*status),
            LogentriesError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type LogentriesResult<T> = Result<T, LogentriesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = LogentriesError::NotFound {
            url: "https://rest.logentries.com/management/logs/abc".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("management/logs/abc"));
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = LogentriesError::UnexpectedStatus {
            status: 500,
            body: "boom".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "Unexpected status 500: boom");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: LogentriesError = serde_err.into();
        assert!(matches!(err, LogentriesError::Decode(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_invalid_config_has_no_status() {
        let err = LogentriesError::InvalidConfig("empty id".to_string());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("empty id"));
    }
}
