//! Network constants for the Logentries API.

use std::time::Duration;

/// Default REST API origin.
pub const DEFAULT_API_URL: &str = "https://rest.logentries.com";

/// Resource path for logs.
pub const LOGS_RESOURCE: &str = "management/logs";

/// Resource path for logsets.
pub const LOGSETS_RESOURCE: &str = "management/logsets";

/// Header carrying the account API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
