//! Shared newtypes used across the domain modules.

pub mod api_key;

pub use api_key::ApiKey;

use serde::{Deserialize, Serialize};

// ─── Link ────────────────────────────────────────────────────────────────────

/// Hypermedia link attached to logs and logsets by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub rel: String,
}
