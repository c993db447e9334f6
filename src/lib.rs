//! # Logentries
//!
//! An async Rust client for the Logentries management REST API, covering
//! the `logs` and `logsets` resources.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Entity types, request/response envelopes, error taxonomy
//! 2. **HTTP** — `LogentriesHttp`: one request per call, status classification
//! 3. **High-Level Client** — `LogentriesClient` with one sub-client per resource
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use logentries::prelude::*;
//!
//! let client = LogentriesClient::new("my-api-key")?;
//!
//! let resp = client.log_sets.read(&LogSetsReadRequest::default()).await?;
//! for log_set in resp.log_sets {
//!     println!("{}", log_set.name);
//! }
//!
//! match client.log.read(&LogReadRequest { id: "abc".into() }).await {
//!     Ok(resp) => println!("found {}", resp.log.name),
//!     Err(e) if e.is_not_found() => println!("no such log"),
//!     Err(e) => return Err(e),
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules: entity types, envelopes, sub-clients.
pub mod domain;

/// Error taxonomy.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `LogentriesClient` — the primary entry point.
pub mod client;

pub use client::{LogentriesClient, LogentriesClientBuilder};
pub use error::{LogentriesError, LogentriesResult};

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::{ApiKey, Link};

    // Domain types — logset
    pub use crate::domain::log_set::wire::{
        LogSetCreateRequest, LogSetCreateResponse, LogSetDeleteRequest, LogSetReadRequest,
        LogSetReadResponse, LogSetResponse, LogSetUpdateRequest, LogSetUpdateResponse,
        LogSetsReadRequest, LogSetsReadResponse,
    };
    pub use crate::domain::log_set::{LogInfo, LogSet};

    // Domain types — log
    pub use crate::domain::log::wire::{
        LogCreateRequest, LogCreateResponse, LogDeleteRequest, LogReadRequest, LogReadResponse,
        LogResponse, LogUpdateRequest, LogUpdateResponse,
    };
    pub use crate::domain::log::{Log, LogSetInfo};

    // Errors
    pub use crate::error::{LogentriesError, LogentriesResult};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

    // Client + sub-clients
    pub use crate::client::{LogentriesClient, LogentriesClientBuilder};
    pub use crate::domain::log::client::LogClient;
    pub use crate::domain::log_set::client::{LogSetClient, LogSetsClient};
}
