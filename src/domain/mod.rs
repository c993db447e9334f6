//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Entity types as the service returns them
//! - `wire.rs` — Request/response envelopes
//! - `client.rs` — Sub-client that builds URLs and decodes responses

pub mod log;
pub mod log_set;
