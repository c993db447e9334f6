//! HTTP transport layer — `LogentriesHttp`.

pub mod client;

pub use client::LogentriesHttp;
