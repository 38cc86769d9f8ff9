//! Request and Response models for the lookup proxy
//!
//! This module defines the DTOs used for query extraction and for the
//! JSON bodies the proxy produces itself (errors and operational endpoints).
//! Upstream payloads are passed through as raw `serde_json::Value`.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::LookupParams;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
