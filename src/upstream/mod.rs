//! Upstream Module
//!
//! HTTP client for the external lookup API.

mod client;

pub use client::UpstreamClient;

// == Public Constants ==
/// Default lookup endpoint
pub const DEFAULT_UPSTREAM_URL: &str = "https://zaynix-api-osint.vercel.app/api/lookup";

/// Identifying `User-Agent` sent with every upstream request
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; LookupProxy/1.0)";
