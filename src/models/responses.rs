//! Response DTOs for the lookup proxy
//!
//! Defines the bodies the proxy generates on its own. Successful lookups
//! return the upstream payload verbatim and have no DTO here.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /_proxy/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups served from cache
    pub hits: u64,
    /// Lookups that went upstream
    pub misses: u64,
    /// Misses caused by an expired entry
    pub stale: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            stale: stats.stale,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /_proxy/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
///
/// `status` is set only for forwarded upstream failures and `message`
/// only for internal failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    /// Error summary
    pub error: String,
    /// Upstream HTTP status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Diagnostic detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Creates a plain `{"error": ...}` body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            message: None,
        }
    }

    /// Body for an upstream non-success status
    pub fn upstream(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::new("External API error")
        }
    }

    /// Body for a transport or unexpected failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new("Internal server error")
        }
    }
}
