//! Cache Entry Module
//!
//! Defines a single cached upstream response and its freshness check.

use std::time::{Duration, Instant};

use serde_json::Value;

// == Cache Entry ==
/// An upstream payload together with the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The upstream response body, passed through untouched
    pub payload: Value,
    /// Monotonic timestamp of the write
    pub stored_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stored at the given instant.
    pub fn new(payload: Value, stored_at: Instant) -> Self {
        Self { payload, stored_at }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still within its TTL at `now`.
    ///
    /// Boundary condition: an entry is fresh only while `now - stored_at < ttl`.
    /// Once the full TTL has elapsed the entry is stale, so a zero TTL means
    /// nothing is ever served from cache.
    pub fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) < ttl
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    ///
    /// Saturates to zero if `now` is earlier than `stored_at`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }
}
