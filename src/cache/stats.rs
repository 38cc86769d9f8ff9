//! Cache Statistics Module
//!
//! Tracks lookup hits and misses against the cache table.

use serde::Serialize;

// == Cache Stats ==
/// Hit/miss counters for the lookup cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups served from a fresh entry
    pub hits: u64,
    /// Lookups that had to go upstream (absent or stale entry)
    pub misses: u64,
    /// Subset of misses where a stale entry was present
    pub stale: u64,
    /// Current number of entries in the table
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Stale ==
    /// Counts a miss caused by an expired entry.
    pub fn record_stale(&mut self) {
        self.misses += 1;
        self.stale += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
