//! Cache Store Module
//!
//! The process-wide lookup table: query string to last successful upstream payload.
//!
//! Keys are used verbatim (case-sensitive, unnormalized). Entries are only ever
//! overwritten, never removed; an expired entry stays in place until the next
//! successful fetch for its key replaces it. The table is not persisted and is
//! lost whenever the process restarts.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory lookup cache with a fixed freshness window.
#[derive(Debug)]
pub struct CacheStore {
    /// Query -> entry
    entries: HashMap<String, CacheEntry>,
    /// Hit/miss statistics
    stats: CacheStats,
    /// Freshness window applied to every entry
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Returns a copy of the cached payload for `key` if it is fresh at `now`.
    ///
    /// Records a hit or a miss. A stale entry is reported as a miss but is
    /// left in the table.
    pub fn get(&mut self, key: &str, now: Instant) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl, now) => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            Some(_) => {
                self.stats.record_stale();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores `payload` under `key`, replacing any previous entry.
    pub fn put(&mut self, key: String, payload: Value, stored_at: Instant) {
        self.entries.insert(key, CacheEntry::new(payload, stored_at));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Entry ==
    /// Looks at the raw entry for `key` without freshness checks or stats.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the number of entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(super::DEFAULT_TTL)
    }
}
