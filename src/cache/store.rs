//! Response Cache Module
//!
//! Keyed store of serialized list responses with TTL expiry. Expired entries
//! are evicted lazily on read and by the periodic sweep.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, STALE_WHILE_REVALIDATE_SECS};

// == Response Cache ==
/// Owned response cache, shared through application state.
#[derive(Debug)]
pub struct ResponseCache {
    /// Cache key to stored response
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds applied to every entry
    ttl: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl` seconds.
    pub fn new(ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    /// Cache-Control directive attached to cached responses.
    pub fn cache_control(&self) -> String {
        format!(
            "public, max-age={}, stale-while-revalidate={}",
            self.ttl, STALE_WHILE_REVALIDATE_SECS
        )
    }

    // == Get ==
    /// Returns the live entry for `key`.
    ///
    /// An expired entry is removed and the lookup counts as a miss.
    pub fn get(&mut self, key: &str) -> Option<CacheEntry> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let entry = entry.clone();
                self.stats.record_hit();
                debug!(key, "response cache hit");
                Some(entry)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                debug!(key, "response cache entry expired");
                None
            }
            None => {
                self.stats.record_miss();
                debug!(key, "response cache miss");
                None
            }
        }
    }

    // == Put ==
    /// Stores a serialized body under `key`, replacing any previous entry.
    ///
    /// Returns the stored entry so the caller can respond with it directly.
    pub fn put(&mut self, key: String, body: String) -> CacheEntry {
        let entry = CacheEntry::new(body, self.cache_control(), self.ttl);
        self.entries.insert(key, entry.clone());
        self.stats.set_total_entries(self.entries.len());
        entry
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
