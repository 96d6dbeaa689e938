//! Cache Entry Module
//!
//! Defines a cached response body with its Cache-Control directive and expiry.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A serialized response body held until its expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized JSON body, returned verbatim on hit
    pub body: String,
    /// Cache-Control header value stored with the body
    pub cache_control: String,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    pub fn new(body: String, cache_control: String, ttl_seconds: u64) -> Self {
        let ttl_ms = ttl_seconds.saturating_mul(1000);
        Self {
            body,
            cache_control,
            expires_at: current_timestamp_ms().saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is live only while `expires_at > now`, so it is expired from
    /// the exact expiry instant onward.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
