//! Cache Module
//!
//! Provides the in-memory response cache with TTL expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Default entry lifetime in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;

/// `stale-while-revalidate` window advertised on cached responses
pub const STALE_WHILE_REVALIDATE_SECS: u64 = 300;
