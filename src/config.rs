//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use tracing::warn;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string; `None` selects the in-memory fallback dataset
    pub database_url: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached list responses
    pub cache_ttl: u64,
    /// Background cache sweep interval in seconds
    pub cleanup_interval: u64,
    /// Number of synthetic advocates to seed into an empty database
    pub seed_count: Option<usize>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - SQLite location (default: unset, in-memory fallback)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Response cache TTL in seconds (default: 300)
    /// - `CACHE_CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `SEED_COUNT` - Synthetic rows to insert into an empty table (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cleanup_interval: parse_var("CACHE_CLEANUP_INTERVAL")
                .unwrap_or(defaults.cleanup_interval),
            seed_count: parse_var("SEED_COUNT"),
        }
    }

    /// Returns true when no database is configured.
    pub fn uses_fallback(&self) -> bool {
        self.database_url.is_none()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            server_port: 3000,
            cache_ttl: crate::cache::DEFAULT_TTL_SECS,
            cleanup_interval: 60,
            seed_count: None,
        }
    }
}

/// Reads and parses an environment variable, warning when it is present but malformed.
fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Invalid {key} value {raw:?}, using default");
            None
        }
    }
}
