//! Response DTOs for the directory API
//!
//! Defines the structure of outgoing HTTP response bodies. The list body is
//! also deserialized by the client session.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::models::Advocate;

/// Pagination metadata attached to every list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Number of records matching the filter
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    /// `max(1, ceil(total / limit))`
    pub total_pages: u64,
}

impl PageMeta {
    /// Builds metadata, deriving the page count from `total` and `limit`.
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        let limit_u64 = u64::from(limit.max(1));
        Self {
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit_u64).max(1),
        }
    }
}

/// Response body for the list operation (GET /api/advocates)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Advocate>,
    pub meta: PageMeta,
}

/// Response body for the detail operation (GET /api/advocates/:id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    pub data: Advocate,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries dropped after their TTL elapsed
    pub expirations: u64,
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
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Active record store ("memory" or "sqlite")
    pub backend: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(backend: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            backend: backend.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
