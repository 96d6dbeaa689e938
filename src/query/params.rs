//! Normalized search parameters and the page-window arithmetic.

use serde_json::json;

use super::DEFAULT_LIMIT;

/// A normalized list request: trimmed term, page >= 1, limit in 1..=100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchParams {
    pub fn new(query: impl Into<String>, page: u32, limit: u32) -> Self {
        Self {
            query: query.into(),
            page,
            limit,
        }
    }

    /// Number of records skipped before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Only the unfiltered first page at the default size is cached.
    pub fn is_cacheable(&self) -> bool {
        self.query.is_empty() && self.page == 1 && self.limit == DEFAULT_LIMIT
    }

    /// Canonical cache key: compact JSON of `{q, page, limit}`.
    pub fn cache_key(&self) -> String {
        json!({ "q": self.query, "page": self.page, "limit": self.limit }).to_string()
    }
}
