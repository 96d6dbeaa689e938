//! Query Module
//!
//! Search and pagination over advocate records. Two interchangeable
//! backends implement [`AdvocateRepository`]: an in-memory fallback dataset
//! and a SQLite store. Both filter through [`contains_ignore_case`], so a
//! given dataset yields identical pages from either.

mod memory;
mod params;
pub mod seed;
mod sqlite;


use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::models::Advocate;

// Re-export public types
pub use memory::MemoryRepository;
pub use params::SearchParams;
pub use sqlite::SqliteRepository;

// == Public Constants ==
/// Page size used when none is given
pub const DEFAULT_LIMIT: u32 = 20;

/// Largest accepted page size
pub const MAX_LIMIT: u32 = 100;

// == Search Page ==
/// One page of matches plus the total match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub data: Vec<Advocate>,
    pub total: u64,
}

// == Repository Trait ==
/// Read-only access to advocate records.
#[async_trait]
pub trait AdvocateRepository: Send + Sync {
    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Returns the requested page of matches ordered by id, and the match count.
    async fn search(&self, params: &SearchParams) -> Result<SearchPage>;

    /// Looks up a single advocate by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Advocate>>;
}

/// Case-insensitive substring test shared by both backends.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns true when `advocate` matches the search term.
///
/// An empty term matches everything.
pub fn matches(advocate: &Advocate, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    contains_ignore_case(&advocate.full_name(), term)
        || contains_ignore_case(&advocate.first_name, term)
        || contains_ignore_case(&advocate.last_name, term)
        || contains_ignore_case(&advocate.city, term)
        || contains_ignore_case(&advocate.degree, term)
        || advocate
            .specialties
            .iter()
            .any(|s| contains_ignore_case(s, term))
}

// == Factory ==
/// Creates the repository selected by configuration.
///
/// Without a database URL the fixed seed list is served from memory.
/// Otherwise the SQLite store is opened, and seeded with synthetic rows
/// when `seed_count` is set and the table is empty.
pub fn create_repository(config: &Config) -> Result<Arc<dyn AdvocateRepository>> {
    match &config.database_url {
        None => {
            let repo = MemoryRepository::with_seed_data();
            info!(
                "No DATABASE_URL configured, serving {} fallback advocates from memory",
                repo.len()
            );
            Ok(Arc::new(repo))
        }
        Some(url) => {
            let repo = SqliteRepository::open(url)?;
            if let Some(count) = config.seed_count {
                let inserted = repo.seed_if_empty(&seed::synthetic_advocates(count))?;
                if inserted > 0 {
                    info!("Seeded {} synthetic advocates", inserted);
                }
            }
            info!("Using SQLite store at {}", url);
            Ok(Arc::new(repo))
        }
    }
}
