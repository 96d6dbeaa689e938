//! In-memory fallback repository
//!
//! Serves a fixed advocate list when no database is configured. Ids are
//! assigned 1..=N by position.

use async_trait::async_trait;

use super::{matches, seed, AdvocateRepository, SearchPage, SearchParams};
use crate::error::Result;
use crate::models::Advocate;

// == Memory Repository ==
/// Advocate records held in a vector, ordered by id.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    advocates: Vec<Advocate>,
}

impl MemoryRepository {
    /// Creates a repository from records, renumbering ids by position.
    pub fn new(advocates: Vec<Advocate>) -> Self {
        let advocates = advocates
            .into_iter()
            .enumerate()
            .map(|(i, mut a)| {
                a.id = i as i64 + 1;
                a
            })
            .collect();
        Self { advocates }
    }

    /// Creates a repository over the built-in fallback dataset.
    pub fn with_seed_data() -> Self {
        Self::new(seed::fallback_advocates())
    }

    pub fn len(&self) -> usize {
        self.advocates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advocates.is_empty()
    }
}

#[async_trait]
impl AdvocateRepository for MemoryRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn search(&self, params: &SearchParams) -> Result<SearchPage> {
        let filtered: Vec<&Advocate> = self
            .advocates
            .iter()
            .filter(|a| matches(a, &params.query))
            .collect();

        let total = filtered.len() as u64;
        let offset = usize::try_from(params.offset()).unwrap_or(usize::MAX);
        let data = filtered
            .into_iter()
            .skip(offset)
            .take(params.limit as usize)
            .cloned()
            .collect();

        Ok(SearchPage { data, total })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Advocate>> {
        let index = match usize::try_from(id.saturating_sub(1)) {
            Ok(index) => index,
            Err(_) => return Ok(None),
        };
        Ok(self.advocates.get(index).cloned())
    }
}
