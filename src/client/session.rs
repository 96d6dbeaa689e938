//! Search session state container.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::source::AdvocateSource;
use crate::models::Advocate;
use crate::query::DEFAULT_LIMIT;

/// Fixed page size used by the session
pub const PAGE_SIZE: u32 = DEFAULT_LIMIT;

// == Search State ==
/// Everything a directory view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub advocates: Vec<Advocate>,
    /// True while the latest request is outstanding
    pub loading: bool,
    /// Message from the latest failed request
    pub error: Option<String>,
    pub search_query: String,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            advocates: Vec::new(),
            loading: false,
            error: None,
            search_query: String::new(),
            page: 1,
            limit: PAGE_SIZE,
            total: 0,
            total_pages: 1,
        }
    }
}

/// What happened to a navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was applied to the state
    Loaded,
    /// The request failed and the error was applied to the state
    Failed,
    /// A newer request was issued, so this one was dropped
    Superseded,
    /// Nothing to do (already at the first or last page)
    Skipped,
}

// == Search Session ==
/// Holds the current query, page and results, and fetches on navigation.
///
/// Each request takes a ticket from a monotonically increasing counter when it
/// is issued. A response is applied only while its ticket is still the newest,
/// so the last issued action wins regardless of response arrival order.
pub struct SearchSession<S> {
    source: S,
    state: RwLock<SearchState>,
    generation: AtomicU64,
}

impl<S: AdvocateSource> SearchSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(SearchState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Initial load: unfiltered first page.
    pub async fn load(&self) -> FetchOutcome {
        let ticket = self.issue();
        self.fetch(ticket, String::new(), 1).await
    }

    /// Sets the search text (trimmed) and fetches its first page.
    pub async fn search(&self, text: &str) -> FetchOutcome {
        let ticket = self.issue();
        let query = text.trim().to_string();
        {
            let mut state = self.state.write().await;
            if self.is_current(ticket) {
                state.search_query = query.clone();
            }
        }
        self.fetch(ticket, query, 1).await
    }

    /// Fetches page `page` (at least 1) of the current search.
    pub async fn go_to_page(&self, page: u32) -> FetchOutcome {
        let ticket = self.issue();
        let query = self.state.read().await.search_query.clone();
        self.fetch(ticket, query, page.max(1)).await
    }

    /// Moves forward one page unless already on the last page.
    pub async fn next_page(&self) -> FetchOutcome {
        let (page, total_pages) = {
            let state = self.state.read().await;
            (state.page, state.total_pages)
        };
        if u64::from(page) >= total_pages {
            return FetchOutcome::Skipped;
        }
        self.go_to_page(page.saturating_add(1)).await
    }

    /// Moves back one page unless already on the first page.
    pub async fn prev_page(&self) -> FetchOutcome {
        let page = self.state.read().await.page;
        if page <= 1 {
            return FetchOutcome::Skipped;
        }
        self.go_to_page(page - 1).await
    }

    /// Clears the search text and returns to the first page.
    pub async fn reset(&self) -> FetchOutcome {
        self.search("").await
    }

    fn issue(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    async fn fetch(&self, ticket: u64, query: String, page: u32) -> FetchOutcome {
        {
            let mut state = self.state.write().await;
            if !self.is_current(ticket) {
                return FetchOutcome::Superseded;
            }
            state.loading = true;
            state.error = None;
        }

        debug!(ticket, query = %query, page, "fetching advocates");
        let result = self.source.fetch_page(&query, page, PAGE_SIZE).await;

        let mut state = self.state.write().await;
        if !self.is_current(ticket) {
            debug!(ticket, "discarding superseded response");
            return FetchOutcome::Superseded;
        }
        state.loading = false;

        match result {
            Ok(body) => {
                state.advocates = body.data;
                state.total = body.meta.total;
                state.total_pages = body.meta.total_pages;
                state.page = body.meta.page;
                FetchOutcome::Loaded
            }
            Err(err) => {
                warn!("advocate fetch failed: {}", err);
                state.error = Some(err.to_string());
                state.advocates.clear();
                state.total = 0;
                state.total_pages = 1;
                FetchOutcome::Failed
            }
        }
    }
}
