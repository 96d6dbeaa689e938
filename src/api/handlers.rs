//! API Handlers
//!
//! HTTP request handlers for each directory endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::cache::{CacheEntry, ResponseCache};
use crate::config::Config;
use crate::error::{DirectoryError, Result};
use crate::models::{
    parse_id, DetailResponse, HealthResponse, ListQuery, ListResponse, PageMeta, StatsResponse,
};
use crate::query::{create_repository, AdvocateRepository, SearchParams};

/// Query string as decoded pairs, or why it could not be read
type QueryPairs = std::result::Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Path id as text, or why it could not be read
type IdPath = std::result::Result<Path<String>, PathRejection>;

/// Application state shared across all handlers.
///
/// The repository is chosen once at startup; the response cache is an owned
/// object behind `Arc<RwLock<>>` rather than process-global state.
#[derive(Clone)]
pub struct AppState {
    /// Record store (in-memory fallback or SQLite)
    pub repository: Arc<dyn AdvocateRepository>,
    /// Response cache for the unfiltered first page
    pub cache: Arc<RwLock<ResponseCache>>,
}

impl AppState {
    /// Creates a new AppState from a repository and cache.
    pub fn new(repository: Arc<dyn AdvocateRepository>, cache: ResponseCache) -> Self {
        Self {
            repository,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Selects the repository backend and sizes the cache TTL.
    pub fn from_config(config: &Config) -> Result<Self> {
        let repository = create_repository(config)?;
        Ok(Self::new(repository, ResponseCache::new(config.cache_ttl)))
    }
}

/// Runs the query and wraps the page with its metadata.
async fn run_search(state: &AppState, params: &SearchParams) -> Result<ListResponse> {
    let page = state.repository.search(params).await?;
    Ok(ListResponse {
        data: page.data,
        meta: PageMeta::new(page.total, params.page, params.limit),
    })
}

/// Builds a JSON response from a cached entry, body untouched.
fn cached_response(entry: CacheEntry) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CACHE_CONTROL, entry.cache_control),
        ],
        entry.body,
    )
        .into_response()
}

/// Handler for GET /api/advocates
///
/// Searches and paginates advocates. The unfiltered first page at the default
/// size is served from the response cache while its entry is live.
///
/// The query string is read as raw pairs so repeated or malformed keys fall
/// back to defaults instead of rejecting the request.
pub async fn list_handler(State(state): State<AppState>, query: QueryPairs) -> Result<Response> {
    let raw = match query {
        Ok(Query(pairs)) => ListQuery::from_pairs(pairs),
        Err(rejection) => {
            debug!("unreadable query string, using defaults: {}", rejection);
            ListQuery::default()
        }
    };
    let params = raw.into_params();

    if !params.is_cacheable() {
        let body = run_search(&state, &params).await?;
        return Ok(Json(body).into_response());
    }

    let key = params.cache_key();
    if let Some(hit) = state.cache.write().await.get(&key) {
        return Ok(cached_response(hit));
    }

    debug!(key = %key, "computing cacheable page");
    let body = run_search(&state, &params).await?;
    let serialized =
        serde_json::to_string(&body).map_err(|e| DirectoryError::Internal(e.to_string()))?;
    let entry = state.cache.write().await.put(key, serialized);

    Ok(cached_response(entry))
}

/// Handler for GET /api/advocates/:id
///
/// Returns one advocate, 400 for a non-positive or non-integer id, 404 if absent.
pub async fn detail_handler(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<DetailResponse>> {
    let Path(raw_id) = path.map_err(|e| DirectoryError::InvalidId(e.body_text()))?;
    let id = parse_id(&raw_id).ok_or(DirectoryError::InvalidId(raw_id))?;

    let advocate = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or(DirectoryError::NotFound(id))?;

    Ok(Json(DetailResponse { data: advocate }))
}

/// Handler for GET /stats
///
/// Returns response cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.read().await.stats().into())
}

/// Handler for GET /health
///
/// Returns health status and the active backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.repository.backend()))
}
