//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint, against both the
//! in-memory fallback and the SQLite store.

use std::sync::Arc;
use std::time::Duration;

use advocate_directory::{
    api::create_router,
    cache::ResponseCache,
    error::{DirectoryError, Result},
    models::Advocate,
    query::{
        seed, AdvocateRepository, MemoryRepository, SearchPage, SearchParams, SqliteRepository,
    },
    AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn memory_app() -> Router {
    app_with(Arc::new(MemoryRepository::with_seed_data()), 300)
}

fn sqlite_app() -> Router {
    let repo = SqliteRepository::in_memory().unwrap();
    repo.insert_all(&seed::fallback_advocates()).unwrap();
    app_with(Arc::new(repo), 300)
}

fn app_with(repository: Arc<dyn AdvocateRepository>, ttl: u64) -> Router {
    create_router(AppState::new(repository, ResponseCache::new(ttl)))
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri).await;
    let status = response.status();
    let bytes = body_bytes(response).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn first_names(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["firstName"].as_str().unwrap().to_string())
        .collect()
}

/// Repository whose every call fails.
struct BrokenRepository;

#[async_trait]
impl AdvocateRepository for BrokenRepository {
    fn backend(&self) -> &'static str {
        "broken"
    }

    async fn search(&self, _params: &SearchParams) -> Result<SearchPage> {
        Err(DirectoryError::Internal("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Advocate>> {
        Err(DirectoryError::Internal("connection refused".to_string()))
    }
}

// == List Endpoint Tests ==

#[tokio::test]
async fn test_list_first_page_of_fallback() {
    let app = app_with(
        Arc::new(MemoryRepository::new(seed::synthetic_advocates(45))),
        300,
    );

    let (status, json) = get_json(&app, "/api/advocates?page=1&limit=20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 20);
    assert_eq!(json["data"][0]["id"], 1);
    assert_eq!(json["data"][19]["id"], 20);
    assert_eq!(json["meta"]["total"], 45);
    assert_eq!(json["meta"]["page"], 1);
    assert_eq!(json["meta"]["limit"], 20);
    assert_eq!(json["meta"]["totalPages"], 3);
}

#[tokio::test]
async fn test_list_clamps_inputs() {
    let app = memory_app();

    let (status, json) = get_json(&app, "/api/advocates?page=0&limit=1000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["meta"]["page"], 1);
    assert_eq!(json["meta"]["limit"], 100);

    let (_, json) = get_json(&app, "/api/advocates?page=abc&limit=xyz").await;
    assert_eq!(json["meta"]["page"], 1);
    assert_eq!(json["meta"]["limit"], 20);

    let (_, json) = get_json(&app, "/api/advocates?limit=0").await;
    assert_eq!(json["meta"]["limit"], 1);
    assert_eq!(json["meta"]["totalPages"], 15);

    // Repeated keys keep their first value
    let (status, json) = get_json(&app, "/api/advocates?page=1&page=2&limit=5&limit=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["meta"]["page"], 1);
    assert_eq!(json["meta"]["limit"], 5);
    assert_eq!(json["data"][0]["id"], 1);

    let (status, json) = get_json(&app, "/api/advocates?searchQuery=jane&searchQuery=john").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first_names(&json), vec!["Jane"]);
}

#[tokio::test]
async fn test_list_page_beyond_end() {
    let (status, json) = get_json(&memory_app(), "/api/advocates?page=9").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["data"].as_array().unwrap().is_empty());
    assert_eq!(json["meta"]["total"], 15);
    assert_eq!(json["meta"]["totalPages"], 1);
}

#[tokio::test]
async fn test_search_first_name_substring() {
    for app in [memory_app(), sqlite_app()] {
        let (_, json) = get_json(&app, "/api/advocates?searchQuery=JaN").await;
        assert_eq!(first_names(&json), vec!["Jane"]);
        assert_eq!(json["meta"]["total"], 1);
    }
}

#[tokio::test]
async fn test_search_full_name_and_city() {
    for app in [memory_app(), sqlite_app()] {
        let (_, json) = get_json(&app, "/api/advocates?searchQuery=michael%20brown").await;
        assert_eq!(first_names(&json), vec!["Michael"]);

        let (_, json) = get_json(&app, "/api/advocates?searchQuery=%20fort%20worth%20").await;
        assert_eq!(first_names(&json), vec!["Amanda"]);
    }
}

#[tokio::test]
async fn test_search_unique_specialty() {
    for app in [memory_app(), sqlite_app()] {
        let (_, json) = get_json(&app, "/api/advocates?searchQuery=domestic").await;
        assert_eq!(json["meta"]["total"], 1);
        assert_eq!(json["data"][0]["lastName"], "Hall");
        assert_eq!(json["data"][0]["specialties"][0], "Domestic abuse");
    }
}

#[tokio::test]
async fn test_backends_return_identical_bodies() {
    let memory = memory_app();
    let sqlite = sqlite_app();

    for uri in [
        "/api/advocates",
        "/api/advocates?page=2&limit=6",
        "/api/advocates?searchQuery=san&limit=3",
        "/api/advocates?searchQuery=PhD&page=2&limit=2",
        "/api/advocates?searchQuery=nutrition",
        "/api/advocates?searchQuery=zzz",
        "/api/advocates/4",
    ] {
        let (memory_status, memory_json) = get_json(&memory, uri).await;
        let (sqlite_status, sqlite_json) = get_json(&sqlite, uri).await;
        assert_eq!(memory_status, sqlite_status, "status mismatch for {uri}");
        assert_eq!(memory_json, sqlite_json, "body mismatch for {uri}");
    }
}

// == Cache Tests ==

#[tokio::test]
async fn test_default_page_is_cached() {
    let app = memory_app();

    let first = get(&app, "/api/advocates?page=1&limit=20").await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(
        first.headers()[header::CACHE_CONTROL],
        "public, max-age=300, stale-while-revalidate=300"
    );
    let first_body = body_bytes(first).await;

    // Same normalized shape, spelled differently
    let second = get(&app, "/api/advocates").await;
    assert_eq!(
        second.headers()[header::CACHE_CONTROL],
        "public, max-age=300, stale-while-revalidate=300"
    );
    assert_eq!(second.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(body_bytes(second).await, first_body);

    let (_, stats) = get_json(&app, "/stats").await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["total_entries"], 1);
}

#[tokio::test]
async fn test_other_shapes_bypass_cache() {
    let app = memory_app();

    for uri in [
        "/api/advocates?limit=25",
        "/api/advocates?page=2",
        "/api/advocates?searchQuery=jane",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers().get(header::CACHE_CONTROL).is_none(),
            "{uri} should not carry Cache-Control"
        );
    }

    let (_, stats) = get_json(&app, "/stats").await;
    assert_eq!(stats["hits"], 0);
    assert_eq!(stats["misses"], 0);
    assert_eq!(stats["total_entries"], 0);
}

#[tokio::test]
async fn test_cached_entry_expires() {
    let app = app_with(Arc::new(MemoryRepository::with_seed_data()), 1);

    let response = get(&app, "/api/advocates").await;
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=1, stale-while-revalidate=300"
    );

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let response = get(&app, "/api/advocates").await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, stats) = get_json(&app, "/stats").await;
    assert_eq!(stats["hits"], 0);
    assert_eq!(stats["misses"], 2);
    assert_eq!(stats["expirations"], 1);
    assert_eq!(stats["total_entries"], 1);
}

// == Detail Endpoint Tests ==

#[tokio::test]
async fn test_detail_success() {
    for app in [memory_app(), sqlite_app()] {
        let (status, json) = get_json(&app, "/api/advocates/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["data"]["firstName"], "John");
        assert_eq!(json["data"]["phoneNumber"], 5551234567_i64);
    }
}

#[tokio::test]
async fn test_detail_invalid_id() {
    let app = memory_app();

    for uri in [
        "/api/advocates/0",
        "/api/advocates/-1",
        "/api/advocates/abc",
        "/api/advocates/1.5",
        "/api/advocates/%FF",
    ] {
        let (status, json) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["error"], "Invalid id");
    }
}

#[tokio::test]
async fn test_detail_not_found() {
    for app in [memory_app(), sqlite_app()] {
        let (status, json) = get_json(&app, "/api/advocates/999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Not Found");
    }
}

// == Failure Tests ==

#[tokio::test]
async fn test_unexpected_failure_is_generic_500() {
    let app = app_with(Arc::new(BrokenRepository), 300);

    for uri in ["/api/advocates", "/api/advocates?searchQuery=x", "/api/advocates/3"] {
        let (status, json) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Internal Server Error" }));
    }

    // A failed computation leaves nothing cached
    let (_, stats) = get_json(&app, "/stats").await;
    assert_eq!(stats["total_entries"], 0);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(&memory_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["backend"], "memory");
    assert!(json.get("timestamp").is_some());

    let (_, json) = get_json(&sqlite_app(), "/health").await;
    assert_eq!(json["backend"], "sqlite");
}
