//! Advocate Directory - A searchable advocate directory service
//!
//! Serves advocate records with case-insensitive search, pagination and a
//! TTL response cache, from either an in-memory dataset or a SQLite store.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
