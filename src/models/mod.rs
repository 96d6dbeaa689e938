//! Request and Response models for the directory API
//!
//! This module defines the advocate record and the DTOs used for
//! serializing/deserializing HTTP query strings and response bodies.

pub mod advocate;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use advocate::Advocate;
pub use requests::{parse_id, ListQuery};
pub use responses::{
    DetailResponse, ErrorResponse, HealthResponse, ListResponse, PageMeta, StatsResponse,
};
