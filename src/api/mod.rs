//! API Module
//!
//! HTTP handlers and routing for the directory REST API.
//!
//! # Endpoints
//! - `GET /api/advocates` - Search and paginate advocates
//! - `GET /api/advocates/:id` - Fetch one advocate
//! - `GET /stats` - Response cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
