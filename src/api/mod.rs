//! API Module
//!
//! HTTP handlers and routing for the lookup proxy.
//!
//! # Endpoints
//! - `GET|POST /*?query=` - Cached lookup against the external API
//! - `OPTIONS /*` - CORS pre-flight
//! - `GET /_proxy/stats` - Get cache statistics
//! - `GET /_proxy/health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
