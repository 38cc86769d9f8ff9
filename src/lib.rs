//! Lookup Proxy - a caching proxy in front of an external lookup API
//!
//! Serves repeated identical lookups from a short-lived in-memory cache and
//! marks each response with `X-Cache: HIT` or `X-Cache: MISS`.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::ProxyError;
