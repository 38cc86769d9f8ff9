//! API Routes
//!
//! Configures the Axum router for the lookup proxy.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use super::handlers::{health_handler, lookup_handler, stats_handler, AppState};

/// Headers browser callers may send on cross-origin requests
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Operational paths, kept out of the way of lookup paths
pub const HEALTH_PATH: &str = "/_proxy/health";
pub const STATS_PATH: &str = "/_proxy/stats";

/// Creates the main router.
///
/// # Endpoints
/// - `GET /_proxy/health` - Health check endpoint
/// - `GET /_proxy/stats` - Cache statistics
/// - anything else - Lookup (`?query=`), or pre-flight for OPTIONS
///
/// Other methods on the operational paths fall through to the lookup
/// handler, so they never produce a bare 405.
///
/// # Middleware
/// - CORS: every response carries the allow-origin and allow-headers pair
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_handler).fallback(lookup_handler))
        .route(STATS_PATH, get(stats_handler).fallback(lookup_handler))
        .fallback(lookup_handler)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
