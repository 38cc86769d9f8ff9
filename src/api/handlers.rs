//! API Handlers
//!
//! HTTP request handlers for the lookup endpoint and the operational endpoints.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::cache::{CacheStatus, CacheStore, CACHE_HEADER};
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{HealthResponse, LookupParams, StatsResponse};
use crate::upstream::UpstreamClient;

/// Application state shared across all handlers.
///
/// Owns the process-wide cache table and the upstream client. The cache
/// lives only as long as the process; a restart starts from an empty table.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache table
    pub cache: Arc<RwLock<CacheStore>>,
    /// External lookup API client
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Creates a new AppState from a cache store and an upstream client.
    pub fn new(cache: CacheStore, upstream: UpstreamClient) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            upstream,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CacheStore::new(config.ttl()),
            UpstreamClient::new(config.upstream_url.clone()),
        )
    }

    // == Lookup ==
    /// Resolves `query` from cache or upstream.
    ///
    /// The lock is released while the upstream call is in flight, so
    /// concurrent misses for the same query each fetch and the last write
    /// wins. Failed fetches leave the cache untouched.
    pub async fn lookup(&self, query: &str) -> Result<(Value, CacheStatus)> {
        let cached = self.cache.write().await.get(query, Instant::now());
        if let Some(payload) = cached {
            info!("Cache hit for query: {}", query);
            return Ok((payload, CacheStatus::Hit));
        }

        info!("Cache miss for query: {}, fetching from API...", query);

        let payload = self.upstream.fetch(query).await.inspect_err(|err| {
            if let ProxyError::Transport(message) = err {
                error!("Error in lookup: {}", message);
            }
        })?;

        self.cache
            .write()
            .await
            .put(query.to_string(), payload.clone(), Instant::now());

        Ok((payload, CacheStatus::Miss))
    }
}

/// Handler for every path other than the operational endpoints.
///
/// OPTIONS is answered as a CORS pre-flight; any other method performs a
/// lookup of `?query=` (first occurrence if repeated). Request bodies are
/// ignored.
pub async fn lookup_handler(
    State(state): State<AppState>,
    method: Method,
    pairs: Option<Query<Vec<(String, String)>>>,
) -> Result<Response> {
    if method == Method::OPTIONS {
        return Ok(preflight_handler().await.into_response());
    }

    let params = pairs
        .map(|Query(pairs)| LookupParams::from_pairs(pairs))
        .unwrap_or_default();
    let query = params.validate().map_err(|msg| {
        info!("No query provided");
        ProxyError::BadRequest(msg)
    })?;

    info!("Looking up query: {}", query);
    let (payload, status) = state.lookup(query).await?;

    Ok(([(CACHE_HEADER, status.as_str())], Json(payload)).into_response())
}

/// Handler for CORS pre-flight requests
///
/// Empty 200; the permission headers are added by the router.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// Handler for GET /_proxy/stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /_proxy/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_for(server: &MockServer, ttl: Duration) -> AppState {
        AppState::new(
            CacheStore::new(ttl),
            UpstreamClient::new(format!("{}/api/lookup", server.uri())),
        )
    }

    #[tokio::test]
    async fn test_lookup_miss_then_hit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results_count": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let state = state_for(&server, Duration::from_secs(300));

        let (payload, status) = assert_ok!(state.lookup("12345").await);
        assert_eq!(status, CacheStatus::Miss);
        assert_eq!(payload, json!({"results_count": 1}));

        let (payload, status) = assert_ok!(state.lookup("12345").await);
        assert_eq!(status, CacheStatus::Hit);
        assert_eq!(payload, json!({"results_count": 1}));
    }

    #[tokio::test]
    async fn test_lookup_zero_ttl_always_misses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let state = state_for(&server, Duration::ZERO);

        let (_, first) = assert_ok!(state.lookup("q").await);
        let (_, second) = assert_ok!(state.lookup("q").await);
        assert_eq!(first, CacheStatus::Miss);
        assert_eq!(second, CacheStatus::Miss);
        assert_eq!(state.cache.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_failure_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let state = state_for(&server, Duration::from_secs(300));

        let err = assert_err!(state.lookup("q").await);
        assert!(matches!(err, ProxyError::Upstream { status: 500 }));
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let server = MockServer::start().await;
        let state = state_for(&server, Duration::from_secs(300));

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_missing_query_is_bad_request() {
        let server = MockServer::start().await;
        let state = state_for(&server, Duration::from_secs(300));

        let result = lookup_handler(State(state.clone()), Method::GET, None).await;
        assert!(matches!(result, Err(ProxyError::BadRequest(_))));

        let empty = Query(vec![("query".to_string(), String::new())]);
        let result = lookup_handler(State(state), Method::POST, Some(empty)).await;
        assert!(matches!(result, Err(ProxyError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_repeated_query_uses_first_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("query", "111"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let state = state_for(&server, Duration::from_secs(300));
        let pairs = Query(vec![
            ("query".to_string(), "111".to_string()),
            ("query".to_string(), "222".to_string()),
        ]);

        let response =
            assert_ok!(lookup_handler(State(state.clone()), Method::GET, Some(pairs)).await);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_HEADER], "MISS");
        assert!(state.cache.read().await.entry("111").is_some());
        assert!(state.cache.read().await.entry("222").is_none());
    }
}
