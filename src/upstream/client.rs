//! Upstream Client
//!
//! Issues the single outbound GET for a cache miss. No retries, no timeout
//! beyond what the transport applies.

use reqwest::{header, Client};
use serde_json::Value;
use tracing::{error, info};

use super::{DEFAULT_UPSTREAM_URL, USER_AGENT};
use crate::error::{ProxyError, Result};

// == Upstream Client ==
/// Client for the external lookup API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_URL)
    }
}

impl UpstreamClient {
    /// Creates a client targeting `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client with a custom HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == Fetch ==
    /// Fetches the lookup result for `query`.
    ///
    /// Sends `?query=<query>&pretty=1` with the fixed proxy `User-Agent`.
    ///
    /// # Returns
    /// * `Ok(Value)` - The parsed upstream body, untouched
    /// * `Err(ProxyError::Upstream)` - Upstream answered with a non-2xx status
    /// * `Err(ProxyError::Transport)` - Request failed or the body was not JSON
    pub async fn fetch(&self, query: &str) -> Result<Value> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("query", query), ("pretty", "1")])
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("API returned status: {}", status.as_u16());
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await?;
        let count = results_count(&payload);
        info!("API response received, results count: {}", count);

        Ok(payload)
    }
}

/// `results_count` field of a lookup payload, 0 when absent.
fn results_count(payload: &Value) -> u64 {
    payload
        .get("results_count")
        .and_then(Value::as_u64)
        .unwrap_or(0)
}
