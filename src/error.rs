//! Error types for the lookup proxy
//!
//! Every failure is rendered as a JSON body; nothing here is ever cached.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Proxy Error Enum ==
/// Unified error type for the lookup proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Caller supplied no usable query
    #[error("{0}")]
    BadRequest(String),

    /// Upstream answered with a non-success status
    #[error("External API error: status {status}")]
    Upstream { status: u16 },

    /// Upstream unreachable or returned an unparseable body
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Transport(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ProxyError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            ProxyError::Upstream { status } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorResponse::upstream(status),
            ),
            ProxyError::Transport(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(msg),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
