//! Gateway error types.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shared_types::InventoryError;
use thiserror::Error;

/// Error returned by a handler: a status plus a `detail` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        let status = match &err {
            InventoryError::DuplicateKey { .. } => StatusCode::CONFLICT,
            InventoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            InventoryError::Validation(_) => StatusCode::BAD_REQUEST,
            InventoryError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            InventoryError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, detail = %self.detail, "Request failed");
        } else {
            tracing::debug!(status = %self.status, detail = %self.detail, "Request rejected");
        }
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Gateway lifecycle errors.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid gateway configuration: {0}")]
    Config(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Server(#[from] std::io::Error),
}
