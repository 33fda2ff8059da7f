//! Health and metrics.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::domain::ApiError;
use crate::router::AppState;

/// 200 while the store answers, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.health.check().await;
    let code = if report.store_reachable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        code,
        Json(json!({
            "status": report.status.as_str(),
            "store": if report.store_reachable { "reachable" } else { "unreachable" },
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Prometheus text exposition.
pub async fn metrics() -> Result<impl IntoResponse, ApiError> {
    let text = shelf_telemetry::encode_metrics().map_err(|e| ApiError::internal(e.to_string()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        text,
    ))
}
