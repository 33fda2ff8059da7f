//! Order Fulfillment routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use sl_03_order_fulfillment::{ConsumptionReport, OrderBatch};

use super::body;
use crate::domain::ApiError;
use crate::router::AppState;

pub async fn submit_orders(
    State(state): State<AppState>,
    payload: Result<Json<OrderBatch>, JsonRejection>,
) -> Result<Json<ConsumptionReport>, ApiError> {
    Ok(Json(state.orders.submit_orders(body(payload)?).await?))
}
