//! Route handlers, one module per subsystem.

pub mod ingredients;
pub mod menu;
pub mod orders;
pub mod system;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query};

use crate::domain::ApiError;

/// Unwraps a JSON body, turning a rejection into a 400 with `detail`.
pub(crate) fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(value)| value).map_err(ApiError::from)
}

/// Unwraps a query string, turning a rejection into a 400 with `detail`.
pub(crate) fn query<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    params.map(|Query(value)| value).map_err(ApiError::from)
}
