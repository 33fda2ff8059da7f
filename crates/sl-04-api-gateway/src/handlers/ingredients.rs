//! Ingredient Ledger routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use chrono::Duration;
use serde::Deserialize;
use serde_json::{json, Value};
use shared_types::{Ingredient, Sku};
use sl_01_ingredient_ledger::{parse_sku, IngredientDraft, ResupplyEntry, ResupplyReport};

use super::{body, query};
use crate::domain::ApiError;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct SkuQuery {
    pub sku: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    /// Look-ahead in days; the configured default when absent.
    pub days: Option<i64>,
}

fn sku_param(params: Result<Query<SkuQuery>, QueryRejection>) -> Result<Sku, ApiError> {
    Ok(parse_sku(&query(params)?.sku)?)
}

pub async fn add_ingredient(
    State(state): State<AppState>,
    payload: Result<Json<IngredientDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Ingredient>), ApiError> {
    let record = state.ledger.create_ingredient(body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_ingredient(
    State(state): State<AppState>,
    params: Result<Query<SkuQuery>, QueryRejection>,
) -> Result<Json<Ingredient>, ApiError> {
    let sku = sku_param(params)?;
    Ok(Json(state.ledger.get_ingredient(&sku).await?))
}

pub async fn get_all_ingredients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    Ok(Json(state.ledger.list_ingredients().await?))
}

/// The SKU is taken from the body.
pub async fn update_ingredient(
    State(state): State<AppState>,
    payload: Result<Json<IngredientDraft>, JsonRejection>,
) -> Result<Json<Ingredient>, ApiError> {
    let draft = body(payload)?;
    let sku = parse_sku(&draft.sku)?;
    Ok(Json(state.ledger.update_ingredient(&sku, draft).await?))
}

pub async fn delete_ingredient(
    State(state): State<AppState>,
    params: Result<Query<SkuQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let sku = sku_param(params)?;
    let deleted = state.ledger.delete_ingredient(&sku).await?;
    Ok(Json(json!({ "sku": sku, "deleted": deleted })))
}

pub async fn get_expired_ingredients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let today = state.ledger.today();
    Ok(Json(state.ledger.list_expired(today).await?))
}

pub async fn get_expiring_ingredients(
    State(state): State<AppState>,
    params: Result<Query<ExpiringQuery>, QueryRejection>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let horizon = match query(params)?.days {
        Some(days) if days < 0 => {
            return Err(ApiError::bad_request("days must not be negative"));
        }
        Some(days) => Duration::try_days(days)
            .ok_or_else(|| ApiError::bad_request(format!("days out of range: {}", days)))?,
        None => state.ledger.default_horizon(),
    };
    let today = state.ledger.today();
    Ok(Json(state.ledger.list_expiring_soon(today, horizon).await?))
}

pub async fn get_low_stock_ingredients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    Ok(Json(state.ledger.list_low_stock().await?))
}

pub async fn resupply_ingredients(
    State(state): State<AppState>,
    payload: Result<Json<Vec<ResupplyEntry>>, JsonRejection>,
) -> Result<Json<ResupplyReport>, ApiError> {
    Ok(Json(state.ledger.resupply(body(payload)?).await?))
}
