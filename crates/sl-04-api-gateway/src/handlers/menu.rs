//! Menu Catalog routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use shared_types::{MenuItem, MenuItemId};
use sl_02_menu_catalog::MenuItemDraft;

use super::{body, query};
use crate::domain::ApiError;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: String,
}

fn id_param(params: Result<Query<IdQuery>, QueryRejection>) -> Result<MenuItemId, ApiError> {
    let id = query(params)?.id;
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::bad_request("id must not be empty"));
    }
    Ok(MenuItemId::from(id))
}

pub async fn add_menu_item(
    State(state): State<AppState>,
    payload: Result<Json<MenuItemDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let item = state.menu.create_menu_item(body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn get_menu_item(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = id_param(params)?;
    Ok(Json(state.menu.get_menu_item(&id).await?))
}

pub async fn get_all_menu_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.menu.list_menu_items().await?))
}

pub async fn update_menu_item(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<MenuItemDraft>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = id_param(params)?;
    Ok(Json(state.menu.update_menu_item(&id, body(payload)?).await?))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = id_param(params)?;
    let deleted = state.menu.delete_menu_item(&id).await?;
    Ok(Json(json!({ "id": id, "deleted": deleted })))
}
