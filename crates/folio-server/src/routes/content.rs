use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use folio_core::store;
use folio_core::types::EntityKind;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::require_admin;
use crate::error::AppError;
use crate::state::AppState;

fn parse_kind(raw: &str) -> Result<EntityKind, AppError> {
    Ok(EntityKind::from_str(raw)?)
}

/// GET /api/content/{kind} — active records in presentation order.
pub async fn list_active(
    State(app): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let kind = parse_kind(&kind)?;
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || store::fetch_active_json(&root, kind))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/admin/content/{kind} — every record, inactive included.
pub async fn admin_list(
    State(app): State<AppState>,
    Path(kind): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;
    let kind = parse_kind(&kind)?;
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || store::list_all_json(&root, kind))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// POST /api/admin/content/{kind} — persist a draft record.
pub async fn admin_create(
    State(app): State<AppState>,
    Path(kind): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;
    let kind = parse_kind(&kind)?;
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || store::insert_json(&root, kind, payload))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// PUT /api/admin/content/{kind}/{id} — replace a record.
pub async fn admin_update(
    State(app): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
    headers: HeaderMap,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;
    let kind = parse_kind(&kind)?;
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || store::update_json(&root, kind, id, payload))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// DELETE /api/admin/content/{kind}/{id}
pub async fn admin_delete(
    State(app): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;
    let kind = parse_kind(&kind)?;
    let root = app.root.clone();
    tokio::task::spawn_blocking(move || store::delete_json(&root, kind, id))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "deleted": id })))
}

#[derive(serde::Deserialize)]
pub struct ActiveBody {
    pub active: bool,
}

/// POST /api/admin/content/{kind}/{id}/active — show or hide a record.
pub async fn admin_set_active(
    State(app): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
    headers: HeaderMap,
    Json(body): Json<ActiveBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;
    let kind = parse_kind(&kind)?;
    let root = app.root.clone();
    let result =
        tokio::task::spawn_blocking(move || store::set_active_json(&root, kind, id, body.active))
            .await
            .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct OrderBody {
    pub order: i64,
}

/// PUT /api/admin/content/{kind}/{id}/order — set the manual position.
pub async fn admin_set_order(
    State(app): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
    headers: HeaderMap,
    Json(body): Json<OrderBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;
    let kind = parse_kind(&kind)?;
    let root = app.root.clone();
    let result =
        tokio::task::spawn_blocking(move || store::set_order_json(&root, kind, id, body.order))
            .await
            .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
