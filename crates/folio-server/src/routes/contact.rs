use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use folio_core::contact::{self, OutboxNotifier};
use uuid::Uuid;

use crate::auth::require_admin;
use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct ContactBody {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// POST /api/contact — store a visitor message and queue the notification.
pub async fn submit(
    State(app): State<AppState>,
    Json(body): Json<ContactBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let notifier = OutboxNotifier::new(&root);
        let stored = contact::submit(&root, &notifier, &body.name, &body.email, &body.message)?;
        Ok::<_, folio_core::FolioError>(serde_json::json!({
            "id": stored.id,
            "received_at": stored.received_at,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/admin/messages — the inbox, newest first.
pub async fn admin_list(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let messages = contact::list(&root)?;
        Ok::<_, folio_core::FolioError>(serde_json::to_value(messages)?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// DELETE /api/admin/messages/{id}
pub async fn admin_delete(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;
    let root = app.root.clone();
    tokio::task::spawn_blocking(move || contact::delete(&root, id))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "deleted": id })))
}
