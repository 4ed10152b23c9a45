use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use folio_core::profile::Profile;

use crate::auth::require_admin;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/profile — the owner's profile, or JSON null before one is set.
pub async fn get_profile(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let profile = Profile::load(&root)?;
        Ok::<_, folio_core::FolioError>(serde_json::to_value(profile)?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// PUT /api/admin/profile — replace the profile.
pub async fn put_profile(
    State(app): State<AppState>,
    headers: HeaderMap,
    Json(profile): Json<Profile>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let stored = Profile::set(&root, profile)?;
        Ok::<_, folio_core::FolioError>(serde_json::to_value(stored)?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
