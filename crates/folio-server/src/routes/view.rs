use axum::extract::State;
use axum::Json;
use folio_core::config::SiteConfig;
use folio_core::view::LandingView;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/view/landing — everything the landing page renders, one pass.
/// Sections degrade independently; only a missing workspace is an error.
pub async fn landing(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = SiteConfig::load(&root)?;
        let view = LandingView::assemble(&root, &config);
        Ok::<_, folio_core::FolioError>(serde_json::to_value(view)?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
