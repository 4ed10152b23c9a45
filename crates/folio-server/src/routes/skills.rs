use axum::extract::State;
use axum::Json;
use folio_core::grouping::group_by_key;
use folio_core::skill::Skill;
use folio_core::store;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/skills/grouped — active skills bucketed by category, buckets in
/// first-seen order. The empty-collection fallback belongs to the landing
/// view; this endpoint reports exactly what is stored.
pub async fn grouped(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let skills = store::fetch_active::<Skill>(&root)?;
        let groups: Vec<serde_json::Value> = group_by_key(&skills, |s: &Skill| s.category.clone())
            .into_iter()
            .map(|(category, skills)| {
                serde_json::json!({
                    "category": category,
                    "skills": skills,
                })
            })
            .collect();
        Ok::<_, folio_core::FolioError>(serde_json::json!(groups))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
