use axum::extract::{Multipart, Path, State};
use axum::http::HeaderMap;
use axum::Json;
use folio_core::config::SiteConfig;
use folio_core::upload::store_upload;

use crate::auth::require_admin;
use crate::error::AppError;
use crate::state::AppState;

/// POST /api/admin/uploads/{bucket} — multipart upload. The first field
/// carrying a filename becomes the stored object; the response echoes the
/// public URL the asset will be served from.
pub async fn upload(
    State(app): State<AppState>,
    Path(bucket): Path<String>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&app.root, &headers)?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("malformed multipart body: {e}")))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(format!("failed reading upload: {e}")))?;

        let root = app.root.clone();
        let url = tokio::task::spawn_blocking(move || {
            let config = SiteConfig::load(&root)?;
            store_upload(&root, &bucket, &filename, &data, &config)
        })
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

        let content_type = mime_guess::from_path(&url).first_or_octet_stream();
        return Ok(Json(serde_json::json!({
            "url": url,
            "content_type": content_type.to_string(),
        })));
    }

    Err(AppError::bad_request("no file field in upload"))
}
