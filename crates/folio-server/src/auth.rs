use crate::error::AppError;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use folio_core::config::SiteConfig;
use std::path::Path;

/// Gate for the admin surface. When the config carries an `admin_token`,
/// every admin request must present it as `Authorization: Bearer <token>`;
/// when no token is configured the surface is open (local single-user use).
pub fn require_admin(root: &Path, headers: &HeaderMap) -> Result<(), AppError> {
    let config = SiteConfig::load(root)?;
    let Some(expected) = config.admin_token else {
        return Ok(());
    };

    let provided = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match provided {
        Some(token) if token == expected => Ok(()),
        _ => Err(AppError::unauthorized("admin token required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_with_token(token: Option<&str>) -> TempDir {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::init_at(dir.path(), "test").unwrap();
        config.admin_token = token.map(str::to_string);
        config.save(dir.path()).unwrap();
        dir
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, format!("Bearer {token}").parse().unwrap());
        headers
    }

    #[test]
    fn open_when_no_token_configured() {
        let dir = init_with_token(None);
        assert!(require_admin(dir.path(), &HeaderMap::new()).is_ok());
    }

    #[test]
    fn correct_token_passes() {
        let dir = init_with_token(Some("s3cret"));
        assert!(require_admin(dir.path(), &bearer("s3cret")).is_ok());
    }

    #[test]
    fn missing_or_wrong_token_is_refused() {
        let dir = init_with_token(Some("s3cret"));
        assert!(require_admin(dir.path(), &HeaderMap::new()).is_err());
        assert!(require_admin(dir.path(), &bearer("wrong")).is_err());
    }

    #[test]
    fn non_bearer_scheme_is_refused() {
        let dir = init_with_token(Some("s3cret"));
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic s3cret".parse().unwrap());
        assert!(require_admin(dir.path(), &headers).is_err());
    }
}
