use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::FolioError;

// ---------------------------------------------------------------------------
// Sentinel types for statuses FolioError does not model
// ---------------------------------------------------------------------------

/// Private sentinel carrying an explicit HTTP 401 through the
/// `anyhow::Error` chain without touching the `FolioError` enum.
#[derive(Debug)]
struct UnauthorizedError(String);

impl std::fmt::Display for UnauthorizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UnauthorizedError {}

/// Private sentinel carrying an explicit HTTP 400.
#[derive(Debug)]
struct BadRequestError(String);

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequestError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self(UnauthorizedError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(u) = self.0.downcast_ref::<UnauthorizedError>() {
            let body = serde_json::json!({ "error": u.0.clone() });
            return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
        }
        if let Some(b) = self.0.downcast_ref::<BadRequestError>() {
            let body = serde_json::json!({ "error": b.0.clone() });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<FolioError>() {
            match e {
                FolioError::NotInitialized => StatusCode::BAD_REQUEST,
                FolioError::RecordNotFound(_) => StatusCode::NOT_FOUND,
                FolioError::UnknownEntityKind(_)
                | FolioError::UnknownStrategy(_)
                | FolioError::InvalidBucket(_)
                | FolioError::InvalidContact(_)
                // Malformed client payloads surface as serde_json errors.
                | FolioError::Json(_) => StatusCode::BAD_REQUEST,
                FolioError::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                FolioError::OrderNotSupported(_) => StatusCode::UNPROCESSABLE_ENTITY,
                FolioError::Io(_) | FolioError::Yaml(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_404() {
        let err = AppError(FolioError::RecordNotFound("abc".into()).into());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_kind_maps_to_400() {
        let err = AppError(FolioError::UnknownEntityKind("widgets".into()).into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_initialized_maps_to_400() {
        let err = AppError(FolioError::NotInitialized.into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_contact_maps_to_400() {
        let err = AppError(FolioError::InvalidContact("name is required".into()).into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn oversized_upload_maps_to_413() {
        let err = AppError(
            FolioError::UploadTooLarge {
                size_mb: 9.5,
                limit_mb: 5,
            }
            .into(),
        );
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn order_not_supported_maps_to_422() {
        let err = AppError(FolioError::OrderNotSupported("publications".into()).into());
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn io_error_maps_to_500() {
        let io_err = std::io::Error::other("disk full");
        let err = AppError(FolioError::Io(io_err).into());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unauthorized_constructor_maps_to_401() {
        let err = AppError::unauthorized("admin token required");
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bad_request_constructor_maps_to_400() {
        let err = AppError::bad_request("no file field in upload");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn non_folio_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_body_is_json_with_error_field() {
        let err = AppError(FolioError::RecordNotFound("abc".into()).into());
        let response = err.into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(ct.to_str().unwrap().contains("application/json"));
    }
}
