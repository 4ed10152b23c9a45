use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("not initialized: run 'folio init'")]
    NotInitialized,

    #[error("record not found: {0}")]
    RecordNotFound(String),

    #[error("unknown entity kind: {0}")]
    UnknownEntityKind(String),

    #[error("unknown order strategy: {0}")]
    UnknownStrategy(String),

    #[error("invalid bucket '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidBucket(String),

    #[error("upload of {size_mb:.1}MB exceeds the {limit_mb}MB limit")]
    UploadTooLarge { size_mb: f64, limit_mb: u64 },

    #[error("'{0}' entries carry no manual order")]
    OrderNotSupported(String),

    #[error("invalid contact submission: {0}")]
    InvalidContact(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
