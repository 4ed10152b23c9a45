use crate::error::{FolioError, Result};
use crate::types::EntityKind;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const FOLIO_DIR: &str = ".folio";
pub const CONTENT_DIR: &str = ".folio/content";
pub const UPLOADS_DIR: &str = ".folio/uploads";
pub const OUTBOX_DIR: &str = ".folio/outbox";

pub const CONFIG_FILE: &str = ".folio/config.yaml";
pub const PROFILE_FILE: &str = ".folio/content/profile.yaml";
pub const MESSAGES_FILE: &str = ".folio/content/messages.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn folio_dir(root: &Path) -> PathBuf {
    root.join(FOLIO_DIR)
}

pub fn content_dir(root: &Path) -> PathBuf {
    root.join(CONTENT_DIR)
}

pub fn collection_path(root: &Path, kind: EntityKind) -> PathBuf {
    content_dir(root).join(kind.filename())
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn profile_path(root: &Path) -> PathBuf {
    root.join(PROFILE_FILE)
}

pub fn messages_path(root: &Path) -> PathBuf {
    root.join(MESSAGES_FILE)
}

pub fn uploads_dir(root: &Path) -> PathBuf {
    root.join(UPLOADS_DIR)
}

pub fn bucket_dir(root: &Path, bucket: &str) -> PathBuf {
    uploads_dir(root).join(bucket)
}

pub fn outbox_dir(root: &Path) -> PathBuf {
    root.join(OUTBOX_DIR)
}

pub fn is_initialized(root: &Path) -> bool {
    config_path(root).is_file()
}

// ---------------------------------------------------------------------------
// Bucket validation
// ---------------------------------------------------------------------------

static BUCKET_RE: OnceLock<Regex> = OnceLock::new();

fn bucket_re() -> &'static Regex {
    BUCKET_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

/// Upload buckets become path segments under `.folio/uploads/`, so they get
/// the same discipline as any other slug: no traversal, no surprises.
pub fn validate_bucket(bucket: &str) -> Result<()> {
    if bucket.is_empty() || bucket.len() > 64 || !bucket_re().is_match(bucket) {
        return Err(FolioError::InvalidBucket(bucket.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
