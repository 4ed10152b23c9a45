use crate::config::SiteConfig;
use crate::error::{FolioError, Result};
use crate::io;
use crate::paths;
use std::path::Path;
use uuid::Uuid;

/// Store an uploaded file under `.folio/uploads/<bucket>/` and return the
/// public path it will be served from.
///
/// The stored name is a fresh UUID plus the (sanitized) original extension,
/// so uploads never collide and never echo attacker-chosen names into the
/// filesystem.
pub fn store_upload(
    root: &Path,
    bucket: &str,
    original_name: &str,
    data: &[u8],
    config: &SiteConfig,
) -> Result<String> {
    paths::validate_bucket(bucket)?;

    let limit_bytes = config.max_upload_mb * 1024 * 1024;
    if data.len() as u64 > limit_bytes {
        return Err(FolioError::UploadTooLarge {
            size_mb: data.len() as f64 / (1024.0 * 1024.0),
            limit_mb: config.max_upload_mb,
        });
    }

    let ext = sanitized_extension(original_name);
    let filename = format!("{}.{ext}", Uuid::new_v4());
    let path = paths::bucket_dir(root, bucket).join(&filename);
    io::atomic_write(&path, data)?;

    tracing::info!("stored upload {bucket}/{filename} ({} bytes)", data.len());
    Ok(format!("/uploads/{bucket}/{filename}"))
}

/// Lowercased alphanumeric extension, capped at 8 chars; `bin` otherwise.
fn sanitized_extension(original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    let clean: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(8)
        .collect::<String>()
        .to_lowercase();
    if clean.is_empty() {
        "bin".to_string()
    } else {
        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_with_limit(mb: u64) -> SiteConfig {
        SiteConfig {
            max_upload_mb: mb,
            ..SiteConfig::default()
        }
    }

    #[test]
    fn stores_and_returns_public_path() {
        let dir = TempDir::new().unwrap();
        let url = store_upload(
            dir.path(),
            "certificates",
            "scan.PNG",
            b"png-bytes",
            &config_with_limit(5),
        )
        .unwrap();

        assert!(url.starts_with("/uploads/certificates/"));
        assert!(url.ends_with(".png"));

        let stored = paths::bucket_dir(dir.path(), "certificates")
            .join(url.rsplit('/').next().unwrap());
        assert_eq!(std::fs::read(stored).unwrap(), b"png-bytes");
    }

    #[test]
    fn distinct_uploads_never_collide() {
        let dir = TempDir::new().unwrap();
        let cfg = config_with_limit(5);
        let a = store_upload(dir.path(), "certificates", "scan.pdf", b"a", &cfg).unwrap();
        let b = store_upload(dir.path(), "certificates", "scan.pdf", b"b", &cfg).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn oversized_upload_is_rejected() {
        let dir = TempDir::new().unwrap();
        let big = vec![0u8; 2 * 1024 * 1024];
        let err = store_upload(dir.path(), "certificates", "huge.png", &big, &config_with_limit(1))
            .unwrap_err();
        assert!(matches!(err, FolioError::UploadTooLarge { limit_mb: 1, .. }));
    }

    #[test]
    fn hostile_names_are_defanged() {
        let dir = TempDir::new().unwrap();
        let cfg = config_with_limit(5);
        let url = store_upload(dir.path(), "avatars", "../../etc/passwd", b"x", &cfg).unwrap();
        assert!(url.starts_with("/uploads/avatars/"));

        let err = store_upload(dir.path(), "../escape", "a.png", b"x", &cfg).unwrap_err();
        assert!(matches!(err, FolioError::InvalidBucket(_)));
    }

    #[test]
    fn missing_extension_becomes_bin() {
        let dir = TempDir::new().unwrap();
        let url = store_upload(dir.path(), "files", "README", b"x", &config_with_limit(5)).unwrap();
        assert!(url.ends_with(".bin"));
    }
}
