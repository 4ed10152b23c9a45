use crate::error::{FolioError, Result};
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// FallbackSkillGroup
// ---------------------------------------------------------------------------

/// One named column of the fallback skills grid, shown only when the live
/// skills collection is empty. Empty by default — populate it in
/// `config.yaml` to opt in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackSkillGroup {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub site_title: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub contact_email: String,
    /// When set, admin endpoints require `Authorization: Bearer <token>`.
    /// When unset the admin surface is open — acceptable only for local use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallback_skills: Vec<FallbackSkillGroup>,
}

fn default_site_title() -> String {
    "Portfolio".to_string()
}

fn default_max_upload_mb() -> u64 {
    5
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            owner: String::new(),
            tagline: String::new(),
            contact_email: String::new(),
            admin_token: None,
            max_upload_mb: default_max_upload_mb(),
            fallback_skills: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Self::default()
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(FolioError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let config: SiteConfig = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&paths::config_path(root), data.as_bytes())
    }

    /// Lay out the `.folio/` workspace: directories plus a starter config.
    /// Idempotent — an existing config is left alone.
    pub fn init_at(root: &Path, owner: &str) -> Result<Self> {
        io::ensure_dir(&paths::content_dir(root))?;
        io::ensure_dir(&paths::uploads_dir(root))?;
        io::ensure_dir(&paths::outbox_dir(root))?;

        let config = Self::new(owner);
        let data = serde_yaml::to_string(&config)?;
        let written = io::write_if_missing(&paths::config_path(root), data.as_bytes())?;
        if written {
            Ok(config)
        } else {
            Self::load(root)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_before_init_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            SiteConfig::load(dir.path()),
            Err(FolioError::NotInitialized)
        ));
    }

    #[test]
    fn init_creates_layout_and_config() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::init_at(dir.path(), "Ada").unwrap();
        assert_eq!(config.owner, "Ada");
        assert_eq!(config.max_upload_mb, 5);
        assert!(paths::content_dir(dir.path()).is_dir());
        assert!(paths::uploads_dir(dir.path()).is_dir());
        assert!(paths::outbox_dir(dir.path()).is_dir());
        assert!(paths::is_initialized(dir.path()));
    }

    #[test]
    fn init_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::init_at(dir.path(), "Ada").unwrap();
        config.tagline = "builds things".into();
        config.save(dir.path()).unwrap();

        // Re-init must not clobber the edited config.
        let again = SiteConfig::init_at(dir.path(), "Someone Else").unwrap();
        assert_eq!(again.owner, "Ada");
        assert_eq!(again.tagline, "builds things");
    }

    #[test]
    fn sparse_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(paths::folio_dir(dir.path())).unwrap();
        std::fs::write(paths::config_path(dir.path()), "owner: Ada\n").unwrap();

        let config = SiteConfig::load(dir.path()).unwrap();
        assert_eq!(config.site_title, "Portfolio");
        assert_eq!(config.max_upload_mb, 5);
        assert!(config.admin_token.is_none());
        assert!(config.fallback_skills.is_empty());
    }
}
