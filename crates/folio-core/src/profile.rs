use crate::error::Result;
use crate::io;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The site owner's hero/about content. A singleton: there is one profile
/// per workspace, or none until the owner sets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            title: String::new(),
            bio: String::new(),
            avatar_url: None,
            resume_url: None,
            updated_at: Utc::now(),
        }
    }

    /// Load the profile if one has been set. A missing file is not an
    /// error — the landing page renders its defaults until one exists.
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = paths::profile_path(root);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        let profile: Profile = serde_yaml::from_str(&data)?;
        Ok(Some(profile))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&paths::profile_path(root), data.as_bytes())
    }

    /// Replace the stored profile, stamping the update time.
    pub fn set(root: &Path, mut profile: Profile) -> Result<Profile> {
        profile.updated_at = Utc::now();
        profile.save(root)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_profile_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(Profile::load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn set_then_load() {
        let dir = TempDir::new().unwrap();
        let mut p = Profile::new("Raghu Example");
        p.title = "Full Stack Developer".into();
        Profile::set(dir.path(), p).unwrap();

        let loaded = Profile::load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded.full_name, "Raghu Example");
        assert_eq!(loaded.title, "Full Stack Developer");
    }

    #[test]
    fn set_replaces_previous_profile() {
        let dir = TempDir::new().unwrap();
        Profile::set(dir.path(), Profile::new("First")).unwrap();
        Profile::set(dir.path(), Profile::new("Second")).unwrap();
        let loaded = Profile::load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded.full_name, "Second");
    }
}
