use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The displayable content collections. The profile singleton and the
/// contact inbox live outside this enum; they have their own modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Skill,
    Certification,
    Publication,
    SocialLink,
    Experience,
    Education,
}

impl EntityKind {
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Project,
            EntityKind::Skill,
            EntityKind::Certification,
            EntityKind::Publication,
            EntityKind::SocialLink,
            EntityKind::Experience,
            EntityKind::Education,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Project => "projects",
            EntityKind::Skill => "skills",
            EntityKind::Certification => "certifications",
            EntityKind::Publication => "publications",
            EntityKind::SocialLink => "social_links",
            EntityKind::Experience => "experience",
            EntityKind::Education => "education",
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            EntityKind::Project => "projects.yaml",
            EntityKind::Skill => "skills.yaml",
            EntityKind::Certification => "certifications.yaml",
            EntityKind::Publication => "publications.yaml",
            EntityKind::SocialLink => "social_links.yaml",
            EntityKind::Experience => "experience.yaml",
            EntityKind::Education => "education.yaml",
        }
    }

    /// Default presentation ordering for the collection. Publications are
    /// the one variant without a manual order field.
    pub fn default_strategy(self) -> OrderStrategy {
        match self {
            EntityKind::Publication => OrderStrategy::StatusThenRecency,
            _ => OrderStrategy::ManualThenRecency,
        }
    }

    pub fn has_manual_order(self) -> bool {
        !matches!(self, EntityKind::Publication)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = crate::error::FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" | "projects" => Ok(EntityKind::Project),
            "skill" | "skills" => Ok(EntityKind::Skill),
            "certification" | "certifications" => Ok(EntityKind::Certification),
            "publication" | "publications" => Ok(EntityKind::Publication),
            "social_link" | "social_links" | "social-link" | "social-links" => {
                Ok(EntityKind::SocialLink)
            }
            "experience" => Ok(EntityKind::Experience),
            "education" => Ok(EntityKind::Education),
            _ => Err(crate::error::FolioError::UnknownEntityKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// OrderStrategy
// ---------------------------------------------------------------------------

/// Named comparator variants. Every collection page sorts through one of
/// these two; nothing re-implements its own comparator inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStrategy {
    /// Manual order ascending, then effective date descending.
    ManualThenRecency,
    /// In-progress entries first, then effective date descending.
    StatusThenRecency,
}

impl OrderStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStrategy::ManualThenRecency => "manual_then_recency",
            OrderStrategy::StatusThenRecency => "status_then_recency",
        }
    }
}

impl fmt::Display for OrderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStrategy {
    type Err = crate::error::FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual_then_recency" | "manual-then-recency" => Ok(OrderStrategy::ManualThenRecency),
            "status_then_recency" | "status-then-recency" => Ok(OrderStrategy::StatusThenRecency),
            _ => Err(crate::error::FolioError::UnknownStrategy(s.to_string())),
        }
    }
}

pub(crate) fn default_active() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_roundtrip() {
        for kind in EntityKind::all() {
            let parsed = EntityKind::from_str(kind.as_str()).unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn kind_accepts_singular() {
        assert_eq!(EntityKind::from_str("project").unwrap(), EntityKind::Project);
        assert_eq!(
            EntityKind::from_str("certification").unwrap(),
            EntityKind::Certification
        );
    }

    #[test]
    fn kind_rejects_unknown() {
        assert!(EntityKind::from_str("widgets").is_err());
        assert!(EntityKind::from_str("").is_err());
    }

    #[test]
    fn publications_use_status_strategy() {
        assert_eq!(
            EntityKind::Publication.default_strategy(),
            OrderStrategy::StatusThenRecency
        );
        assert!(!EntityKind::Publication.has_manual_order());
    }

    #[test]
    fn other_kinds_use_manual_strategy() {
        for kind in EntityKind::all() {
            if *kind == EntityKind::Publication {
                continue;
            }
            assert_eq!(kind.default_strategy(), OrderStrategy::ManualThenRecency);
            assert!(kind.has_manual_order());
        }
    }

    #[test]
    fn strategy_roundtrip() {
        for s in [
            OrderStrategy::ManualThenRecency,
            OrderStrategy::StatusThenRecency,
        ] {
            assert_eq!(OrderStrategy::from_str(s.as_str()).unwrap(), s);
        }
    }
}
