use crate::certification::Certification;
use crate::config::SiteConfig;
use crate::grouping;
use crate::profile::Profile;
use crate::project::Project;
use crate::skill::Skill;
use crate::social_link::SocialLink;
use crate::store;
use serde::Serialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// ViewEpoch — stale-fetch guard
// ---------------------------------------------------------------------------

/// Guards a view against results from fetches it no longer cares about.
///
/// A view issues a ticket when it starts a fetch and bumps its epoch when it
/// is torn down or refetches. When the response eventually lands, `admit`
/// says whether it may still be applied; a stale ticket means the result is
/// dropped on the floor, silently.
#[derive(Debug, Default)]
pub struct ViewEpoch {
    current: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
}

impl ViewEpoch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> FetchTicket {
        FetchTicket {
            epoch: self.current,
        }
    }

    /// Invalidate every outstanding ticket.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn admit(&self, ticket: FetchTicket) -> bool {
        ticket.epoch == self.current
    }
}

// ---------------------------------------------------------------------------
// LandingView
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Everything the landing page needs in one pass. Sections are fetched
/// independently and degrade independently: a section that fails or comes
/// back empty renders as its default instead of sinking the whole page.
#[derive(Debug, Clone, Serialize)]
pub struct LandingView {
    pub site_title: String,
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub certifications: Vec<Certification>,
    pub social_links: Vec<SocialLink>,
}

impl LandingView {
    pub fn assemble(root: &Path, config: &SiteConfig) -> Self {
        let profile = Profile::load(root).unwrap_or_else(|e| {
            tracing::warn!("profile unavailable, rendering defaults: {e}");
            None
        });

        Self {
            site_title: config.site_title.clone(),
            profile,
            projects: section(root, "projects"),
            skills: skills_section(root, config),
            certifications: section(root, "certifications"),
            social_links: section(root, "social links"),
        }
    }
}

fn section<T: store::Entity>(root: &Path, label: &str) -> Vec<T> {
    store::fetch_active(root).unwrap_or_else(|e| {
        tracing::warn!("{label} unavailable, rendering empty: {e}");
        Vec::new()
    })
}

/// Active skills grouped by category in first-seen order; the configured
/// fallback table only when the live collection yields nothing.
fn skills_section(root: &Path, config: &SiteConfig) -> Vec<SkillGroup> {
    let live: Vec<Skill> = section(root, "skills");
    if !live.is_empty() {
        return grouping::group_by_key(&live, |s: &Skill| s.category.clone())
            .into_iter()
            .map(|(category, skills)| SkillGroup { category, skills })
            .collect();
    }

    config
        .fallback_skills
        .iter()
        .map(|group| SkillGroup {
            category: group.name.clone(),
            skills: group
                .skills
                .iter()
                .map(|name| Skill::new(name.clone(), group.name.clone()))
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FallbackSkillGroup;
    use tempfile::TempDir;

    #[test]
    fn stale_tickets_are_refused() {
        let mut epoch = ViewEpoch::new();
        let ticket = epoch.issue();
        assert!(epoch.admit(ticket));

        epoch.invalidate();
        assert!(!epoch.admit(ticket), "torn-down view must drop the result");
        assert!(epoch.admit(epoch.issue()));
    }

    #[test]
    fn concurrent_tickets_from_one_epoch_all_land() {
        let epoch = ViewEpoch::new();
        let a = epoch.issue();
        let b = epoch.issue();
        assert!(epoch.admit(a) && epoch.admit(b));
    }

    #[test]
    fn empty_workspace_assembles_to_defaults() {
        let dir = TempDir::new().unwrap();
        let view = LandingView::assemble(dir.path(), &SiteConfig::default());
        assert!(view.profile.is_none());
        assert!(view.projects.is_empty());
        assert!(view.skills.is_empty());
        assert!(view.certifications.is_empty());
    }

    #[test]
    fn live_skills_beat_the_fallback_table() {
        let dir = TempDir::new().unwrap();
        store::insert(dir.path(), Skill::new("Rust", "Backend")).unwrap();

        let config = SiteConfig {
            fallback_skills: vec![FallbackSkillGroup {
                name: "Frontend".into(),
                skills: vec!["HTML".into()],
            }],
            ..SiteConfig::default()
        };

        let view = LandingView::assemble(dir.path(), &config);
        assert_eq!(view.skills.len(), 1);
        assert_eq!(view.skills[0].category, "Backend");
    }

    #[test]
    fn fallback_table_fills_an_empty_collection() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            fallback_skills: vec![FallbackSkillGroup {
                name: "Tools".into(),
                skills: vec!["Git".into(), "GitHub".into()],
            }],
            ..SiteConfig::default()
        };

        let view = LandingView::assemble(dir.path(), &config);
        assert_eq!(view.skills.len(), 1);
        assert_eq!(view.skills[0].skills.len(), 2);
        assert_eq!(view.skills[0].skills[0].name, "Git");
    }

    #[test]
    fn one_broken_section_does_not_sink_the_view() {
        let dir = TempDir::new().unwrap();
        store::insert(dir.path(), Project::new("Visible", "")).unwrap();

        // Corrupt the certifications collection on disk.
        std::fs::create_dir_all(crate::paths::content_dir(dir.path())).unwrap();
        std::fs::write(
            crate::paths::collection_path(dir.path(), crate::types::EntityKind::Certification),
            ":: not yaml ::",
        )
        .unwrap();

        let view = LandingView::assemble(dir.path(), &SiteConfig::default());
        assert_eq!(view.projects.len(), 1);
        assert!(view.certifications.is_empty());
    }
}
