use crate::ordering::Orderable;
use crate::store::Entity;
use crate::types::EntityKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ExperienceDetail
// ---------------------------------------------------------------------------

/// One expandable detail block under an experience entry — a role summary or
/// a named project with its own technology badges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDetail {
    pub heading: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

/// A work or internship entry. Recency falls back from the end date to the
/// start date so a running engagement ("Present") still sorts by when it
/// began.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub role: String,
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ExperienceDetail>,
    #[serde(default = "crate::types::default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl Experience {
    pub fn new(role: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            id: None,
            role: role.into(),
            organization: organization.into(),
            location: None,
            start_date: None,
            end_date: None,
            details: Vec::new(),
            is_active: true,
            display_order: None,
        }
    }
}

impl Orderable for Experience {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }

    fn primary_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }

    fn secondary_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }
}

impl Entity for Experience {
    const KIND: EntityKind = EntityKind::Experience;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn assign_order_if_unset(&mut self, position: usize) {
        if self.display_order.is_none() {
            self.display_order = Some(position as i64);
        }
    }

    fn set_display_order(&mut self, order: i64) -> bool {
        self.display_order = Some(order);
        true
    }
}
