use crate::ordering::Orderable;
use crate::store::Entity;
use crate::types::EntityKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A portfolio project card. `technologies` feeds the badge row; the two
/// URLs are optional outbound links shown when the card is expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "crate::types::default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            technologies: Vec::new(),
            github_url: None,
            project_url: None,
            image_url: None,
            is_active: true,
            display_order: None,
        }
    }
}

impl Orderable for Project {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

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
