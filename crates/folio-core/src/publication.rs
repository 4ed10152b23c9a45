use crate::ordering::Orderable;
use crate::store::Entity;
use crate::types::EntityKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A research publication. Publications carry no manual position; the list
/// shows in-progress work first (any status mentioning "progress"), then
/// newest first. `award` renders as a highlight badge when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub publisher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub award: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default = "crate::types::default_active")]
    pub is_active: bool,
}

impl Publication {
    pub fn new(title: impl Into<String>, publisher: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            publisher: publisher.into(),
            date: None,
            link: None,
            isbn: None,
            conference: None,
            award: None,
            description: None,
            status: None,
            is_active: true,
        }
    }
}

impl Orderable for Publication {
    fn primary_date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn status_tag(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Entity for Publication {
    const KIND: EntityKind = EntityKind::Publication;

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
}
