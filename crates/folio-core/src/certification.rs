use crate::ordering::Orderable;
use crate::store::Entity;
use crate::types::EntityKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A certification or award entry. Issue date is the recency key; the
/// expiry date only steps in when no issue date was recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "crate::types::default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl Certification {
    pub fn new(title: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            issuer: issuer.into(),
            issue_date: None,
            expiry_date: None,
            credential_id: None,
            credential_url: None,
            file_url: None,
            description: None,
            is_active: true,
            display_order: None,
        }
    }
}

impl Orderable for Certification {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }

    fn primary_date(&self) -> Option<&str> {
        self.issue_date.as_deref()
    }

    fn secondary_date(&self) -> Option<&str> {
        self.expiry_date.as_deref()
    }
}

impl Entity for Certification {
    const KIND: EntityKind = EntityKind::Certification;

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
