use crate::ordering::Orderable;
use crate::store::Entity;
use crate::types::EntityKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An education entry. `grade` is free text ("CGPA: 8.2", "Percentage:
/// 95.4%") — it renders, it never computes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub degree: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default = "crate::types::default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl Education {
    pub fn new(degree: impl Into<String>, institution: impl Into<String>) -> Self {
        Self {
            id: None,
            degree: degree.into(),
            institution: institution.into(),
            start_year: None,
            end_year: None,
            grade: None,
            is_active: true,
            display_order: None,
        }
    }
}

impl Orderable for Education {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }
}

impl Entity for Education {
    const KIND: EntityKind = EntityKind::Education;

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
