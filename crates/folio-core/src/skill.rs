use crate::ordering::Orderable;
use crate::store::Entity;
use crate::types::EntityKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One skill badge. `category` is the grouping key for the skills grid;
/// skills without one land in the unnamed group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "crate::types::default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: Some(category.into()),
            is_active: true,
            display_order: None,
        }
    }
}

impl Orderable for Skill {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }
}

impl Entity for Skill {
    const KIND: EntityKind = EntityKind::Skill;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_carries_its_category() {
        let s = Skill::new("PostgreSQL", "Database");
        assert_eq!(s.category.as_deref(), Some("Database"));
        assert!(s.is_active);
    }

    #[test]
    fn category_is_optional_on_disk() {
        let s: Skill = serde_yaml::from_str("name: Git\n").unwrap();
        assert!(s.category.is_none());
        assert!(s.is_active, "is_active defaults on");
    }
}
