use crate::ordering::Orderable;
use crate::store::Entity;
use crate::types::EntityKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An outbound social/profile link (LinkedIn, GitHub, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub platform: String,
    pub url: String,
    #[serde(default = "crate::types::default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            platform: platform.into(),
            url: url.into(),
            is_active: true,
            display_order: None,
        }
    }
}

impl Orderable for SocialLink {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }
}

impl Entity for SocialLink {
    const KIND: EntityKind = EntityKind::SocialLink;

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
    fn link_roundtrip() {
        let l = SocialLink::new("github", "https://github.com/example");
        let yaml = serde_yaml::to_string(&l).unwrap();
        let back: SocialLink = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.platform, "github");
        assert!(back.is_active);
    }
}
