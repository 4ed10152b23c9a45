// ---------------------------------------------------------------------------
// Selection — one-item-at-a-time expand/collapse state
// ---------------------------------------------------------------------------

/// Tracks which single entry of a list view is expanded, if any.
///
/// Every list page (experience, publications, projects) shares this machine:
/// at most one entry shows its detail panel at a time, and expanding a second
/// entry collapses the first. Each view owns its own instance; nothing is
/// shared across views, and a fresh instance starts collapsed.
///
/// Toggling a key the view no longer renders is allowed — the machine does
/// not know the rendered set, so the presenter simply finds nothing expanded
/// to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    expanded: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `key` if it is the expanded entry, otherwise expand it
    /// (collapsing whatever else was expanded).
    pub fn toggle(&mut self, key: impl Into<String>) {
        let key = key.into();
        if self.expanded.as_deref() == Some(key.as_str()) {
            self.expanded = None;
        } else {
            self.expanded = Some(key);
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.as_deref() == Some(key)
    }

    pub fn is_collapsed(&self) -> bool {
        self.expanded.is_none()
    }

    /// Back to the initial state; called when the owning view is torn down.
    pub fn reset(&mut self) {
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let sel = Selection::new();
        assert!(sel.is_collapsed());
        assert_eq!(sel.expanded(), None);
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut sel = Selection::new();
        sel.toggle("x");
        assert!(sel.is_expanded("x"));
        sel.toggle("x");
        assert!(sel.is_collapsed());
    }

    #[test]
    fn toggling_another_key_switches_without_multi_expand() {
        let mut sel = Selection::new();
        sel.toggle("x");
        sel.toggle("y");
        assert!(sel.is_expanded("y"));
        assert!(!sel.is_expanded("x"));
        assert_eq!(sel.expanded(), Some("y"));
    }

    #[test]
    fn toggle_unknown_key_just_expands_it() {
        let mut sel = Selection::new();
        sel.toggle("ghost");
        assert!(sel.is_expanded("ghost"));
    }

    #[test]
    fn reset_returns_to_collapsed() {
        let mut sel = Selection::new();
        sel.toggle("x");
        sel.reset();
        assert!(sel.is_collapsed());
    }
}
