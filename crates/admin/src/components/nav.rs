//! Sidebar navigation entries.
//!
//! Only the dashboard exists; the other entries are visual placeholders and
//! do not link anywhere.

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Phosphor icon class.
    pub icon: &'static str,
    pub active: bool,
}

impl NavItem {
    const fn new(label: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            icon,
            active: false,
        }
    }
}

/// Sidebar entries in display order, with `Dashboard` active.
#[must_use]
pub fn sidebar_nav() -> Vec<NavItem> {
    vec![
        NavItem {
            active: true,
            ..NavItem::new("Dashboard", "ph-squares-four")
        },
        NavItem::new("UI Elements", "ph-stack"),
        NavItem::new("Components", "ph-file-text"),
        NavItem::new("Data Table", "ph-database"),
        NavItem::new("Icons", "ph-x"),
        NavItem::new("Sample Page", "ph-file"),
    ]
}
