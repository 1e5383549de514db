//! Dashboard sidebar: fixed menu, active section, responsive layout.

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Overview,
    Wallets,
    Transactions,
    Risk,
    Settings,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Wallets => "wallets",
            Section::Transactions => "transactions",
            Section::Risk => "risk",
            Section::Settings => "settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        MENU.iter().map(|item| item.section).find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub section: Section,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar entries in display order
pub const MENU: [MenuItem; 5] = [
    MenuItem { section: Section::Overview, label: "Overview", icon: "📊" },
    MenuItem { section: Section::Wallets, label: "Wallets", icon: "👛" },
    MenuItem { section: Section::Transactions, label: "Transactions", icon: "🔁" },
    MenuItem { section: Section::Risk, label: "Risk Control", icon: "🛡" },
    MenuItem { section: Section::Settings, label: "Settings", icon: "⚙" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarLayout {
    Desktop { collapsed: bool },
    Mobile { drawer_open: bool },
}

impl SidebarLayout {
    /// Layout for a viewport of `width` pixels, with nothing expanded on mobile
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            SidebarLayout::Mobile { drawer_open: false }
        } else {
            SidebarLayout::Desktop { collapsed: false }
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, SidebarLayout::Mobile { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    pub current: Section,
    pub layout: SidebarLayout,
    breakpoint: u32,
}

impl SidebarState {
    pub fn new(current: Section, viewport_width: u32, breakpoint: u32) -> Self {
        Self {
            current,
            layout: SidebarLayout::for_width(viewport_width, breakpoint),
            breakpoint,
        }
    }

    /// Menu entries paired with whether each is the active one
    pub fn entries(&self) -> Vec<(MenuItem, bool)> {
        MENU.iter()
            .map(|item| (*item, item.section == self.current))
            .collect()
    }

    /// Select a section by id. Unknown ids are ignored.
    pub fn navigate(&mut self, id: &str) -> Option<Section> {
        let section = Section::from_id(id)?;
        debug!("Sidebar navigate: {} -> {}", self.current.id(), section.id());
        self.current = section;
        if let SidebarLayout::Mobile { drawer_open } = &mut self.layout {
            *drawer_open = false;
        }
        Some(section)
    }

    /// Collapse/expand on desktop, open/close the drawer on mobile
    pub fn toggle(&mut self) {
        self.layout = match self.layout {
            SidebarLayout::Desktop { collapsed } => SidebarLayout::Desktop { collapsed: !collapsed },
            SidebarLayout::Mobile { drawer_open } => SidebarLayout::Mobile { drawer_open: !drawer_open },
        };
    }

    pub fn close_drawer(&mut self) {
        if let SidebarLayout::Mobile { drawer_open } = &mut self.layout {
            *drawer_open = false;
        }
    }

    /// Re-derive the layout after a resize; state is kept unless the
    /// viewport crossed the breakpoint.
    pub fn resize(&mut self, viewport_width: u32) {
        let fresh = SidebarLayout::for_width(viewport_width, self.breakpoint);
        if fresh.is_mobile() != self.layout.is_mobile() {
            debug!("Sidebar layout switched, mobile={}", fresh.is_mobile());
            self.layout = fresh;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKPOINT: u32 = 768;

    #[test]
    fn test_exactly_one_active_entry() {
        let mut sidebar = SidebarState::new(Section::Overview, 1280, BREAKPOINT);
        assert_eq!(sidebar.navigate("wallets"), Some(Section::Wallets));

        let entries = sidebar.entries();
        let active: Vec<_> = entries.iter().filter(|(_, active)| *active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].0.section, Section::Wallets);
    }

    #[test]
    fn test_navigate_changes_active_not_menu() {
        let mut sidebar = SidebarState::new(Section::Wallets, 1280, BREAKPOINT);
        let before: Vec<MenuItem> = sidebar.entries().into_iter().map(|(item, _)| item).collect();

        sidebar.navigate("risk");

        let after = sidebar.entries();
        let items: Vec<MenuItem> = after.iter().map(|(item, _)| *item).collect();
        assert_eq!(before, items);
        assert_eq!(
            after.iter().filter(|(_, active)| *active).map(|(item, _)| item.section).collect::<Vec<_>>(),
            vec![Section::Risk]
        );
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut sidebar = SidebarState::new(Section::Wallets, 1280, BREAKPOINT);
        assert_eq!(sidebar.navigate("billing"), None);
        assert_eq!(sidebar.current, Section::Wallets);
    }

    #[test]
    fn test_section_id_roundtrip() {
        for item in MENU {
            assert_eq!(Section::from_id(item.section.id()), Some(item.section));
        }
    }

    #[test]
    fn test_layout_from_viewport() {
        let mobile = SidebarState::new(Section::Overview, 500, BREAKPOINT);
        assert_eq!(mobile.layout, SidebarLayout::Mobile { drawer_open: false });

        let desktop = SidebarState::new(Section::Overview, 768, BREAKPOINT);
        assert_eq!(desktop.layout, SidebarLayout::Desktop { collapsed: false });
    }

    #[test]
    fn test_toggle_and_mobile_navigation_closes_drawer() {
        let mut sidebar = SidebarState::new(Section::Overview, 400, BREAKPOINT);
        sidebar.toggle();
        assert_eq!(sidebar.layout, SidebarLayout::Mobile { drawer_open: true });

        sidebar.navigate("settings");
        assert_eq!(sidebar.layout, SidebarLayout::Mobile { drawer_open: false });

        let mut desktop = SidebarState::new(Section::Overview, 1024, BREAKPOINT);
        desktop.toggle();
        assert_eq!(desktop.layout, SidebarLayout::Desktop { collapsed: true });
        // Navigation leaves the desktop collapse state alone
        desktop.navigate("risk");
        assert_eq!(desktop.layout, SidebarLayout::Desktop { collapsed: true });
    }

    #[test]
    fn test_resize_keeps_state_within_mode() {
        let mut sidebar = SidebarState::new(Section::Overview, 1024, BREAKPOINT);
        sidebar.toggle();

        sidebar.resize(1300);
        assert_eq!(sidebar.layout, SidebarLayout::Desktop { collapsed: true });

        sidebar.resize(600);
        assert_eq!(sidebar.layout, SidebarLayout::Mobile { drawer_open: false });

        sidebar.toggle();
        sidebar.resize(700);
        assert_eq!(sidebar.layout, SidebarLayout::Mobile { drawer_open: true });

        sidebar.resize(900);
        assert_eq!(sidebar.layout, SidebarLayout::Desktop { collapsed: false });
    }
}
