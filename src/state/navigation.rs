//! Screen navigation for the LazyChain TUI.
//!
//! The [`Navigator`] is the single source of truth for which screen is
//! visible. Transitions are total: every `(screen, action)` pair has a
//! defined result and none can fail.
//!
//! ```text
//! MainMenu --accept--> ProjectMenu --open(entry)--> leaf screen
//!    ^                    |   ^                          |
//!    +-------back---------+   +----------back------------+
//! ```

// ============================================================================
// Screen
// ============================================================================

/// Every screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Splash screen shown at startup.
    #[default]
    MainMenu,
    /// The four-entry project menu.
    ProjectMenu,
    /// Network and wallet settings.
    Settings,
    /// Application list.
    Applications,
    /// `goal` command builders.
    CommandBuilder,
    /// Status snapshot and lookups.
    Explore,
}

impl Screen {
    /// Title shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MainMenu => "Welcome",
            Self::ProjectMenu => "Menu",
            Self::Settings => "Settings",
            Self::Applications => "Applications",
            Self::CommandBuilder => "Commands Goals",
            Self::Explore => "Explore",
        }
    }
}

// ============================================================================
// Menu Entry
// ============================================================================

/// The fixed entries of the project menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Settings,
    Applications,
    CommandGoals,
    Explore,
}

impl MenuEntry {
    /// All entries in display order.
    pub const ALL: [Self; 4] = [
        Self::Settings,
        Self::Applications,
        Self::CommandGoals,
        Self::Explore,
    ];

    /// Entry at a menu position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Applications => "Applications",
            Self::CommandGoals => "Commands Goals",
            Self::Explore => "Explore",
        }
    }

    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Settings => "Configure your network and wallet settings",
            Self::Applications => "Manage your blockchain applications",
            Self::CommandGoals => "Why CLI when you can TUI? Build transactions easily",
            Self::Explore => "Explore blockchain data and resources",
        }
    }

    /// The screen this entry opens.
    #[must_use]
    pub const fn screen(self) -> Screen {
        match self {
            Self::Settings => Screen::Settings,
            Self::Applications => Screen::Applications,
            Self::CommandGoals => Screen::CommandBuilder,
            Self::Explore => Screen::Explore,
        }
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Tracks the active screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible screen.
    #[must_use]
    pub const fn current(&self) -> Screen {
        self.current
    }

    /// MainMenu → ProjectMenu. No effect elsewhere.
    pub fn accept(&mut self) -> Screen {
        if self.current == Screen::MainMenu {
            self.current = Screen::ProjectMenu;
        }
        self.current
    }

    /// ProjectMenu → the entry's screen. No effect elsewhere.
    pub fn open(&mut self, entry: MenuEntry) -> Screen {
        if self.current == Screen::ProjectMenu {
            self.current = entry.screen();
        }
        self.current
    }

    /// Leaf → ProjectMenu, ProjectMenu → MainMenu, MainMenu stays.
    pub fn back(&mut self) -> Screen {
        self.current = match self.current {
            Screen::MainMenu | Screen::ProjectMenu => Screen::MainMenu,
            _ => Screen::ProjectMenu,
        };
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_starts_at_main_menu() {
        assert_eq!(Navigator::new().current(), Screen::MainMenu);
    }

    #[rstest]
    #[case(MenuEntry::Settings, Screen::Settings)]
    #[case(MenuEntry::Applications, Screen::Applications)]
    #[case(MenuEntry::CommandGoals, Screen::CommandBuilder)]
    #[case(MenuEntry::Explore, Screen::Explore)]
    fn test_open_and_back(#[case] entry: MenuEntry, #[case] screen: Screen) {
        let mut nav = Navigator::new();
        nav.accept();
        assert_eq!(nav.open(entry), screen);
        assert_eq!(nav.back(), Screen::ProjectMenu);
        assert_eq!(nav.back(), Screen::MainMenu);
        assert_eq!(nav.back(), Screen::MainMenu);
    }

    #[test]
    fn test_open_ignored_outside_project_menu() {
        let mut nav = Navigator::new();
        assert_eq!(nav.open(MenuEntry::Explore), Screen::MainMenu);

        nav.accept();
        nav.open(MenuEntry::Settings);
        assert_eq!(nav.accept(), Screen::Settings);
        assert_eq!(nav.open(MenuEntry::Explore), Screen::Settings);
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<_> = MenuEntry::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            ["Settings", "Applications", "Commands Goals", "Explore"]
        );
        assert_eq!(MenuEntry::from_index(2), Some(MenuEntry::CommandGoals));
        assert_eq!(MenuEntry::from_index(4), None);
    }
}
