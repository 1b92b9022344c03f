//! State management for the LazyChain TUI.
//!
//! The [`App`] owns one small state struct per screen plus the shared
//! session data:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                           App                            │
//! ├────────────┬─────────────────────────┬───────────────────┤
//! │ Navigator  │ per-screen state        │ shared            │
//! │  - current │  - SettingsState        │  - SessionConfig  │
//! │            │  - ApplicationsState    │  - NetworkRegistry│
//! │            │  - CommandBuilderState  │  - NetworkSession │
//! │            │  - ExploreState         │  - GoalRunner     │
//! └────────────┴─────────────────────────┴───────────────────┘
//! ```
//!
//! Events are processed one at a time. Network and process calls are awaited
//! inline, so session and registry are only ever touched by the event loop.
//!
//! The `App` impl is split by concern:
//! - `app_lifecycle` - construction and the event loop
//! - `app_commands` - command dispatch and navigation
//! - `app_settings` - the settings screen protocol
//! - `app_actions` - applications, command builder and explore actions

use crate::client::{GoalRunner, NetworkSession};
use crate::domain::{NetworkRegistry, NetworkStatus};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_actions;
mod app_commands;
mod app_lifecycle;
mod app_settings;

pub mod applications;
pub mod command_builder;
pub mod config;
pub mod explore;
pub mod navigation;
pub mod platform;
pub mod screen;
pub mod settings;

#[cfg(test)]
mod tests;

// ============================================================================
// Re-exports
// ============================================================================

pub use applications::ApplicationsState;
pub use command_builder::{BuilderForm, CommandBuilderState};
pub use config::{ConfigStore, SessionConfig};
pub use explore::ExploreState;
pub use navigation::{MenuEntry, Navigator, Screen};
pub use screen::{EditMode, ScreenState, StatusKind, StatusMessage};
pub use settings::{ProfileField, ProfileForm, SettingsMode, SettingsState};

// ============================================================================
// Main App State
// ============================================================================

/// The application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Screens
    // ========================================================================
    /// Which screen is visible.
    pub nav: Navigator,

    /// Project menu cursor.
    pub project_menu: ScreenState,

    pub settings: SettingsState,
    pub applications: ApplicationsState,
    pub builder: CommandBuilderState,
    pub explore: ExploreState,

    // ========================================================================
    // Shared state
    // ========================================================================
    /// Persisted configuration, mirrored in memory.
    pub config: SessionConfig,

    /// Built-in plus user-defined profiles, in display order.
    pub registry: NetworkRegistry,

    /// The live connection, if any.
    pub session: NetworkSession,

    /// Latest status snapshot. Rendering reads this, never the network.
    pub last_status: Option<NetworkStatus>,

    /// Where `config` is persisted.
    pub store: ConfigStore,

    /// Wrapper around the `goal` CLI.
    pub runner: GoalRunner,

    /// Whether the application should exit.
    pub exit: bool,
}

impl App {
    /// The screen state of the visible leaf screen.
    ///
    /// Menus have no edit mode, so they report `None`.
    fn active_leaf(&mut self) -> Option<&mut dyn EditMode> {
        match self.nav.current() {
            Screen::Settings => Some(&mut self.settings),
            Screen::Applications => Some(&mut self.applications),
            Screen::CommandBuilder => Some(&mut self.builder),
            Screen::Explore => Some(&mut self.explore),
            Screen::MainMenu | Screen::ProjectMenu => None,
        }
    }
}
