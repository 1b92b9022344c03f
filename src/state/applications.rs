//! Applications screen state.

use super::screen::{EditMode, ScreenState};
use crate::domain::ApplicationSummary;

/// The application list and its cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationsState {
    pub screen: ScreenState,
    /// Rows from the last search.
    pub apps: Vec<ApplicationSummary>,
    /// Whether a search has completed since the screen was focused.
    pub loaded: bool,
}

impl ApplicationsState {
    /// Replaces the list and clamps the cursor.
    pub fn set_apps(&mut self, apps: Vec<ApplicationSummary>) {
        self.apps = apps;
        self.loaded = true;
        self.screen.clamp(self.apps.len());
    }

    /// The highlighted row.
    #[must_use]
    pub fn selected(&self) -> Option<&ApplicationSummary> {
        self.apps.get(self.screen.cursor)
    }
}

impl EditMode for ApplicationsState {
    fn is_editing(&self) -> bool {
        false
    }

    fn cancel_edit(&mut self) {}

    fn on_focus(&mut self) {
        self.screen = ScreenState::default();
        self.apps.clear();
        self.loaded = false;
    }
}
