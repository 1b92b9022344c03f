//! Explore screen state: lookup box and last result.

use super::screen::{EditMode, ScreenState};
use crate::domain::{LookupKind, LookupResult};

/// Lookup input, kind and the last rendered result.
///
/// `screen.editing` is the nested "input focused" mode: Esc leaves it before
/// it navigates back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploreState {
    pub screen: ScreenState,
    pub kind: LookupKind,
    pub result: Option<LookupResult>,
}

impl ExploreState {
    /// Focuses the lookup box, keeping what was typed.
    pub fn focus_input(&mut self) {
        self.screen.editing = true;
    }

    pub fn cycle_kind(&mut self) {
        self.kind = self.kind.next();
    }

    /// The query to run, trimmed.
    #[must_use]
    pub fn query(&self) -> &str {
        self.screen.input.trim()
    }
}

impl EditMode for ExploreState {
    fn is_editing(&self) -> bool {
        self.screen.editing
    }

    fn cancel_edit(&mut self) {
        self.screen.editing = false;
    }

    fn on_focus(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_mode() {
        let mut state = ExploreState::default();
        assert!(!state.is_editing());
        state.focus_input();
        state.screen.input.push_str(" 42 ");
        assert!(state.is_editing());
        assert_eq!(state.query(), "42");

        state.cancel_edit();
        assert!(!state.is_editing());
        assert_eq!(state.query(), "42");
    }

    #[test]
    fn test_on_focus_clears_everything() {
        let mut state = ExploreState::default();
        state.cycle_kind();
        state.focus_input();
        state.result = Some(LookupResult::default());
        state.on_focus();
        assert_eq!(state, ExploreState::default());
    }
}
