//! Command builder screen state.
//!
//! One form per [`BuilderKind`]; switching builders keeps what was typed in
//! the others until the screen loses focus.

use super::screen::{EditMode, ScreenState};
use crate::domain::{BuilderKind, ChainError};

/// Values and active field of one builder form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderForm {
    pub kind: BuilderKind,
    pub values: Vec<String>,
    pub active: usize,
    /// Text of the output pane.
    pub output: String,
}

impl BuilderForm {
    #[must_use]
    pub fn new(kind: BuilderKind) -> Self {
        Self {
            kind,
            values: vec![String::new(); kind.fields().len()],
            active: 0,
            output: String::new(),
        }
    }

    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % self.values.len();
    }

    pub fn prev_field(&mut self) {
        self.active = (self.active + self.values.len() - 1) % self.values.len();
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(value) = self.values.get_mut(self.active) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.active) {
            value.pop();
        }
    }

    /// Validates and returns the argument vector.
    ///
    /// # Errors
    ///
    /// The builder's validation error.
    pub fn argv(&self) -> Result<Vec<String>, ChainError> {
        self.kind.validate(&self.values)?;
        Ok(self.kind.args(&self.values))
    }
}

/// All builder forms and the selected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilderState {
    /// Cursor selects the builder; status shows binary availability.
    pub screen: ScreenState,
    pub forms: Vec<BuilderForm>,
}

impl Default for CommandBuilderState {
    fn default() -> Self {
        Self {
            screen: ScreenState::default(),
            forms: BuilderKind::ALL.into_iter().map(BuilderForm::new).collect(),
        }
    }
}

impl CommandBuilderState {
    #[must_use]
    pub fn active(&self) -> &BuilderForm {
        &self.forms[self.screen.cursor.min(self.forms.len() - 1)]
    }

    pub fn active_mut(&mut self) -> &mut BuilderForm {
        let index = self.screen.cursor.min(self.forms.len() - 1);
        &mut self.forms[index]
    }

    pub fn select_prev(&mut self) {
        self.screen.move_up();
    }

    pub fn select_next(&mut self) {
        self.screen.move_down(self.forms.len());
    }
}

impl EditMode for CommandBuilderState {
    fn is_editing(&self) -> bool {
        false
    }

    fn cancel_edit(&mut self) {}

    fn on_focus(&mut self) {
        *self = Self::default();
    }
}
