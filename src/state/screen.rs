//! Per-screen state shared by every leaf screen.
//!
//! Each screen owns a [`ScreenState`] (list cursor, free-text buffer and a
//! transient status line) and implements [`EditMode`] so navigation can ask
//! whether an Esc belongs to the screen before using it to go back.

// ============================================================================
// Status Message
// ============================================================================

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral progress or information.
    Info,
    /// An operation succeeded.
    Success,
    /// An operation failed.
    Error,
}

/// A dismissible line of feedback shown at the bottom of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Severity, drives the color.
    pub kind: StatusKind,
}

impl StatusMessage {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

// ============================================================================
// Screen State
// ============================================================================

/// Cursor, edit flag, text buffer and status of one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    /// Index into the screen's list.
    pub cursor: usize,
    /// Whether the text buffer currently has focus.
    pub editing: bool,
    /// Free-text input buffer.
    pub input: String,
    /// Visible status line, if any.
    pub status: Option<StatusMessage>,
}

impl ScreenState {
    /// Clears editing, the buffer and the status. The cursor is kept.
    pub fn reset(&mut self) {
        self.editing = false;
        self.input.clear();
        self.status = None;
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Moves the cursor up, stopping at the first row.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down, stopping at the last of `len` rows.
    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Keeps the cursor inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Starts editing the buffer, optionally seeded.
    pub fn begin_edit(&mut self, seed: &str) {
        self.editing = true;
        self.input = seed.to_string();
    }

    /// Stops editing and returns the buffer contents.
    pub fn finish_edit(&mut self) -> String {
        self.editing = false;
        std::mem::take(&mut self.input)
    }
}

// ============================================================================
// Edit Mode
// ============================================================================

/// Capability query used by navigation before it consumes Esc.
pub trait EditMode {
    /// `true` while the screen is in a nested editing sub-mode.
    fn is_editing(&self) -> bool;

    /// Leaves the nested sub-mode, discarding uncommitted input.
    fn cancel_edit(&mut self);

    /// Resets the screen to its just-focused state.
    fn on_focus(&mut self);
}
