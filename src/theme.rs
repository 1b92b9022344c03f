//! Theme and styling constants for the LazyChain TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::state::StatusKind;

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Secondary accent color.
pub const SECONDARY_COLOR: Color = Color::Blue;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the highlighted row of a list.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Style for field labels in key/value tables.
pub const LABEL_STYLE: Style = Style::new().fg(SECONDARY_COLOR);

/// Style for hints and secondary text.
pub const MUTED_STYLE: Style = Style::new().fg(MUTED_COLOR);

/// Color of a status line.
#[must_use]
pub const fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Info => WARNING_COLOR,
        StatusKind::Success => SUCCESS_COLOR,
        StatusKind::Error => ERROR_COLOR,
    }
}
