//! UI helper functions for creating styled blocks and widgets.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, LABEL_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// # Arguments
///
/// * `title` - The title text to display in the block border
/// * `focused` - Whether the block should be styled as focused/active
///
/// # Example
///
/// ```ignore
/// let focused_block = create_border_block("Networks", true);
/// let unfocused_block = create_border_block("Output", false);
/// ```
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with a centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(FOCUSED_BORDER_STYLE)
}

// ============================================================================
// Text Helpers
// ============================================================================

/// A `label: value` line with the label padded to `width`.
#[must_use]
pub fn key_value_line(label: &str, value: &str, width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<width$} "), LABEL_STYLE),
        Span::raw(value.to_string()),
    ])
}

/// Hides a secret, keeping its length visible.
#[must_use]
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

// ============================================================================
// Tests
// ============================================================================
