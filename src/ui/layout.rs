//! Layout calculations for the LazyChain TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Logo, screen title and network indicator.
    pub header: Rect,
    /// The active screen.
    pub main: Rect,
    /// Keybinding hints.
    pub footer: Rect,
}

/// Content area with a status line under it.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub content: Rect,
    pub status: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// `true` when the terminal cannot fit the UI.
#[must_use]
pub const fn is_too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Reserve the bottom three rows of a screen for its status line.
#[must_use]
pub fn calculate_screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    ScreenLayout {
        content: chunks[0],
        status: chunks[1],
    }
}

/// Split an area into a fixed-width sidebar and the remainder.
#[must_use]
pub fn split_sidebar(area: Rect, sidebar_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Calculate a centered popup area within a parent area.
///
/// # Arguments
/// * `parent` - Parent area to center within
/// * `width` - Desired popup width
/// * `height` - Desired popup height
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(2));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
