//! UI rendering module for the LazyChain TUI.
//!
//! # Module Structure
//!
//! - `panels` - One panel per screen
//! - `popups` - The network profile form
//! - `components` - The per-screen status line
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
};

use crate::constants::{MIN_HEIGHT, MIN_WIDTH};
use crate::state::{App, Screen};
use crate::theme::WARNING_COLOR;

use layout::{calculate_app_layout, is_too_small};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole frame from `app`.
///
/// Rendering reads state only; it never triggers network calls.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    if is_too_small(area) {
        render_too_small(frame, area);
        return;
    }

    let layout = calculate_app_layout(area);
    header::render(frame, layout.header, app);
    panels::render(app, frame, layout.main);
    footer::render(frame, layout.footer, app);

    if app.nav.current() == Screen::Settings
        && let Some(form) = app.settings.form()
    {
        popups::profile_form::render(frame, area, form);
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let text = format!(
        "Terminal too small: {}x{}\nResize to at least {MIN_WIDTH}x{MIN_HEIGHT}",
        area.width, area.height
    );
    let y = area.y + area.height.saturating_sub(2) / 2;
    let notice = Rect::new(area.x, y, area.width, area.height.min(2));
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(WARNING_COLOR))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        notice,
    );
}
