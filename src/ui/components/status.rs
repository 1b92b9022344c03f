//! Status line component shown at the bottom of every screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
};

use crate::state::StatusMessage;
use crate::theme::status_color;

use crate::ui::helpers::create_border_block;

/// Renders the status message, or an empty frame when there is none.
pub fn render_status(frame: &mut Frame, area: Rect, status: Option<&StatusMessage>) {
    let block = create_border_block("Status", false);

    let paragraph = match status {
        Some(status) => Paragraph::new(status.text.as_str()).style(
            Style::default()
                .fg(status_color(status.kind))
                .add_modifier(Modifier::BOLD),
        ),
        None => Paragraph::new(""),
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: true }).block(block), area);
}
