//! Header rendering: logo, screen title and connection indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(create_border_block("", false), area);

    if area.height <= 2 {
        return;
    }

    let row = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), 1);

    frame.render_widget(Paragraph::new(logo()), row);

    let title = Paragraph::new(app.nav.current().title())
        .style(
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, row);

    frame.render_widget(
        Paragraph::new(network_indicator(app)).alignment(Alignment::Right),
        row,
    );
}

fn logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "lazy".green().bold(),
        "chain".blue().bold(),
        "]".into(),
    ])
}

/// `● name` when connected, `○ name` for the configured but idle network.
fn network_indicator(app: &App) -> Line<'static> {
    if app.session.is_connected() {
        Line::from(Span::styled(
            format!("● {}", app.session.current().name),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("○ {}", app.config.network),
            Style::default().fg(MUTED_COLOR),
        ))
    }
}
