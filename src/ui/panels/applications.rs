//! Application list.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::state::App;
use crate::theme::{ERROR_COLOR, HIGHLIGHT_STYLE, LABEL_STYLE, MUTED_STYLE};
use crate::ui::components::render_status;
use crate::ui::helpers::create_border_block;
use crate::ui::layout::calculate_screen_layout;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = calculate_screen_layout(area);
    let state = &app.applications;

    let title = if app.config.wallet_addr.is_empty() {
        "Applications".to_string()
    } else {
        format!("Applications by {}", shorten(&app.config.wallet_addr))
    };
    let block = create_border_block(&title, true);

    if state.apps.is_empty() {
        let text = if state.loaded {
            "No applications"
        } else {
            "Nothing loaded. Press r to refresh"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(text, MUTED_STYLE)).block(block),
            layout.content,
        );
    } else {
        let header = Row::new(["App ID", "Creator", "State"])
            .style(LABEL_STYLE.add_modifier(Modifier::BOLD));
        let rows = state.apps.iter().map(|a| {
            let flag = if a.deleted {
                Cell::from("deleted").style(Style::default().fg(ERROR_COLOR))
            } else {
                Cell::from("active")
            };
            Row::new([Cell::from(a.app_id.to_string()), Cell::from(a.creator.clone()), flag])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(14),
                Constraint::Min(20),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(HIGHLIGHT_STYLE)
        .highlight_symbol("▶ ");

        let mut table_state = TableState::default().with_selected(Some(state.screen.cursor));
        frame.render_stateful_widget(table, layout.content, &mut table_state);
    }

    render_status(frame, layout.status, state.screen.status.as_ref());
}

/// `ABCDEF...UVWXYZ` for long addresses.
fn shorten(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 16 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{head}...{tail}")
}
