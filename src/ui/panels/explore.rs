//! Explore screen: status snapshot, lookup box and lookup result.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_STYLE, PRIMARY_COLOR};
use crate::ui::components::render_status;
use crate::ui::helpers::{create_border_block, key_value_line};
use crate::ui::layout::calculate_screen_layout;

const LABEL_WIDTH: usize = 16;
const SNAPSHOT_HEIGHT: u16 = 9;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = calculate_screen_layout(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SNAPSHOT_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(layout.content);

    render_snapshot(app, frame, rows[0]);
    render_lookup_box(app, frame, rows[1]);
    render_result(app, frame, rows[2]);
    render_status(frame, layout.status, app.explore.screen.status.as_ref());
}

fn render_snapshot(app: &App, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = match &app.last_status {
        Some(status) => status
            .rows()
            .into_iter()
            .map(|(label, value)| key_value_line(label, &value, LABEL_WIDTH))
            .collect(),
        None => vec![Line::styled(
            "No status yet. Connect in Settings, then press r",
            MUTED_STYLE,
        )],
    };

    frame.render_widget(
        Paragraph::new(lines).block(create_border_block("Network Status", false)),
        area,
    );
}

fn render_lookup_box(app: &App, frame: &mut Frame, area: Rect) {
    let explore = &app.explore;
    let kind = Span::styled(
        format!("[{}] ", explore.kind.as_str()),
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    );
    let input = match (explore.screen.input.is_empty(), explore.screen.editing) {
        (true, false) => Span::styled(explore.kind.placeholder(), MUTED_STYLE),
        (_, true) => Span::raw(format!("{}_", explore.screen.input)),
        (false, false) => Span::raw(explore.screen.input.clone()),
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![kind, input]))
            .block(create_border_block("Lookup", explore.screen.editing)),
        area,
    );
}

fn render_result(app: &App, frame: &mut Frame, area: Rect) {
    let (title, lines): (&str, Vec<Line>) = match &app.explore.result {
        Some(result) => (
            result.title.as_str(),
            result
                .rows
                .iter()
                .map(|(k, v)| key_value_line(k, v, LABEL_WIDTH))
                .collect(),
        ),
        None => ("Result", Vec::new()),
    };

    frame.render_widget(
        Paragraph::new(lines).block(create_border_block(title, false)),
        area,
    );
}
