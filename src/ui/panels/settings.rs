//! Settings screen: network list, wallet, selected profile and status.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::domain::NetworkProfile;
use crate::state::{App, EditMode};
use crate::theme::{HIGHLIGHT_STYLE, MUTED_STYLE, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::ui::components::render_status;
use crate::ui::helpers::{create_border_block, key_value_line, mask};
use crate::ui::layout::{calculate_screen_layout, split_sidebar};

const SIDEBAR_WIDTH: u16 = 32;
const LABEL_WIDTH: usize = 14;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = calculate_screen_layout(area);
    let (list_area, detail_area) = split_sidebar(layout.content, SIDEBAR_WIDTH);

    render_network_list(app, frame, list_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(detail_area);
    render_wallet(app, frame, rows[0]);
    render_details(app, frame, rows[1]);

    render_status(frame, layout.status, app.settings.screen.status.as_ref());
}

fn render_network_list(app: &App, frame: &mut Frame, area: Rect) {
    let connected = app
        .session
        .is_connected()
        .then(|| app.session.current().name.as_str());

    let items: Vec<ListItem> = app
        .registry
        .names()
        .iter()
        .map(|name| {
            let mut spans = vec![Span::raw(name.clone())];
            if app.config.is_custom(name) {
                spans.push(Span::styled(" [custom]", MUTED_STYLE));
            }
            if *name == app.config.network {
                spans.push(Span::styled(" (active)", Style::default().fg(PRIMARY_COLOR)));
            }
            if connected == Some(name.as_str()) {
                spans.push(Span::styled(" ●", Style::default().fg(SUCCESS_COLOR)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(create_border_block("Networks", !app.settings.is_editing()))
        .highlight_style(HIGHLIGHT_STYLE)
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.settings.screen.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_wallet(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.settings.is_editing_wallet();
    let text = if editing {
        Line::from(vec![
            Span::raw(app.settings.screen.input.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else if app.config.wallet_addr.is_empty() {
        Line::styled("<not set>  (e to edit)", MUTED_STYLE)
    } else {
        Line::raw(app.config.wallet_addr.clone())
    };

    frame.render_widget(
        Paragraph::new(text).block(create_border_block("Wallet Address", editing)),
        area,
    );
}

fn render_details(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    if let Some(profile) = app.registry.get_index(app.settings.screen.cursor) {
        lines.extend(profile_lines(profile));
    }

    lines.push(Line::default());
    match &app.last_status {
        Some(status) => {
            lines.extend(
                status
                    .rows()
                    .into_iter()
                    .map(|(label, value)| key_value_line(label, &value, LABEL_WIDTH)),
            );
        }
        None => lines.push(Line::styled("Not connected", MUTED_STYLE)),
    }

    lines.push(Line::default());
    lines.push(key_value_line(
        "Config",
        &app.store.path().display().to_string(),
        LABEL_WIDTH,
    ));

    frame.render_widget(
        Paragraph::new(lines).block(create_border_block("Details", false)),
        area,
    );
}

fn profile_lines(profile: &NetworkProfile) -> Vec<Line<'static>> {
    let indexer = if profile.has_indexer() {
        format!("{}:{}", profile.indexer_url, profile.indexer_port)
    } else {
        "not configured".to_string()
    };
    vec![
        key_value_line("Profile", &profile.name, LABEL_WIDTH),
        key_value_line(
            "Algod",
            &format!("{}:{}", profile.algod_url, profile.algod_port),
            LABEL_WIDTH,
        ),
        key_value_line("Algod token", &mask(&profile.algod_token), LABEL_WIDTH),
        key_value_line("Indexer", &indexer, LABEL_WIDTH),
    ]
}
