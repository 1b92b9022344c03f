//! `goal` command builders: builder list, active form and output pane.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use crate::domain::BuilderKind;
use crate::state::{App, BuilderForm};
use crate::theme::{HIGHLIGHT_STYLE, LABEL_STYLE, MUTED_STYLE, PRIMARY_COLOR};
use crate::ui::components::render_status;
use crate::ui::helpers::create_border_block;
use crate::ui::layout::{calculate_screen_layout, split_sidebar};

const SIDEBAR_WIDTH: u16 = 30;
/// Fits the largest form (payment) plus borders.
const FORM_HEIGHT: u16 = 13;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = calculate_screen_layout(area);
    let (list_area, form_area) = split_sidebar(layout.content, SIDEBAR_WIDTH);

    render_builder_list(app, frame, list_area);

    let form = app.builder.active();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(4)])
        .split(form_area);
    render_form(form, frame, rows[0]);
    render_output(form, frame, rows[1]);

    render_status(frame, layout.status, app.builder.screen.status.as_ref());
}

fn render_builder_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = BuilderKind::ALL
        .iter()
        .map(|kind| ListItem::new(kind.menu_label()))
        .collect();

    let list = List::new(items)
        .block(create_border_block("Builders", false))
        .highlight_style(HIGHLIGHT_STYLE)
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.builder.screen.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_form(form: &BuilderForm, frame: &mut Frame, area: Rect) {
    let label_width = form
        .kind
        .fields()
        .iter()
        .map(|f| f.label.len())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = form
        .kind
        .fields()
        .iter()
        .zip(&form.values)
        .enumerate()
        .map(|(index, (spec, value))| {
            let active = index == form.active;
            let label_style = if active {
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                LABEL_STYLE
            };
            let value_span = match (value.is_empty(), active) {
                (true, true) => Span::styled(format!("_ {}", spec.hint), MUTED_STYLE),
                (true, false) => Span::styled(spec.hint, MUTED_STYLE),
                (false, true) => Span::raw(format!("{value}_")),
                (false, false) => Span::raw(value.clone()),
            };
            Line::from(vec![
                Span::styled(format!("{:<label_width$}  ", spec.label), label_style),
                value_span,
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(create_border_block(form.kind.title(), true)),
        area,
    );
}

fn render_output(form: &BuilderForm, frame: &mut Frame, area: Rect) {
    let paragraph = if form.output.is_empty() {
        Paragraph::new(Line::styled("Press Enter to run", MUTED_STYLE))
    } else {
        Paragraph::new(form.output.as_str())
    };
    frame.render_widget(
        paragraph
            .wrap(Wrap { trim: false })
            .block(create_border_block("Output", false)),
        area,
    );
}
