//! The four-entry project menu.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, MenuEntry};
use crate::theme::{HIGHLIGHT_STYLE, MUTED_STYLE, PRIMARY_COLOR};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::centered_popup_area;

const MENU_WIDTH: u16 = 64;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = MenuEntry::ALL
        .iter()
        .enumerate()
        .flat_map(|(index, entry)| entry_lines(*entry, index == app.project_menu.cursor))
        .collect();

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
    let menu_area = centered_popup_area(area, MENU_WIDTH, height);

    frame.render_widget(
        Paragraph::new(lines).block(create_border_block("Project", true)),
        menu_area,
    );
}

/// Label, subtitle and a blank spacer for one entry.
fn entry_lines(entry: MenuEntry, selected: bool) -> [Line<'static>; 3] {
    let (marker, label_style) = if selected {
        (
            "▶ ",
            HIGHLIGHT_STYLE.fg(PRIMARY_COLOR),
        )
    } else {
        ("  ", Style::default().add_modifier(Modifier::BOLD))
    };

    [
        Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(entry.label(), label_style),
        ]),
        Line::from(Span::styled(format!("  {}", entry.subtitle()), MUTED_STYLE)),
        Line::default(),
    ]
}
