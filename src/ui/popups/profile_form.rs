//! Network profile form popup.
//!
//! Seven bordered fields, one per [`ProfileField`], with the active one
//! highlighted. Tokens are masked.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::constants::FORM_FIELD_HEIGHT;
use crate::state::{ProfileField, ProfileForm};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::{create_popup_block, mask};
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 64;

/// Render the profile form.
pub fn render(frame: &mut Frame, area: Rect, form: &ProfileForm) {
    // 7 fields, a help line and the popup border.
    let height = FORM_FIELD_HEIGHT * 7 + 1 + 2;
    let popup_area = centered_popup_area(area, POPUP_WIDTH, height);
    let title = if form.creating {
        "New Network".to_string()
    } else {
        format!("Edit Network: {}", form.profile.name)
    };
    let popup_block = create_popup_block(&title);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);
    let constraints: Vec<Constraint> = ProfileField::ALL
        .iter()
        .map(|_| Constraint::Length(FORM_FIELD_HEIGHT))
        .chain([Constraint::Length(1)])
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (field, row) in ProfileField::ALL.into_iter().zip(rows.iter()) {
        render_field(frame, *row, field, form);
    }

    let help = Paragraph::new("Enter: Save  Tab/↓: Next  Shift+Tab/↑: Prev  Esc: Cancel")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[ProfileField::ALL.len()]);
}

fn render_field(frame: &mut Frame, area: Rect, field: ProfileField, form: &ProfileForm) {
    let value = form.value(field);
    let is_active = field == form.active_field;
    let border_style = if is_active {
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_COLOR)
    };

    let shown = if field.is_secret() {
        mask(value)
    } else {
        value.to_string()
    };
    let content = if is_active { format!("{shown}_") } else { shown };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label()),
    );

    frame.render_widget(paragraph, area);
}
