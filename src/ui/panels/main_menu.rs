//! Splash screen with the banner.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::theme::{MUTED_STYLE, PRIMARY_COLOR};

/// Block-letter banner, also printed by `lazychain version`.
pub const BANNER: &str = "\
██╗      █████╗ ███████╗██╗   ██╗ ██████╗██╗  ██╗ █████╗ ██╗███╗   ██╗
██║     ██╔══██╗╚══███╔╝╚██╗ ██╔╝██╔════╝██║  ██║██╔══██╗██║████╗  ██║
██║     ███████║  ███╔╝  ╚████╔╝ ██║     ███████║███████║██║██╔██╗ ██║
██║     ██╔══██║ ███╔╝    ╚██╔╝  ██║     ██╔══██║██╔══██║██║██║╚██╗██║
███████╗██║  ██║███████╗   ██║   ╚██████╗██║  ██║██║  ██║██║██║ ╚████║
╚══════╝╚═╝  ╚═╝╚══════╝   ╚═╝    ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝╚═╝  ╚═══╝";

pub const TAGLINE: &str = "A terminal UI for the Algorand network";
const PROMPT: &str = "Press Enter to start / q to quit";

pub fn render(frame: &mut Frame, area: Rect) {
    let banner_style = Style::default()
        .fg(PRIMARY_COLOR)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = BANNER
        .lines()
        .map(|l| Line::styled(l, banner_style))
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(TAGLINE, MUTED_STYLE));
    lines.push(Line::default());
    lines.push(Line::styled(
        PROMPT,
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let top = area.y + area.height.saturating_sub(height) / 2;
    let centered = Rect::new(area.x, top, area.width, height.min(area.height));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}
