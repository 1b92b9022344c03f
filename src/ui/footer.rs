//! Footer bar with the keybindings of the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Shortcut summary for a context.
#[must_use]
pub const fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::MainMenu => "Enter:Start  q:Quit",
        InputContext::ProjectMenu => "↑/k ↓/j:Move  Enter:Open  Esc:Back  q:Quit",
        InputContext::Settings => {
            "Enter:Connect  t:Test  e:Wallet  n:Edit  c:New  s:Status  x:Disconnect  Esc:Back"
        }
        InputContext::WalletInput => "Enter:Save  Esc:Cancel",
        InputContext::ProfileForm => "Tab/↓:Next  Shift+Tab/↑:Prev  Enter:Save  Esc:Cancel",
        InputContext::Applications => "↑↓:Move  Enter:Details  r:Refresh  Esc:Back",
        InputContext::CommandBuilder => "↑↓:Builder  Tab:Field  Enter:Run  Esc:Back",
        InputContext::Explore => "/:Search  Tab:Kind  Enter:Lookup  r:Refresh  Esc:Back",
        InputContext::ExploreInput => "Enter:Lookup  Tab:Kind  Esc:Done",
    }
}

// ============================================================================
// Tests
// ============================================================================
