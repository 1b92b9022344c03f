//! One panel per screen.

pub mod applications;
pub mod command_builder;
pub mod explore;
pub mod main_menu;
pub mod project_menu;
pub mod settings;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, Screen};

/// Render the visible screen into `area`.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match app.nav.current() {
        Screen::MainMenu => main_menu::render(frame, area),
        Screen::ProjectMenu => project_menu::render(app, frame, area),
        Screen::Settings => settings::render(app, frame, area),
        Screen::Applications => applications::render(app, frame, area),
        Screen::CommandBuilder => command_builder::render(app, frame, area),
        Screen::Explore => explore::render(app, frame, area),
    }
}
