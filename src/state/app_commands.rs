//! Command dispatch and screen navigation.
//!
//! Every command first reaches the active screen. `Back` is the one
//! exception: navigation asks the leaf screen whether it is mid-edit and only
//! consumes the key when it is not.

use tracing::debug;

use crate::commands::{AppCommand, InputContext};

use super::{App, EditMode, MenuEntry, Screen, ScreenState, SettingsMode};

impl App {
    /// Returns the current input context for keybinding resolution.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        match self.nav.current() {
            Screen::MainMenu => InputContext::MainMenu,
            Screen::ProjectMenu => InputContext::ProjectMenu,
            Screen::Settings => match self.settings.mode {
                SettingsMode::Browsing => InputContext::Settings,
                SettingsMode::EditingWallet => InputContext::WalletInput,
                SettingsMode::EditingProfile(_) => InputContext::ProfileForm,
            },
            Screen::Applications => InputContext::Applications,
            Screen::CommandBuilder => InputContext::CommandBuilder,
            Screen::Explore if self.explore.is_editing() => InputContext::ExploreInput,
            Screen::Explore => InputContext::Explore,
        }
    }

    /// Applies one command to the application state.
    ///
    /// Network and process calls triggered by the command are awaited before
    /// this returns.
    pub async fn execute(&mut self, command: AppCommand) {
        debug!(?command, screen = ?self.nav.current(), "execute");

        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::Back => self.go_back(),
            AppCommand::Noop => {}
            other => match self.nav.current() {
                Screen::MainMenu => self.handle_main_menu(&other),
                Screen::ProjectMenu => self.handle_project_menu(&other).await,
                Screen::Settings => self.handle_settings(other).await,
                Screen::Applications => self.handle_applications(&other).await,
                Screen::CommandBuilder => self.handle_command_builder(other).await,
                Screen::Explore => self.handle_explore(other).await,
            },
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Esc: leave the leaf screen's edit mode, otherwise go back one screen.
    fn go_back(&mut self) {
        if let Some(leaf) = self.active_leaf()
            && leaf.is_editing()
        {
            leaf.cancel_edit();
            return;
        }

        if self.nav.back() == Screen::MainMenu {
            self.project_menu = ScreenState::default();
        }
    }

    fn handle_main_menu(&mut self, command: &AppCommand) {
        if *command == AppCommand::Select {
            self.nav.accept();
        }
    }

    async fn handle_project_menu(&mut self, command: &AppCommand) {
        match command {
            AppCommand::MoveUp => self.project_menu.move_up(),
            AppCommand::MoveDown => self.project_menu.move_down(MenuEntry::ALL.len()),
            AppCommand::Select => {
                if let Some(entry) = MenuEntry::from_index(self.project_menu.cursor) {
                    self.open_entry(entry).await;
                }
            }
            _ => {}
        }
    }

    /// Opens a project menu entry and gives the screen a fresh start.
    pub(super) async fn open_entry(&mut self, entry: MenuEntry) {
        let screen = self.nav.open(entry);
        debug!(?screen, "opened");

        match screen {
            Screen::Settings => {
                self.settings.on_focus();
                self.settings.screen.clamp(self.registry.len());
            }
            Screen::Applications => {
                self.applications.on_focus();
                self.load_applications().await;
            }
            Screen::CommandBuilder => {
                self.builder.on_focus();
                self.check_goal_binary();
            }
            Screen::Explore => self.explore.on_focus(),
            Screen::MainMenu | Screen::ProjectMenu => {}
        }
    }
}
