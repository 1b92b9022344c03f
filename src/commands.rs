//! Command pattern for key event handling in the TUI application.
//!
//! Key events are translated into [`AppCommand`]s by a pure function of the
//! key and the current [`InputContext`]; the state layer only ever sees
//! commands. This keeps keybindings testable in isolation.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute(command).await;
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
///
/// One context per screen, plus one per nested editing sub-mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    MainMenu,
    ProjectMenu,
    /// Settings screen, browsing the network list.
    Settings,
    /// Settings screen, editing the wallet address.
    WalletInput,
    /// Settings screen, editing a network profile.
    ProfileForm,
    Applications,
    /// Command builder forms; always accept text.
    CommandBuilder,
    /// Explore screen with the lookup box unfocused.
    Explore,
    /// Explore screen typing into the lookup box.
    ExploreInput,
}

// ============================================================================
// App Commands
// ============================================================================

/// Everything a key press can ask the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Esc: leave the nested edit mode, or go back one screen.
    Back,

    // === Navigation ===
    MoveUp,
    MoveDown,
    /// Accept / open / run the highlighted item.
    Select,

    // === Settings ===
    /// Test the highlighted profile without connecting.
    TestConnection,
    /// Hide the status line.
    DismissStatus,
    EditWallet,
    EditProfile,
    CreateProfile,
    Disconnect,

    // === Data ===
    /// Re-fetch the screen's data.
    Refresh,

    // === Text Input ===
    TypeChar(char),
    Backspace,
    NextField,
    PrevField,
    /// Enter inside a text context.
    Submit,

    // === Explore ===
    FocusInput,
    CycleLookupKind,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// Ctrl+C quits from every context.
    ///
    /// # Arguments
    ///
    /// * `key` - The key event to map
    /// * `context` - The current input context
    ///
    /// # Returns
    ///
    /// The appropriate `AppCommand` for the given key and context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::MainMenu => Self::map_main_menu_keys(key),
            InputContext::ProjectMenu => Self::map_project_menu_keys(key),
            InputContext::Settings => Self::map_settings_keys(key),
            InputContext::WalletInput => Self::map_text_keys(key),
            InputContext::ProfileForm => Self::map_form_keys(key, true),
            InputContext::Applications => Self::map_applications_keys(key),
            InputContext::CommandBuilder => Self::map_command_builder_keys(key),
            InputContext::Explore => Self::map_explore_keys(key),
            InputContext::ExploreInput => Self::map_explore_input_keys(key),
        }
    }

    fn map_main_menu_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_project_menu_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Select,
            KeyCode::Esc => AppCommand::Back,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_settings_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up => AppCommand::MoveUp,
            KeyCode::Down => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Esc => AppCommand::Back,
            KeyCode::Char('t') => AppCommand::TestConnection,
            KeyCode::Char(' ') => AppCommand::DismissStatus,
            KeyCode::Char('e') => AppCommand::EditWallet,
            KeyCode::Char('n') => AppCommand::EditProfile,
            KeyCode::Char('c') => AppCommand::CreateProfile,
            KeyCode::Char('s') => AppCommand::Refresh,
            KeyCode::Char('x') => AppCommand::Disconnect,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    /// Single-line text input: wallet address and explore lookup.
    fn map_text_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Back,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    /// Multi-field forms. `arrows_cycle` binds Up/Down to field movement.
    fn map_form_keys(key: KeyEvent, arrows_cycle: bool) -> AppCommand {
        match key.code {
            KeyCode::Tab => AppCommand::NextField,
            KeyCode::BackTab => AppCommand::PrevField,
            KeyCode::Down if arrows_cycle => AppCommand::NextField,
            KeyCode::Up if arrows_cycle => AppCommand::PrevField,
            _ => Self::map_text_keys(key),
        }
    }

    fn map_applications_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up => AppCommand::MoveUp,
            KeyCode::Down => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Esc => AppCommand::Back,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_command_builder_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up => AppCommand::MoveUp,
            KeyCode::Down => AppCommand::MoveDown,
            _ => Self::map_form_keys(key, false),
        }
    }

    fn map_explore_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => AppCommand::FocusInput,
            KeyCode::Tab => AppCommand::CycleLookupKind,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Esc => AppCommand::Back,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_explore_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Tab => AppCommand::CycleLookupKind,
            _ => Self::map_text_keys(key),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
