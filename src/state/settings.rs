//! Settings screen state: network list, wallet edit and the profile form.
//!
//! The three interaction modes are mutually exclusive and live in
//! [`SettingsMode`]. The profile form has top priority for input, then the
//! wallet editor, then list browsing.

use super::screen::{EditMode, ScreenState};
use crate::domain::NetworkProfile;

// ============================================================================
// Profile Form
// ============================================================================

/// Fields of the profile form, a fixed-order ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    AlgodUrl,
    AlgodPort,
    AlgodToken,
    IndexerUrl,
    IndexerPort,
    IndexerToken,
}

impl ProfileField {
    /// All fields in display order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::AlgodUrl,
        Self::AlgodPort,
        Self::AlgodToken,
        Self::IndexerUrl,
        Self::IndexerPort,
        Self::IndexerToken,
    ];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::AlgodUrl,
            Self::AlgodUrl => Self::AlgodPort,
            Self::AlgodPort => Self::AlgodToken,
            Self::AlgodToken => Self::IndexerUrl,
            Self::IndexerUrl => Self::IndexerPort,
            Self::IndexerPort => Self::IndexerToken,
            Self::IndexerToken => Self::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::IndexerToken,
            Self::AlgodUrl => Self::Name,
            Self::AlgodPort => Self::AlgodUrl,
            Self::AlgodToken => Self::AlgodPort,
            Self::IndexerUrl => Self::AlgodToken,
            Self::IndexerPort => Self::IndexerUrl,
            Self::IndexerToken => Self::IndexerPort,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::AlgodUrl => "Algod URL",
            Self::AlgodPort => "Algod Port",
            Self::AlgodToken => "Algod API Token (optional)",
            Self::IndexerUrl => "Indexer URL (optional)",
            Self::IndexerPort => "Indexer Port",
            Self::IndexerToken => "Indexer API Token (optional)",
        }
    }

    /// Tokens are masked when rendered.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::AlgodToken | Self::IndexerToken)
    }
}

/// Buffered profile being edited or created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    /// Field values; committed only by a successful save.
    pub profile: NetworkProfile,
    /// Field receiving input.
    pub active_field: ProfileField,
    /// Whether the form was opened with "create".
    pub creating: bool,
}

impl ProfileForm {
    /// Form for editing an existing profile, starting at the algod URL.
    #[must_use]
    pub fn edit(profile: NetworkProfile) -> Self {
        Self {
            profile,
            active_field: ProfileField::AlgodUrl,
            creating: false,
        }
    }

    /// Form for a new profile, seeded with local defaults.
    #[must_use]
    pub fn create() -> Self {
        Self {
            profile: NetworkProfile::new_custom(),
            active_field: ProfileField::Name,
            creating: true,
        }
    }

    /// Value of any field.
    #[must_use]
    pub fn value(&self, field: ProfileField) -> &str {
        let p = &self.profile;
        match field {
            ProfileField::Name => &p.name,
            ProfileField::AlgodUrl => &p.algod_url,
            ProfileField::AlgodPort => &p.algod_port,
            ProfileField::AlgodToken => &p.algod_token,
            ProfileField::IndexerUrl => &p.indexer_url,
            ProfileField::IndexerPort => &p.indexer_port,
            ProfileField::IndexerToken => &p.indexer_token,
        }
    }

    fn current_value_mut(&mut self) -> &mut String {
        let p = &mut self.profile;
        match self.active_field {
            ProfileField::Name => &mut p.name,
            ProfileField::AlgodUrl => &mut p.algod_url,
            ProfileField::AlgodPort => &mut p.algod_port,
            ProfileField::AlgodToken => &mut p.algod_token,
            ProfileField::IndexerUrl => &mut p.indexer_url,
            ProfileField::IndexerPort => &mut p.indexer_port,
            ProfileField::IndexerToken => &mut p.indexer_token,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    pub fn push_char(&mut self, c: char) {
        self.current_value_mut().push(c);
    }

    /// Removes the last character; no-op on an empty field.
    pub fn backspace(&mut self) {
        self.current_value_mut().pop();
    }
}

// ============================================================================
// Settings State
// ============================================================================

/// Interaction mode of the settings screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SettingsMode {
    #[default]
    Browsing,
    /// Editing the wallet address in `screen.input`.
    EditingWallet,
    /// Editing a profile form.
    EditingProfile(ProfileForm),
}

/// Everything the settings screen needs between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    /// Cursor into the network list, wallet buffer and status.
    pub screen: ScreenState,
    pub mode: SettingsMode,
}

impl SettingsState {
    /// The open profile form, if any.
    #[must_use]
    pub fn form(&self) -> Option<&ProfileForm> {
        match &self.mode {
            SettingsMode::EditingProfile(form) => Some(form),
            _ => None,
        }
    }

    /// Mutable access to the open profile form.
    pub fn form_mut(&mut self) -> Option<&mut ProfileForm> {
        match &mut self.mode {
            SettingsMode::EditingProfile(form) => Some(form),
            _ => None,
        }
    }

    /// `true` while the wallet editor is open.
    #[must_use]
    pub fn is_editing_wallet(&self) -> bool {
        self.mode == SettingsMode::EditingWallet
    }

    /// Opens the wallet editor seeded with the current address.
    /// Only allowed while browsing.
    pub fn begin_wallet_edit(&mut self, current: &str) -> bool {
        if self.mode != SettingsMode::Browsing {
            return false;
        }
        self.screen.begin_edit(current);
        self.mode = SettingsMode::EditingWallet;
        true
    }

    /// Closes the wallet editor and returns the typed address.
    pub fn take_wallet_input(&mut self) -> String {
        self.mode = SettingsMode::Browsing;
        self.screen.finish_edit()
    }

    /// Opens the profile form. Only allowed while browsing.
    pub fn begin_profile_edit(&mut self, form: ProfileForm) -> bool {
        if self.mode != SettingsMode::Browsing {
            return false;
        }
        self.mode = SettingsMode::EditingProfile(form);
        true
    }

    /// Closes the profile form and returns it.
    pub fn take_form(&mut self) -> Option<ProfileForm> {
        match std::mem::take(&mut self.mode) {
            SettingsMode::EditingProfile(form) => Some(form),
            other => {
                self.mode = other;
                None
            }
        }
    }
}

impl EditMode for SettingsState {
    fn is_editing(&self) -> bool {
        self.mode != SettingsMode::Browsing
    }

    fn cancel_edit(&mut self) {
        self.mode = SettingsMode::Browsing;
        self.screen.editing = false;
        self.screen.input.clear();
    }

    fn on_focus(&mut self) {
        self.mode = SettingsMode::Browsing;
        self.screen.reset();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_next_seven_times_is_identity(
        #[values(
            ProfileField::Name,
            ProfileField::AlgodUrl,
            ProfileField::AlgodPort,
            ProfileField::AlgodToken,
            ProfileField::IndexerUrl,
            ProfileField::IndexerPort,
            ProfileField::IndexerToken
        )]
        start: ProfileField,
    ) {
        let mut field = start;
        for _ in 0..7 {
            field = field.next();
        }
        assert_eq!(field, start);
        assert_eq!(start.next().prev(), start);
        assert_eq!(start.prev().next(), start);
    }

    #[test]
    fn test_field_ring_order() {
        let mut field = ProfileField::Name;
        for expected in ProfileField::ALL.iter().skip(1) {
            field = field.next();
            assert_eq!(field, *expected);
        }
        assert_eq!(field.next(), ProfileField::Name);
    }

    #[test]
    fn test_form_input_targets_active_field() {
        let mut form = ProfileForm::create();
        assert_eq!(form.active_field, ProfileField::Name);
        assert_eq!(form.value(ProfileField::Name), "custom");

        form.push_char('1');
        assert_eq!(form.profile.name, "custom1");

        form.next_field();
        form.backspace();
        assert_eq!(form.profile.algod_url, "http://localhos");
        assert_eq!(form.profile.name, "custom1");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut form = ProfileForm::edit(NetworkProfile::default());
        assert_eq!(form.active_field, ProfileField::AlgodUrl);
        form.backspace();
        assert_eq!(form.profile, NetworkProfile::default());
    }

    #[test]
    fn test_modes_are_exclusive() {
        let mut state = SettingsState::default();
        assert!(state.begin_wallet_edit("OLD"));
        assert!(!state.begin_profile_edit(ProfileForm::create()));
        assert!(state.is_editing());
        assert_eq!(state.screen.input, "OLD");

        state.cancel_edit();
        assert!(!state.is_editing());
        assert!(state.screen.input.is_empty());

        assert!(state.begin_profile_edit(ProfileForm::create()));
        assert!(!state.begin_wallet_edit(""));
        assert!(state.take_form().is_some());
        assert_eq!(state.mode, SettingsMode::Browsing);
        assert!(state.take_form().is_none());
    }

    #[test]
    fn test_on_focus_resets() {
        let mut state = SettingsState::default();
        state.screen.cursor = 2;
        state.begin_wallet_edit("X");
        state.on_focus();
        assert_eq!(state.mode, SettingsMode::Browsing);
        assert!(!state.screen.editing);
        assert_eq!(state.screen.cursor, 2);
    }
}
