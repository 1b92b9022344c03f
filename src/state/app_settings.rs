//! Settings screen behavior: connecting, testing, wallet and profile edits.
//!
//! Input priority follows [`super::SettingsMode`]: an open profile form
//! consumes everything, then the wallet editor, then list browsing.

use tracing::{info, warn};

use crate::commands::AppCommand;
use crate::domain::{ChainError, NetworkProfile};

use super::{App, ProfileForm, StatusMessage};

impl App {
    pub(super) async fn handle_settings(&mut self, command: AppCommand) {
        if self.settings.form().is_some() {
            self.handle_profile_form(command).await;
        } else if self.settings.is_editing_wallet() {
            self.handle_wallet_input(command);
        } else {
            self.handle_settings_browsing(command).await;
        }
    }

    // ========================================================================
    // Browsing
    // ========================================================================

    async fn handle_settings_browsing(&mut self, command: AppCommand) {
        match command {
            AppCommand::MoveUp => {
                self.settings.screen.move_up();
                self.settings.screen.clear_status();
            }
            AppCommand::MoveDown => {
                self.settings.screen.move_down(self.registry.len());
                self.settings.screen.clear_status();
            }
            AppCommand::Select => self.connect_selected().await,
            AppCommand::TestConnection => self.test_selected().await,
            AppCommand::DismissStatus => self.settings.screen.clear_status(),
            AppCommand::EditWallet => {
                self.settings.begin_wallet_edit(&self.config.wallet_addr);
            }
            AppCommand::EditProfile => {
                if let Some(profile) = self.selected_profile() {
                    self.settings.begin_profile_edit(ProfileForm::edit(profile));
                    self.settings.screen.clear_status();
                }
            }
            AppCommand::CreateProfile => {
                self.settings.begin_profile_edit(ProfileForm::create());
                self.settings.screen.clear_status();
            }
            AppCommand::Refresh => {
                let status = match self.refresh_status().await {
                    Ok(()) => StatusMessage::info("Status refreshed"),
                    Err(e) => StatusMessage::error(format!("Status unavailable: {e}")),
                };
                self.settings.screen.set_status(status);
            }
            AppCommand::Disconnect => {
                self.session.disconnect();
                self.last_status = None;
                self.settings
                    .screen
                    .set_status(StatusMessage::info("Disconnected"));
            }
            _ => {}
        }
    }

    /// The profile under the settings cursor.
    fn selected_profile(&self) -> Option<NetworkProfile> {
        self.registry
            .get_index(self.settings.screen.cursor)
            .cloned()
    }

    /// Enter: test, persist the selection, connect and refresh the snapshot.
    async fn connect_selected(&mut self) {
        let Some(profile) = self.selected_profile() else {
            return;
        };
        let name = profile.name.clone();

        if let Err(e) = self.session.test_connection(&profile).await.into_result() {
            warn!(network = %name, endpoint = ?e.endpoint(), error = %e, "connect aborted");
            self.settings
                .screen
                .set_status(StatusMessage::error(format!("Failed to connect to {name}: {e}")));
            return;
        }

        self.config.network.clone_from(&name);
        let save_error = self.store.save(&self.config).err();
        if let Some(e) = &save_error {
            warn!(error = %e, "failed to persist selected network");
        }

        let status = match self.session.connect(&profile).await {
            Ok(outcome) => {
                if let Err(e) = self.refresh_status().await {
                    warn!(error = %e, "status after connect failed");
                }
                match (save_error, outcome.secondary_warning) {
                    (Some(e), _) => StatusMessage::error(format!(
                        "Connected to {name}, but failed to save config: {e}"
                    )),
                    (None, Some(warning)) => StatusMessage::info(format!(
                        "Successfully connected to {name} (indexer unavailable: {warning})"
                    )),
                    (None, None) => {
                        StatusMessage::success(format!("Successfully connected to {name}"))
                    }
                }
            }
            Err(e) => StatusMessage::error(format!("Connection failed: {e}")),
        };
        self.settings.screen.set_status(status);
    }

    /// `t`: test the highlighted profile without connecting.
    async fn test_selected(&mut self) {
        let Some(profile) = self.selected_profile() else {
            return;
        };

        let status = match self.session.test_connection(&profile).await.into_result() {
            Ok(()) => StatusMessage::success(format!("Test successful for {}", profile.name)),
            Err(e) => StatusMessage::error(format!("Test failed for {}: {e}", profile.name)),
        };
        self.settings.screen.set_status(status);
    }

    // ========================================================================
    // Wallet Editing
    // ========================================================================

    fn handle_wallet_input(&mut self, command: AppCommand) {
        match command {
            AppCommand::TypeChar(c) => self.settings.screen.input.push(c),
            AppCommand::Backspace => {
                self.settings.screen.input.pop();
            }
            AppCommand::Submit => {
                self.config.wallet_addr = self.settings.take_wallet_input();
                let status = match self.store.save(&self.config) {
                    Ok(()) => StatusMessage::success("Wallet address saved"),
                    Err(e) => {
                        warn!(error = %e, "failed to persist wallet address");
                        StatusMessage::error(format!("Failed to save config: {e}"))
                    }
                };
                self.settings.screen.set_status(status);
            }
            _ => {}
        }
    }

    // ========================================================================
    // Profile Editing
    // ========================================================================

    async fn handle_profile_form(&mut self, command: AppCommand) {
        if command == AppCommand::Submit {
            if let Some(form) = self.settings.take_form() {
                self.save_profile(form.profile).await;
            }
            return;
        }

        let Some(form) = self.settings.form_mut() else {
            return;
        };
        match command {
            AppCommand::NextField => form.next_field(),
            AppCommand::PrevField => form.prev_field(),
            AppCommand::TypeChar(c) => form.push_char(c),
            AppCommand::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Validates, tests and commits a profile, then persists and reloads.
    ///
    /// The form is already closed. Validation and connection failures leave
    /// registry, config and file untouched. A failed write keeps the
    /// in-memory commit.
    pub(super) async fn save_profile(&mut self, profile: NetworkProfile) {
        if let Err(e) = profile.validate() {
            self.settings
                .screen
                .set_status(StatusMessage::error(format!("Validation failed: {e}")));
            return;
        }

        if let Err(e) = self.session.test_connection(&profile).await.into_result() {
            self.settings
                .screen
                .set_status(StatusMessage::error(format!("Connection test failed: {e}")));
            return;
        }

        let name = profile.name.clone();
        let upsert = self.registry.upsert(profile.clone());
        self.settings.screen.cursor = upsert.index;
        self.config.upsert_custom(profile);
        info!(network = %name, is_new = upsert.is_new, "profile committed");

        if let Err(e) = self.store.save(&self.config) {
            warn!(
                network = %name,
                error = %e,
                "profile kept in memory but not written to disk"
            );
            self.settings
                .screen
                .set_status(StatusMessage::error(format!("Failed to save config: {e}")));
            return;
        }

        match self.store.load() {
            Ok(reloaded) => {
                self.registry.overlay(&reloaded.custom_networks);
                self.config = reloaded;
                self.settings
                    .screen
                    .set_status(StatusMessage::success(format!("Network {name} saved successfully")));
            }
            Err(e) => {
                warn!(error = %e, "reload after save failed");
                self.settings.screen.set_status(StatusMessage::error(format!(
                    "Warning: Failed to reload config: {e}"
                )));
            }
        }
    }

    // ========================================================================
    // Status Snapshot
    // ========================================================================

    /// Re-reads the status snapshot from the live session.
    ///
    /// On failure the previous snapshot is dropped.
    pub(super) async fn refresh_status(&mut self) -> Result<(), ChainError> {
        match self.session.status().await {
            Ok(status) => {
                self.last_status = Some(status);
                Ok(())
            }
            Err(e) => {
                self.last_status = None;
                Err(e)
            }
        }
    }
}
