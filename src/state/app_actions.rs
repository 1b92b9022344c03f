//! Actions of the applications, command builder and explore screens.

use tracing::{debug, warn};

use crate::commands::AppCommand;
use crate::constants::APPLICATION_LIST_LIMIT;
use crate::domain::{ChainError, LookupKind, LookupResult};

use super::{App, StatusMessage};

impl App {
    // ========================================================================
    // Applications
    // ========================================================================

    pub(super) async fn handle_applications(&mut self, command: &AppCommand) {
        match command {
            AppCommand::MoveUp => self.applications.screen.move_up(),
            AppCommand::MoveDown => {
                let len = self.applications.apps.len();
                self.applications.screen.move_down(len);
            }
            AppCommand::Refresh => self.load_applications().await,
            AppCommand::Select => self.show_application_details().await,
            _ => {}
        }
    }

    /// Searches the indexer for applications, by the wallet when one is set.
    pub(super) async fn load_applications(&mut self) {
        let Some(indexer) = self.session.indexer() else {
            let message = if self.session.is_connected() {
                "The connected network has no indexer"
            } else {
                "Not connected. Connect to a network in Settings first"
            };
            self.applications
                .screen
                .set_status(StatusMessage::error(message));
            return;
        };

        let creator = Some(self.config.wallet_addr.as_str()).filter(|w| !w.trim().is_empty());
        match indexer
            .search_applications(creator, APPLICATION_LIST_LIMIT)
            .await
        {
            Ok(apps) => {
                let status = match (apps.len(), creator) {
                    (0, Some(_)) => StatusMessage::info("No applications created by this wallet"),
                    (0, None) => StatusMessage::info("No applications found"),
                    (n, _) => StatusMessage::info(format!("Loaded {n} applications")),
                };
                self.applications.set_apps(apps);
                self.applications.screen.set_status(status);
            }
            Err(e) => {
                warn!(error = %e, "application search failed");
                self.applications
                    .screen
                    .set_status(StatusMessage::error(format!("Failed to load applications: {e}")));
            }
        }
    }

    async fn show_application_details(&mut self) {
        let Some(app_id) = self.applications.selected().map(|a| a.app_id) else {
            return;
        };
        let Some(node) = self.session.node() else {
            self.applications
                .screen
                .set_status(StatusMessage::error(ChainError::NotConnected.to_string()));
            return;
        };

        let status = match node.application_details(app_id).await {
            Ok(details) => StatusMessage::info(details.summary()),
            Err(e) => StatusMessage::error(format!("Failed to load app {app_id}: {e}")),
        };
        self.applications.screen.set_status(status);
    }

    // ========================================================================
    // Command Builder
    // ========================================================================

    pub(super) async fn handle_command_builder(&mut self, command: AppCommand) {
        match command {
            AppCommand::MoveUp => self.builder.select_prev(),
            AppCommand::MoveDown => self.builder.select_next(),
            AppCommand::NextField => self.builder.active_mut().next_field(),
            AppCommand::PrevField => self.builder.active_mut().prev_field(),
            AppCommand::TypeChar(c) => self.builder.active_mut().push_char(c),
            AppCommand::Backspace => self.builder.active_mut().backspace(),
            AppCommand::Submit => self.run_active_builder().await,
            _ => {}
        }
    }

    /// Validates the active form and runs `goal` with its arguments.
    async fn run_active_builder(&mut self) {
        let argv = match self.builder.active().argv() {
            Ok(argv) => argv,
            Err(e) => {
                self.builder.active_mut().output = format!("Validation: {e}");
                return;
            }
        };

        debug!(?argv, "running goal");
        let output = self.runner.run(&argv).await;
        self.builder.active_mut().output = output.display();
    }

    /// Reports in the builder status whether `goal` can be found.
    pub(super) fn check_goal_binary(&mut self) {
        let status = match self.runner.check_binary() {
            Ok(path) => StatusMessage::info(format!("Using {}", path.display())),
            Err(e) => StatusMessage::error(e.to_string()),
        };
        self.builder.screen.set_status(status);
    }

    // ========================================================================
    // Explore
    // ========================================================================

    pub(super) async fn handle_explore(&mut self, command: AppCommand) {
        if self.explore.screen.editing {
            match command {
                AppCommand::TypeChar(c) => self.explore.screen.input.push(c),
                AppCommand::Backspace => {
                    self.explore.screen.input.pop();
                }
                AppCommand::CycleLookupKind => self.explore.cycle_kind(),
                AppCommand::Submit => self.run_lookup().await,
                _ => {}
            }
            return;
        }

        match command {
            AppCommand::FocusInput => self.explore.focus_input(),
            AppCommand::CycleLookupKind => self.explore.cycle_kind(),
            AppCommand::Submit => self.run_lookup().await,
            AppCommand::Refresh => {
                let status = match self.refresh_status().await {
                    Ok(()) => StatusMessage::info("Status refreshed"),
                    Err(e) => StatusMessage::error(format!("Status unavailable: {e}")),
                };
                self.explore.screen.set_status(status);
            }
            _ => {}
        }
    }

    /// Runs the lookup typed in the explore box.
    async fn run_lookup(&mut self) {
        let kind = self.explore.kind;
        let query = self.explore.query().to_string();

        match self.lookup(kind, &query).await {
            Ok(result) => {
                self.explore.result = Some(result);
                self.explore.screen.clear_status();
            }
            Err(e) => {
                self.explore.result = None;
                self.explore
                    .screen
                    .set_status(StatusMessage::error(format!("Lookup failed: {e}")));
            }
        }
    }

    async fn lookup(&self, kind: LookupKind, query: &str) -> Result<LookupResult, ChainError> {
        kind.validate(query)?;
        let node = self.session.node().ok_or(ChainError::NotConnected)?;

        match kind {
            LookupKind::Account => {
                let account = node.account(query).await?;
                Ok(LookupResult::from_account(query, &account))
            }
            LookupKind::Application => {
                let app_id = query
                    .parse::<u64>()
                    .map_err(|_| ChainError::validation(format!("invalid application ID '{query}'")))?;
                let app = node.application(app_id).await?;
                Ok(LookupResult::from_application(&app))
            }
            LookupKind::Transaction => {
                let indexer = self.session.indexer().ok_or_else(|| {
                    ChainError::validation("transaction lookup needs an indexer")
                })?;
                let response = indexer.transaction(query).await?;
                LookupResult::from_transaction(query, &response)
            }
        }
    }
}
