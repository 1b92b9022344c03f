//! Application lifecycle: construction and the event loop.

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;
use tracing::info;

use crate::client::{GoalRunner, NetworkSession};
use crate::commands::KeyMapper;
use crate::constants::EVENT_POLL_MS;
use crate::domain::NetworkRegistry;
use crate::tui::Tui;
use crate::ui;

use super::{
    App, ApplicationsState, CommandBuilderState, ConfigStore, ExploreState, Navigator,
    ScreenState, SettingsState,
};

impl App {
    /// Creates the app from the persisted configuration.
    ///
    /// The settings cursor starts on the configured network, or the first
    /// profile when that name is unknown. No connection is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn new(store: ConfigStore, runner: GoalRunner) -> Result<Self> {
        let config = store
            .load()
            .wrap_err_with(|| format!("failed to load {}", store.path().display()))?;
        let registry = NetworkRegistry::from_custom(&config.custom_networks);

        let mut settings = SettingsState::default();
        settings.screen.cursor = registry.position(&config.network).unwrap_or(0);

        info!(
            network = %config.network,
            profiles = registry.len(),
            "configuration loaded"
        );

        Ok(Self {
            nav: Navigator::new(),
            project_menu: ScreenState::default(),
            settings,
            applications: ApplicationsState::default(),
            builder: CommandBuilderState::default(),
            explore: ExploreState::default(),
            config,
            registry,
            session: NetworkSession::new(),
            last_status: None,
            store,
            runner,
            exit: false,
        })
    }

    /// Runs the event loop until a quit command.
    ///
    /// One key event is handled at a time and fully applied, network calls
    /// included, before the next is read.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or reading terminal events fails.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let timeout = Duration::from_millis(EVENT_POLL_MS);

        while !self.exit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        let context = self.input_context();
                        let command = KeyMapper::map_key(key, &context);
                        self.execute(command).await;
                    }
                    Event::Resize(_, _) => {
                        terminal.autoresize()?;
                    }
                    _ => {}
                }
            }
        }

        info!("exiting");
        Ok(())
    }
}
