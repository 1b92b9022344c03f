use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    client::GoalRunner,
    constants::GOAL_TIMEOUT_SECS,
    state::{App, ConfigStore, platform::AppPaths},
    ui::panels::main_menu::{BANNER, TAGLINE},
};

// LazyChain version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// LazyChain - Terminal UI for the Algorand network
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of ~/.lazy-chain/config.json
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// The goal binary used by Commands Goals
    #[arg(long, value_name = "PATH", default_value = "goal")]
    goal_bin: String,

    /// Node data directory passed to goal as -d (repeatable)
    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        env = "ALGORAND_DATA",
        value_delimiter = ','
    )]
    data_dir: Vec<String>,

    /// KMD directory passed to goal as -k
    #[arg(short = 'k', long, value_name = "DIR")]
    kmd_dir: Option<String>,

    /// Wallet name passed to goal as -w
    #[arg(short = 'w', long, value_name = "NAME")]
    wallet: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Display version with ASCII art
    Version,
    /// Print the configuration file path
    ConfigPath,
}

impl Cli {
    /// The config file, honoring `--config`.
    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(AppPaths::from_home()?.config_file()),
        }
    }

    fn goal_runner(&self) -> GoalRunner {
        GoalRunner {
            binary: self.goal_bin.clone(),
            data_dirs: self.data_dir.clone(),
            kmd_dir: self.kmd_dir.clone(),
            wallet: self.wallet.clone(),
            timeout: Duration::from_secs(GOAL_TIMEOUT_SECS),
        }
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if handle_cli_commands(&cli)? {
        return Ok(());
    }

    // Logging is best effort; the UI still runs without it.
    if let Ok(paths) = AppPaths::from_home()
        && paths.ensure_root().is_ok()
    {
        let _ = logging::init(&paths.log_file());
    }

    let store = ConfigStore::new(cli.config_path()?);
    let mut app = App::new(store, cli.goal_runner())?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

/// Handles the `version` and `config-path` subcommands.
/// Returns Ok(true) if a command was handled and the app should exit.
fn handle_cli_commands(cli: &Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Version) => {
            println!("{BANNER}");
            println!("LazyChain v{VERSION}");
            println!("{TAGLINE}");
            Ok(true)
        }
        Some(Commands::ConfigPath) => {
            println!("{}", cli.config_path()?.display());
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_runner_flags() {
        let cli = Cli::try_parse_from([
            "lazychain",
            "--goal-bin",
            "/opt/goal",
            "-d",
            "/var/node",
            "-d",
            "/var/node2",
            "-w",
            "main",
        ])
        .unwrap();

        let runner = cli.goal_runner();
        assert_eq!(runner.binary, "/opt/goal");
        assert_eq!(
            runner.base_flags(),
            vec!["-d", "/var/node", "-d", "/var/node2", "-w", "main"]
        );
    }

    #[test]
    fn test_config_override_and_subcommand() {
        let cli =
            Cli::try_parse_from(["lazychain", "--config", "/tmp/lc.json", "config-path"]).unwrap();

        assert_eq!(cli.command, Some(Commands::ConfigPath));
        assert_eq!(cli.config_path().unwrap(), PathBuf::from("/tmp/lc.json"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lazychain"]).unwrap();
        assert_eq!(cli.goal_bin, "goal");
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }
}
