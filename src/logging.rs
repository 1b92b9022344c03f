//! File logging.
//!
//! The terminal belongs to the UI, so log records go to
//! `~/.lazy-chain/lazychain.log`. The filter comes from `LAZYCHAIN_LOG`
//! (for example `LAZYCHAIN_LOG=lazychain=debug`) and defaults to `info`.

use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

/// Installs the global subscriber, appending to `path`.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be opened, or a
/// subscriber is already installed. Callers treat this as "run without logging".
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!(e))?;

    Ok(())
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
}
