//! Persisted session configuration.
//!
//! [`SessionConfig`] is the single flat JSON file LazyChain keeps:
//!
//! ```json
//! {
//!   "network": "testnet",
//!   "wallet_addr": "",
//!   "custom_networks": []
//! }
//! ```
//!
//! [`ConfigStore`] owns the file location so tests can point it at a
//! temporary directory.

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::DEFAULT_NETWORK;
use crate::domain::NetworkProfile;

// ============================================================================
// SessionConfig
// ============================================================================

/// Configuration persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name of the selected network profile.
    #[serde(default)]
    pub network: String,
    /// Wallet address used to filter applications.
    #[serde(default)]
    pub wallet_addr: String,
    /// User-defined network profiles. Never absent: `null` loads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_networks: Vec<NetworkProfile>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            wallet_addr: String::new(),
            custom_networks: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Replaces the user-defined profile with the same name, or appends it.
    pub fn upsert_custom(&mut self, profile: NetworkProfile) {
        match self
            .custom_networks
            .iter_mut()
            .find(|p| p.name == profile.name)
        {
            Some(existing) => *existing = profile,
            None => self.custom_networks.push(profile),
        }
    }

    /// Returns `true` if a user-defined profile has this name.
    #[must_use]
    pub fn is_custom(&self, name: &str) -> bool {
        self.custom_networks.iter().any(|p| p.name == name)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ============================================================================
// ConfigStore
// ============================================================================

/// Reads and writes [`SessionConfig`] at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configuration file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration.
    ///
    /// A missing file yields [`SessionConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or is not
    /// valid configuration JSON.
    pub fn load(&self) -> Result<SessionConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(SessionConfig::default());
            }
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("failed to read {}", self.path.display()));
            }
        };

        serde_json::from_str(&content)
            .wrap_err_with(|| format!("malformed config file {}", self.path.display()))
    }

    /// Writes the configuration, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, config: &SessionConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
