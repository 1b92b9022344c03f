//! Per-user file locations.
//!
//! Everything LazyChain writes lives under one directory in the user's home:
//!
//! | File | Path |
//! |------|------|
//! | Configuration | `~/.lazy-chain/config.json` |
//! | Log | `~/.lazy-chain/lazychain.log` |
//!
//! # Example
//!
//! ```ignore
//! use crate::state::platform::paths::AppPaths;
//!
//! let paths = AppPaths::from_home()?;
//! println!("Config file: {}", paths.config_file().display());
//! ```

use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, LOG_FILE_NAME};

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves the application directory and the files inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Uses `~/.lazy-chain`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            eyre!("Could not determine home directory. Set HOME (or USERPROFILE on Windows)")
        })?;
        Ok(Self::with_root(home.join(APP_DIR_NAME)))
    }

    /// Uses an explicit application directory.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the application directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_root(&self) -> Result<&Path> {
        fs::create_dir_all(&self.root)?;
        Ok(&self.root)
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Path of the log file.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.root.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_under_root() {
        let paths = AppPaths::with_root("/tmp/lc");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/lc/config.json"));
        assert_eq!(paths.log_file(), PathBuf::from("/tmp/lc/lazychain.log"));
    }

    #[test]
    fn test_ensure_root_creates_directory() {
        let temp = tempfile::tempdir().unwrap();
        let paths = AppPaths::with_root(temp.path().join("nested").join(".lazy-chain"));
        let root = paths.ensure_root().unwrap();
        assert!(root.is_dir());
        assert_eq!(paths.log_file().parent(), Some(root));
    }
}
