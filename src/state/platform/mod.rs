//! Platform-specific abstractions.
//!
//! - [`paths`] - Configuration and log file locations

pub mod paths;

pub use paths::AppPaths;
