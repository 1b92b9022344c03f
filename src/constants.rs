//! Application constants for the LazyChain TUI.
//!
//! Timeouts, well-known network values, file locations and UI dimensions used
//! across the crate.

// ============================================================================
// Network Constants
// ============================================================================

/// Deadline shared by the algod and indexer checks of a connection test or
/// connect.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Deadline for each call made while capturing a status snapshot.
pub const STATUS_TIMEOUT_SECS: u64 = 5;

/// Default deadline for one `goal` invocation.
pub const GOAL_TIMEOUT_SECS: u64 = 20;

/// LocalNet API token (used for development)
pub const LOCALNET_API_TOKEN: &str =
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// LocalNet algod port.
pub const LOCALNET_ALGOD_PORT: &str = "4001";

/// LocalNet indexer port.
pub const LOCALNET_INDEXER_PORT: &str = "8980";

/// Network selected when no configuration file exists.
pub const DEFAULT_NETWORK: &str = "testnet";

/// Maximum rows fetched for the applications screen.
pub const APPLICATION_LIST_LIMIT: usize = 25;

// ============================================================================
// File Locations
// ============================================================================

/// Directory under the home directory holding config and logs.
pub const APP_DIR_NAME: &str = ".lazy-chain";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "lazychain.log";

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "LAZYCHAIN_LOG";

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Smallest terminal width the layout supports.
pub const MIN_WIDTH: u16 = 80;

/// Smallest terminal height the layout supports.
pub const MIN_HEIGHT: u16 = 24;

/// Height of the header bar (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer help bar (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of one bordered form field (in rows).
pub const FORM_FIELD_HEIGHT: u16 = 3;

/// How long the event loop waits for input before redrawing, in milliseconds.
pub const EVENT_POLL_MS: u64 = 250;
