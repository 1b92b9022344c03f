//! Network clients, the live session and the `goal` runner.
//!
//! - [`node`] - Algorand Node (algod), the primary client
//! - [`indexer`] - Algorand Indexer, the optional secondary client
//! - [`session`] - The single live connection and its operations
//! - [`goal`] - Process wrapper for the `goal` CLI
//!
//! # Example
//!
//! ```ignore
//! use crate::client::NetworkSession;
//!
//! let mut session = NetworkSession::new();
//! if session.test_connection(&profile).await.into_result().is_ok() {
//!     session.connect(&profile).await?;
//! }
//! let status = session.status().await?;
//! ```

pub mod endpoint;
pub mod goal;
pub mod http;
pub mod indexer;
pub mod node;
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

pub use goal::GoalRunner;
pub use session::NetworkSession;
