//! Domain types for LazyChain.
//!
//! Pure data types and validation with no I/O.
//!
//! # Module Organization
//!
//! - [`error`] - Error taxonomy shared by clients and screens
//! - [`network`] - Network profiles and the profile registry
//! - [`status`] - Network status snapshots
//! - [`application`] - Application list rows and details
//! - [`explorer`] - Explore-screen lookups
//! - [`goal`] - `goal` command builders

// ============================================================================
// Module Declarations
// ============================================================================

pub mod application;
pub mod error;
pub mod explorer;
pub mod goal;
pub mod network;
pub mod status;

// ============================================================================
// Re-exports
// ============================================================================

pub use application::{ApplicationDetails, ApplicationSummary};
pub use error::{ChainError, Endpoint};
pub use explorer::{LookupKind, LookupResult};
pub use goal::BuilderKind;
pub use network::{NetworkProfile, NetworkRegistry, builtin_profile};
pub use status::NetworkStatus;
