//! Error types for network and command operations.
//!
//! Every failure the screens can report is one of these variants. The
//! [`Endpoint`] tag on connectivity errors lets callers tell a primary (algod)
//! failure from a secondary (indexer) one without looking at message text.

use std::fmt;

use thiserror::Error;

// ============================================================================
// Endpoint
// ============================================================================

/// Which upstream client an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The primary data-access client (algod).
    Algod,
    /// The optional secondary indexing client (indexer).
    Indexer,
}

impl Endpoint {
    /// Returns the short name used in status messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Algod => "algod",
            Self::Indexer => "indexer",
        }
    }

    /// Returns the HTTP header carrying the API token for this endpoint.
    #[must_use]
    pub const fn token_header(&self) -> &'static str {
        match self {
            Self::Algod => "X-Algo-API-Token",
            Self::Indexer => "X-Indexer-API-Token",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors produced by profile validation, network clients and the command runner.
#[derive(Debug, Error)]
pub enum ChainError {
    /// A required field is missing or malformed. Detected before any I/O.
    #[error("{0}")]
    Validation(String),

    /// The client for an endpoint could not be constructed.
    #[error("failed to create {endpoint} client: {message}")]
    ClientInit {
        /// Endpoint whose client failed to build.
        endpoint: Endpoint,
        /// Underlying reason.
        message: String,
    },

    /// The HTTP request itself failed (connection refused, DNS, TLS, ...).
    #[error("{endpoint} request failed: {source}")]
    Request {
        /// Endpoint that was called.
        endpoint: Endpoint,
        /// Transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Http {
        /// Endpoint that was called.
        endpoint: Endpoint,
        /// HTTP status code.
        status: u16,
        /// Response body, trimmed.
        body: String,
    },

    /// The call did not complete before its deadline.
    #[error("{endpoint} did not respond within {secs}s")]
    Timeout {
        /// Endpoint that was called.
        endpoint: Endpoint,
        /// Deadline in seconds.
        secs: u64,
    },

    /// The response could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// A looked-up entity does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// Kind of entity ("account", "transaction", ...).
        entity: &'static str,
        /// Identifier that was searched for.
        id: String,
    },

    /// An operation needs a live connection and there is none.
    #[error("not connected to any network")]
    NotConnected,

    /// The external command could not be run.
    #[error("command failed: {0}")]
    Command(String),
}

impl ChainError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Returns the endpoint a connectivity error came from, if any.
    #[must_use]
    pub const fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::ClientInit { endpoint, .. }
            | Self::Request { endpoint, .. }
            | Self::Http { endpoint, .. }
            | Self::Timeout { endpoint, .. } => Some(*endpoint),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
