//! Application types shown on the applications screen.
//!
//! [`ApplicationSummary`] rows come from the indexer search; the
//! [`ApplicationDetails`] for a selected row come from algod.

use serde_json::Value;

use super::ChainError;

// ============================================================================
// Application Summary
// ============================================================================

/// One row of the application list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationSummary {
    /// The application ID.
    pub app_id: u64,
    /// The creator's address.
    pub creator: String,
    /// Whether the application is deleted.
    pub deleted: bool,
}

impl ApplicationSummary {
    /// Create a new `ApplicationSummary`.
    #[must_use]
    pub fn new(app_id: u64, creator: impl Into<String>, deleted: bool) -> Self {
        Self {
            app_id,
            creator: creator.into(),
            deleted,
        }
    }

    /// Parses one element of an indexer `applications` array.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Parse`] if the element has no numeric `id`.
    pub fn from_json(app: &Value) -> Result<Self, ChainError> {
        let app_id = app["id"]
            .as_u64()
            .ok_or_else(|| ChainError::parse("application entry without id"))?;
        Ok(Self {
            app_id,
            creator: app["params"]["creator"]
                .as_str()
                .unwrap_or("unknown")
                .to_string(),
            deleted: app["deleted"].as_bool().unwrap_or(false),
        })
    }
}

// ============================================================================
// Application Details
// ============================================================================

/// Details for a single application, read from algod.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationDetails {
    /// The application ID.
    pub app_id: u64,
    /// The creator's address.
    pub creator: String,
    /// Number of global state entries currently stored.
    pub global_state_len: usize,
    /// Approval program size in bytes.
    pub approval_size: usize,
    /// Clear state program size in bytes.
    pub clear_size: usize,
}

impl ApplicationDetails {
    /// Parses an algod `/v2/applications/{id}` response.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Parse`] if the response has no numeric `id`.
    pub fn from_json(app: &Value) -> Result<Self, ChainError> {
        let app_id = app["id"]
            .as_u64()
            .ok_or_else(|| ChainError::parse("application response without id"))?;
        let params = &app["params"];
        Ok(Self {
            app_id,
            creator: params["creator"].as_str().unwrap_or_default().to_string(),
            global_state_len: params["global-state"].as_array().map_or(0, Vec::len),
            approval_size: decoded_len(params["approval-program"].as_str()),
            clear_size: decoded_len(params["clear-state-program"].as_str()),
        })
    }

    /// One-line summary for the status bar.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "App {}: {} global keys, approval {} bytes, clear {} bytes",
            self.app_id, self.global_state_len, self.approval_size, self.clear_size
        )
    }
}

/// Byte length of a base64 string once decoded.
fn decoded_len(encoded: Option<&str>) -> usize {
    let Some(encoded) = encoded else {
        return 0;
    };
    let trimmed = encoded.trim_end_matches('=');
    trimmed.len() * 3 / 4
}

// ============================================================================
// Tests
// ============================================================================
