//! Snapshot of the connected network's state.

use chrono::{DateTime, Local};

/// Point-in-time view of the live session, captured by a status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStatus {
    /// Name of the connected profile.
    pub network: String,
    /// Normalized algod endpoint.
    pub algod_url: String,
    /// Normalized indexer endpoint; empty when none is configured.
    pub indexer_url: String,
    /// Whether the session was connected when the snapshot was taken.
    pub connected: bool,
    /// Latest round reported by algod.
    pub last_round: u64,
    /// Genesis ID of the network.
    pub genesis_id: String,
    /// Genesis hash, base64.
    pub genesis_hash: String,
    /// Whether the indexer answered its probe.
    pub indexer_healthy: bool,
    /// When the snapshot was captured.
    pub captured_at: DateTime<Local>,
}

impl NetworkStatus {
    /// Key/value rows for display.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let indexer = if self.indexer_url.is_empty() {
            "not configured".to_string()
        } else if self.indexer_healthy {
            format!("{} (healthy)", self.indexer_url)
        } else {
            format!("{} (unreachable)", self.indexer_url)
        };
        vec![
            ("Network", self.network.clone()),
            ("Algod", self.algod_url.clone()),
            ("Indexer", indexer),
            ("Last round", self.last_round.to_string()),
            ("Genesis ID", self.genesis_id.clone()),
            ("Genesis hash", self.genesis_hash.clone()),
            ("Updated", self.captured_at.format("%H:%M:%S").to_string()),
        ]
    }
}
