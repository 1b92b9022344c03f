//! Live network session: at most one algod/indexer client pair.
//!
//! Every call is awaited inline by the event loop, so at most one session
//! operation runs at a time and no locking is needed. Each operation carries
//! its own deadline; nothing is retried.

use std::time::Duration;

use chrono::Local;
use tokio::time::Instant;
use tracing::{info, warn};

use super::endpoint::normalize_endpoint;
use super::http::{HttpConfig, within};
use super::indexer::IndexerClient;
use super::node::NodeClient;
use crate::constants::{CONNECT_TIMEOUT_SECS, STATUS_TIMEOUT_SECS};
use crate::domain::{ChainError, Endpoint, NetworkProfile, NetworkStatus};

// ============================================================================
// Results
// ============================================================================

/// Outcome of a connection test, with independent primary and secondary results.
#[derive(Debug)]
pub struct ConnectionReport {
    /// Result of the algod status check.
    pub primary: Result<(), ChainError>,
    /// Result of the indexer probe. `None` when the profile has no indexer or
    /// the primary already failed.
    pub secondary: Option<Result<(), ChainError>>,
}

impl ConnectionReport {
    /// `true` if the primary passed and the secondary did not fail.
    #[cfg(test)]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.primary.is_ok() && !matches!(self.secondary, Some(Err(_)))
    }

    /// Collapses the report into the first failure, primary first.
    ///
    /// # Errors
    ///
    /// The primary error, otherwise the secondary error.
    pub fn into_result(self) -> Result<(), ChainError> {
        self.primary?;
        self.secondary.unwrap_or(Ok(()))
    }
}

/// Result of a successful connect.
#[derive(Debug)]
pub struct ConnectOutcome {
    /// Why the indexer is unavailable, when one was configured but failed.
    pub secondary_warning: Option<ChainError>,
}

// ============================================================================
// Network Session
// ============================================================================

/// The live connection state. Never persisted.
///
/// Invariant: `connected` implies `node` is `Some`.
#[derive(Debug, Default)]
pub struct NetworkSession {
    node: Option<NodeClient>,
    indexer: Option<IndexerClient>,
    profile: NetworkProfile,
    connected: bool,
    http: HttpConfig,
}

impl NetworkSession {
    /// Creates an empty, disconnected session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a profile's endpoints without touching session state.
    ///
    /// The algod status call and the indexer probe share one deadline of
    /// [`CONNECT_TIMEOUT_SECS`].
    pub async fn test_connection(&self, profile: &NetworkProfile) -> ConnectionReport {
        let budget = Duration::from_secs(CONNECT_TIMEOUT_SECS);
        let deadline = Instant::now() + budget;

        let primary = match self.build_node(profile) {
            Ok(node) => within(deadline, Endpoint::Algod, budget, node.status())
                .await
                .map(|_| ()),
            Err(e) => Err(e),
        };

        let secondary = if primary.is_ok() && profile.has_indexer() {
            let probe = match self.build_indexer(profile) {
                Ok(indexer) => within(deadline, Endpoint::Indexer, budget, indexer.probe()).await,
                Err(e) => Err(e),
            };
            Some(probe)
        } else {
            None
        };

        ConnectionReport { primary, secondary }
    }

    /// Connects to a profile, replacing any current connection on success.
    ///
    /// The indexer is best-effort: when it cannot be built or probed the
    /// session still connects, without an indexer, and the reason is returned
    /// in [`ConnectOutcome::secondary_warning`].
    ///
    /// # Errors
    ///
    /// Fails only when algod cannot be built or does not answer its status
    /// call; the session is left unchanged in that case.
    pub async fn connect(&mut self, profile: &NetworkProfile) -> Result<ConnectOutcome, ChainError> {
        let budget = Duration::from_secs(CONNECT_TIMEOUT_SECS);
        let deadline = Instant::now() + budget;

        let node = self.build_node(profile)?;
        within(deadline, Endpoint::Algod, budget, node.status()).await?;

        let mut secondary_warning = None;
        let indexer = if profile.has_indexer() {
            let probed = match self.build_indexer(profile) {
                Ok(indexer) => within(deadline, Endpoint::Indexer, budget, indexer.probe())
                    .await
                    .map(|()| indexer),
                Err(e) => Err(e),
            };
            match probed {
                Ok(indexer) => Some(indexer),
                Err(e) => {
                    warn!(network = %profile.name, error = %e, "indexer unavailable");
                    secondary_warning = Some(e);
                    None
                }
            }
        } else {
            None
        };

        info!(network = %profile.name, indexer = indexer.is_some(), "connected");
        self.node = Some(node);
        self.indexer = indexer;
        self.profile = profile.clone();
        self.connected = true;

        Ok(ConnectOutcome { secondary_warning })
    }

    /// Captures a status snapshot of the live connection.
    ///
    /// The status and genesis calls each get [`STATUS_TIMEOUT_SECS`]; the
    /// indexer probe only sets the health flag.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotConnected`] without a live connection (no request is
    /// made), otherwise any algod failure.
    pub async fn status(&self) -> Result<NetworkStatus, ChainError> {
        let node = match (&self.node, self.connected) {
            (Some(node), true) => node,
            _ => return Err(ChainError::NotConnected),
        };

        let budget = Duration::from_secs(STATUS_TIMEOUT_SECS);
        let last_round = within(
            Instant::now() + budget,
            Endpoint::Algod,
            budget,
            node.status(),
        )
        .await?;
        let genesis = within(
            Instant::now() + budget,
            Endpoint::Algod,
            budget,
            node.genesis(),
        )
        .await?;

        let indexer_healthy = match &self.indexer {
            Some(indexer) => within(
                Instant::now() + budget,
                Endpoint::Indexer,
                budget,
                indexer.probe(),
            )
            .await
            .is_ok(),
            None => false,
        };

        Ok(NetworkStatus {
            network: self.profile.name.clone(),
            algod_url: node.base_url().to_string(),
            indexer_url: self
                .indexer
                .as_ref()
                .map(|i| i.base_url().to_string())
                .unwrap_or_default(),
            connected: true,
            last_round,
            genesis_id: genesis.id,
            genesis_hash: genesis.hash,
            indexer_healthy,
            captured_at: Local::now(),
        })
    }

    /// `true` iff marked connected and an algod client exists.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected && self.node.is_some()
    }

    /// Drops both clients and forgets the current profile.
    pub fn disconnect(&mut self) {
        if self.connected {
            info!(network = %self.profile.name, "disconnected");
        }
        self.node = None;
        self.indexer = None;
        self.profile = NetworkProfile::default();
        self.connected = false;
    }

    /// The connected profile; default when disconnected.
    #[must_use]
    pub fn current(&self) -> &NetworkProfile {
        &self.profile
    }

    /// The live algod client.
    #[must_use]
    pub fn node(&self) -> Option<&NodeClient> {
        self.node.as_ref().filter(|_| self.connected)
    }

    /// The live indexer client, if one connected.
    #[must_use]
    pub fn indexer(&self) -> Option<&IndexerClient> {
        self.indexer.as_ref().filter(|_| self.connected)
    }

    fn build_node(&self, profile: &NetworkProfile) -> Result<NodeClient, ChainError> {
        let endpoint = normalize_endpoint(&profile.algod_url, &profile.algod_port);
        NodeClient::new(&endpoint, &profile.algod_token, &self.http)
    }

    fn build_indexer(&self, profile: &NetworkProfile) -> Result<IndexerClient, ChainError> {
        let endpoint = normalize_endpoint(&profile.indexer_url, &profile.indexer_port);
        IndexerClient::new(&endpoint, &profile.indexer_token, &self.http)
    }
}

// ============================================================================
// Tests
// ============================================================================
