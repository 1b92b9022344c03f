//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.

use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::GoalRunner;
use crate::domain::NetworkProfile;
use crate::state::{App, ConfigStore};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// Factory for network profiles.
pub struct ProfileMother;

impl ProfileMother {
    /// A profile with only an algod endpoint. The port is ignored when `url`
    /// already carries one, as mock server URIs do.
    #[must_use]
    pub fn algod_only(name: &str, url: &str) -> NetworkProfile {
        NetworkProfile::new(name, url, "4001")
    }

    /// A profile with both endpoints.
    #[must_use]
    pub fn with_indexer(name: &str, algod_url: &str, indexer_url: &str) -> NetworkProfile {
        Self::algod_only(name, algod_url).with_indexer(indexer_url, "8980")
    }
}

/// A URL nothing listens on.
#[must_use]
pub fn unreachable_url() -> &'static str {
    "http://127.0.0.1:1"
}

// ============================================================================
// HTTP Stubs
// ============================================================================

/// Starts a mock algod answering status and genesis calls.
pub async fn mock_algod(last_round: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "last-round": last_round
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/transactions/params"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genesis-id": "testnet-v1.0",
            "genesis-hash": "SGO1GKSzyE7IEPItTxCByw9x8FmnrCDexi9/cOUJOiI="
        })))
        .mount(&server)
        .await;
    server
}

/// Starts a mock indexer whose application search returns nothing.
pub async fn mock_indexer() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "applications": []
        })))
        .mount(&server)
        .await;
    server
}

// ============================================================================
// Config and App
// ============================================================================

/// A config store inside a fresh temporary directory. Keep the `TempDir`
/// alive for as long as the store is used.
#[must_use]
pub fn temp_store() -> (TempDir, ConfigStore) {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let store = ConfigStore::new(dir.path().join("config.json"));
    (dir, store)
}

/// An app backed by an empty temporary config and a `goal` that does not
/// exist.
#[must_use]
pub fn test_app() -> (TempDir, App) {
    let (dir, store) = temp_store();
    let runner = GoalRunner {
        binary: "goal-not-installed-for-tests".to_string(),
        ..GoalRunner::default()
    };
    let app = App::new(store, runner).expect("default config should load");
    (dir, app)
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(120, 40)).expect("test terminal should be created")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("test terminal should be created")
}

#[fixture]
pub fn app() -> (TempDir, App) {
    test_app()
}
