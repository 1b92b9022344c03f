//! App-level scenarios: navigation, Esc handling and the settings protocol.

use super::{App, Screen, SettingsMode, StatusKind};
use crate::commands::{AppCommand, InputContext};
use crate::domain::ChainError;
use crate::test_utils::{ProfileMother, mock_algod, test_app, unreachable_url};

// ========================================================================
// Test Helper Functions
// ========================================================================

async fn run(app: &mut App, commands: &[AppCommand]) {
    for command in commands {
        app.execute(command.clone()).await;
    }
}

async fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.execute(AppCommand::TypeChar(c)).await;
    }
}

/// MainMenu → ProjectMenu → the entry at `index`.
async fn open(app: &mut App, index: usize) {
    app.execute(AppCommand::Select).await;
    for _ in 0..index {
        app.execute(AppCommand::MoveDown).await;
    }
    app.execute(AppCommand::Select).await;
}

fn status_text(app: &App) -> &str {
    app.settings
        .screen
        .status
        .as_ref()
        .map_or("", |s| s.text.as_str())
}

// ========================================================================
// Navigation
// ========================================================================

#[tokio::test]
async fn test_settings_round_trip() {
    let (_dir, mut app) = test_app();
    assert_eq!(app.nav.current(), Screen::MainMenu);

    app.execute(AppCommand::Select).await;
    assert_eq!(app.nav.current(), Screen::ProjectMenu);

    app.execute(AppCommand::Select).await;
    assert_eq!(app.nav.current(), Screen::Settings);
    assert_eq!(app.settings.mode, SettingsMode::Browsing);
    assert!(!app.settings.screen.editing);

    app.execute(AppCommand::Back).await;
    assert_eq!(app.nav.current(), Screen::ProjectMenu);
    app.execute(AppCommand::Back).await;
    assert_eq!(app.nav.current(), Screen::MainMenu);
}

#[tokio::test]
async fn test_project_menu_cursor_resets_on_main_menu() {
    let (_dir, mut app) = test_app();
    run(
        &mut app,
        &[AppCommand::Select, AppCommand::MoveDown, AppCommand::MoveDown],
    )
    .await;
    assert_eq!(app.project_menu.cursor, 2);

    run(&mut app, &[AppCommand::Back, AppCommand::Select]).await;
    assert_eq!(app.project_menu.cursor, 0);
}

#[tokio::test]
async fn test_project_menu_opens_every_entry() {
    let expected = [
        Screen::Settings,
        Screen::Applications,
        Screen::CommandBuilder,
        Screen::Explore,
    ];
    for (index, screen) in expected.into_iter().enumerate() {
        let (_dir, mut app) = test_app();
        open(&mut app, index).await;
        assert_eq!(app.nav.current(), screen);
    }
}

#[tokio::test]
async fn test_quit_from_anywhere() {
    let (_dir, mut app) = test_app();
    open(&mut app, 0).await;
    app.execute(AppCommand::EditWallet).await;
    app.execute(AppCommand::Quit).await;
    assert!(app.exit);
}

#[test]
fn test_initial_settings_cursor_follows_configured_network() {
    let (_dir, app) = test_app();
    assert_eq!(app.config.network, "testnet");
    assert_eq!(app.settings.screen.cursor, 1);
}

// ========================================================================
// Esc Handling
// ========================================================================

#[tokio::test]
async fn test_wallet_edit_cancel_keeps_config() {
    let (_dir, mut app) = test_app();
    open(&mut app, 0).await;

    app.execute(AppCommand::EditWallet).await;
    assert_eq!(app.input_context(), InputContext::WalletInput);
    type_text(&mut app, "ABC123").await;
    app.execute(AppCommand::Back).await;

    assert_eq!(app.nav.current(), Screen::Settings);
    assert!(app.config.wallet_addr.is_empty());
    assert!(!app.settings.screen.editing);
    assert_eq!(app.settings.mode, SettingsMode::Browsing);

    app.execute(AppCommand::Back).await;
    assert_eq!(app.nav.current(), Screen::ProjectMenu);
}

#[tokio::test]
async fn test_wallet_edit_commit_persists() {
    let (_dir, mut app) = test_app();
    open(&mut app, 0).await;

    app.execute(AppCommand::EditWallet).await;
    type_text(&mut app, "ABC1234").await;
    run(&mut app, &[AppCommand::Backspace, AppCommand::Submit]).await;

    assert_eq!(app.config.wallet_addr, "ABC123");
    assert_eq!(app.store.load().unwrap().wallet_addr, "ABC123");
    assert_eq!(app.input_context(), InputContext::Settings);
}

#[tokio::test]
async fn test_wallet_commit_keeps_buffer_as_typed() {
    let (_dir, mut app) = test_app();
    open(&mut app, 0).await;

    app.execute(AppCommand::EditWallet).await;
    type_text(&mut app, " ADDR ").await;
    app.execute(AppCommand::Submit).await;

    assert_eq!(app.config.wallet_addr, " ADDR ");
    assert_eq!(app.store.load().unwrap().wallet_addr, " ADDR ");
}

#[tokio::test]
async fn test_profile_form_cancel_discards() {
    let (_dir, mut app) = test_app();
    open(&mut app, 0).await;

    app.execute(AppCommand::CreateProfile).await;
    assert_eq!(app.input_context(), InputContext::ProfileForm);
    type_text(&mut app, "zzz").await;
    app.execute(AppCommand::Back).await;

    assert_eq!(app.nav.current(), Screen::Settings);
    assert!(app.settings.form().is_none());
    assert!(app.registry.get("customzzz").is_none());
}

#[tokio::test]
async fn test_explore_input_esc_then_back() {
    let (_dir, mut app) = test_app();
    open(&mut app, 3).await;

    app.execute(AppCommand::FocusInput).await;
    assert_eq!(app.input_context(), InputContext::ExploreInput);
    type_text(&mut app, "q").await;
    assert!(!app.exit);

    app.execute(AppCommand::Back).await;
    assert_eq!(app.nav.current(), Screen::Explore);
    assert_eq!(app.input_context(), InputContext::Explore);

    app.execute(AppCommand::Back).await;
    assert_eq!(app.nav.current(), Screen::ProjectMenu);
}

#[tokio::test]
async fn test_leaf_resets_when_refocused() {
    let (_dir, mut app) = test_app();
    open(&mut app, 3).await;
    app.execute(AppCommand::FocusInput).await;
    type_text(&mut app, "ADDR").await;
    run(&mut app, &[AppCommand::Back, AppCommand::Back]).await;

    app.execute(AppCommand::Select).await;
    assert_eq!(app.nav.current(), Screen::Explore);
    assert!(app.explore.screen.input.is_empty());
}

// ========================================================================
// Profile Save Protocol
// ========================================================================

#[tokio::test]
async fn test_save_with_empty_name_fails_validation() {
    let (_dir, mut app) = test_app();
    open(&mut app, 0).await;

    app.execute(AppCommand::CreateProfile).await;
    for _ in 0.."custom".len() {
        app.execute(AppCommand::Backspace).await;
    }
    app.execute(AppCommand::Submit).await;

    assert_eq!(status_text(&app), "Validation failed: network name cannot be empty");
    assert_eq!(app.registry.len(), 3);
    assert!(app.config.custom_networks.is_empty());
    assert!(!app.store.path().exists());
    assert!(app.settings.form().is_none());
}

#[tokio::test]
async fn test_save_indexer_without_port_fails_validation() {
    let (_dir, mut app) = test_app();
    let profile = ProfileMother::algod_only("custom1", unreachable_url())
        .with_indexer("http://localhost", "");

    app.save_profile(profile).await;

    assert!(status_text(&app).starts_with("Validation failed: indexer port required"));
    assert_eq!(app.registry.len(), 3);
    assert!(!app.store.path().exists());
}

#[tokio::test]
async fn test_save_against_unreachable_node_aborts() {
    let (_dir, mut app) = test_app();
    open(&mut app, 0).await;

    app.execute(AppCommand::CreateProfile).await;
    type_text(&mut app, "1").await;
    if let Some(form) = app.settings.form_mut() {
        form.profile.algod_url = unreachable_url().to_string();
        form.profile.indexer_url.clear();
        form.profile.indexer_port.clear();
    }
    app.execute(AppCommand::Submit).await;

    assert!(status_text(&app).starts_with("Connection test failed:"));
    assert!(app.registry.get("custom1").is_none());
    assert_eq!(app.registry.len(), 3);
    assert!(!app.store.path().exists());
}

#[tokio::test]
async fn test_save_new_then_existing_profile() {
    let (_dir, mut app) = test_app();
    let server = mock_algod(7).await;

    app.save_profile(ProfileMother::algod_only("custom1", &server.uri()))
        .await;

    assert_eq!(status_text(&app), "Network custom1 saved successfully");
    assert_eq!(app.registry.len(), 4);
    assert_eq!(app.settings.screen.cursor, 3);
    assert_eq!(
        app.registry.names().iter().filter(|n| *n == "custom1").count(),
        1
    );
    let stored = app.store.load().unwrap();
    assert_eq!(stored.custom_networks.len(), 1);
    assert_eq!(app.registry.get("custom1"), stored.custom_networks.first());

    app.settings.screen.cursor = 0;
    let updated = ProfileMother::algod_only("custom1", &server.uri()).with_tokens("tok", "");
    app.save_profile(updated.clone()).await;

    assert_eq!(app.registry.len(), 4);
    assert_eq!(app.settings.screen.cursor, 3);
    assert_eq!(app.registry.get("custom1"), Some(&updated));
    assert_eq!(app.store.load().unwrap().custom_networks, vec![updated]);
}

#[tokio::test]
async fn test_save_overriding_builtin_keeps_order() {
    let (_dir, mut app) = test_app();
    let server = mock_algod(7).await;

    app.save_profile(ProfileMother::algod_only("testnet", &server.uri()))
        .await;

    assert_eq!(app.registry.names(), ["localnet", "testnet", "mainnet"]);
    assert_eq!(app.settings.screen.cursor, 1);
    assert!(app.config.is_custom("testnet"));
}

#[tokio::test]
async fn test_failed_write_keeps_memory_commit() {
    let (dir, mut app) = test_app();
    let server = mock_algod(7).await;
    // A directory where the file should be makes the write fail.
    std::fs::create_dir_all(dir.path().join("config.json")).unwrap();

    app.save_profile(ProfileMother::algod_only("custom1", &server.uri()))
        .await;

    assert!(status_text(&app).starts_with("Failed to save config:"));
    assert!(app.registry.get("custom1").is_some());
    assert!(app.config.is_custom("custom1"));
}

// ========================================================================
// Connect, Status and Disconnect
// ========================================================================

#[tokio::test]
async fn test_enter_connects_and_persists_selection() {
    let (_dir, mut app) = test_app();
    let server = mock_algod(4242).await;
    app.save_profile(ProfileMother::algod_only("custom1", &server.uri()))
        .await;

    open(&mut app, 0).await;
    app.settings.screen.cursor = 3;
    app.execute(AppCommand::Select).await;

    assert_eq!(status_text(&app), "Successfully connected to custom1");
    assert!(app.session.is_connected());
    assert_eq!(app.config.network, "custom1");
    assert_eq!(app.store.load().unwrap().network, "custom1");
    let status = app.last_status.as_ref().unwrap();
    assert_eq!(status.last_round, 4242);
    assert_eq!(status.genesis_id, "testnet-v1.0");
}

#[tokio::test]
async fn test_enter_reports_unsaved_selection() {
    let (dir, mut app) = test_app();
    let server = mock_algod(9).await;
    app.registry
        .upsert(ProfileMother::algod_only("custom1", &server.uri()));
    std::fs::create_dir_all(dir.path().join("config.json")).unwrap();

    open(&mut app, 0).await;
    app.settings.screen.cursor = 3;
    app.execute(AppCommand::Select).await;

    assert!(app.session.is_connected());
    assert_eq!(app.config.network, "custom1");
    assert!(
        status_text(&app).starts_with("Connected to custom1, but failed to save config:"),
        "{}",
        status_text(&app)
    );
    assert_eq!(
        app.settings.screen.status.as_ref().map(|s| s.kind),
        Some(StatusKind::Error)
    );
}

#[tokio::test]
async fn test_enter_blocked_by_unreachable_indexer() {
    let (_dir, mut app) = test_app();
    let algod = mock_algod(5).await;
    app.registry.upsert(ProfileMother::with_indexer(
        "halfway",
        &algod.uri(),
        unreachable_url(),
    ));

    open(&mut app, 0).await;
    app.settings.screen.cursor = 3;
    app.execute(AppCommand::Select).await;

    assert!(!app.session.is_connected());
    assert_eq!(app.config.network, "testnet");
    assert!(
        status_text(&app).starts_with("Failed to connect to halfway: indexer"),
        "{}",
        status_text(&app)
    );
}

#[tokio::test]
async fn test_enter_on_unreachable_profile_reports_failure() {
    let (_dir, mut app) = test_app();
    app.registry
        .upsert(ProfileMother::algod_only("down", unreachable_url()));

    open(&mut app, 0).await;
    app.settings.screen.cursor = 3;
    app.execute(AppCommand::Select).await;

    assert!(status_text(&app).starts_with("Failed to connect to down:"));
    assert_eq!(
        app.settings.screen.status.as_ref().map(|s| s.kind),
        Some(StatusKind::Error)
    );
    assert!(!app.session.is_connected());
    assert_eq!(app.config.network, "testnet");
}

#[tokio::test]
async fn test_test_connection_does_not_connect() {
    let (_dir, mut app) = test_app();
    let server = mock_algod(1).await;
    app.registry
        .upsert(ProfileMother::algod_only("custom1", &server.uri()));

    open(&mut app, 0).await;
    app.settings.screen.cursor = 3;
    app.execute(AppCommand::TestConnection).await;

    assert_eq!(status_text(&app), "Test successful for custom1");
    assert!(!app.session.is_connected());

    app.execute(AppCommand::DismissStatus).await;
    assert!(app.settings.screen.status.is_none());
}

#[tokio::test]
async fn test_disconnect_clears_session() {
    let (_dir, mut app) = test_app();
    let server = mock_algod(1).await;
    app.session
        .connect(&ProfileMother::algod_only("custom1", &server.uri()))
        .await
        .unwrap();

    open(&mut app, 0).await;
    app.execute(AppCommand::Disconnect).await;

    assert!(!app.session.is_connected());
    assert!(app.last_status.is_none());
    assert!(matches!(
        app.session.status().await,
        Err(ChainError::NotConnected)
    ));
}

// ========================================================================
// Other Screens
// ========================================================================

#[tokio::test]
async fn test_applications_without_connection_explains() {
    let (_dir, mut app) = test_app();
    open(&mut app, 1).await;

    let status = app.applications.screen.status.as_ref().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.starts_with("Not connected"));
    assert!(app.applications.apps.is_empty());
}

#[tokio::test]
async fn test_builder_reports_validation_and_missing_goal() {
    let (_dir, mut app) = test_app();
    open(&mut app, 2).await;

    let status = app.builder.screen.status.as_ref().unwrap();
    assert_eq!(status.kind, StatusKind::Error);

    app.execute(AppCommand::Submit).await;
    assert!(app.builder.active().output.starts_with("Validation: "));
}

#[tokio::test]
async fn test_explore_lookup_needs_connection() {
    let (_dir, mut app) = test_app();
    open(&mut app, 3).await;
    app.execute(AppCommand::FocusInput).await;
    type_text(&mut app, "ADDR").await;
    app.execute(AppCommand::Submit).await;

    let status = app.explore.screen.status.as_ref().unwrap();
    assert_eq!(status.text, "Lookup failed: not connected to any network");
    assert!(app.explore.result.is_none());
}

#[tokio::test]
async fn test_explore_rejects_query_with_path_characters() {
    let (_dir, mut app) = test_app();
    let server = mock_algod(3).await;
    app.session
        .connect(&ProfileMother::algod_only("custom1", &server.uri()))
        .await
        .unwrap();
    open(&mut app, 3).await;

    app.execute(AppCommand::FocusInput).await;
    type_text(&mut app, "ADDR/../status").await;
    app.execute(AppCommand::Submit).await;

    let status = app.explore.screen.status.as_ref().unwrap();
    assert!(
        status.text.starts_with("Lookup failed: invalid account"),
        "{}",
        status.text
    );
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(
        requests
            .iter()
            .all(|r| !r.url.path().starts_with("/v2/accounts")),
        "lookup must not reach algod"
    );
}
