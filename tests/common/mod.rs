//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests:
//! - In-memory database setup with migrations applied
//! - Test user creation and token helpers
//! - A fully wired test server

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use issuehub::backend::routes::create_router;
use issuehub::backend::server::config::Settings;
use issuehub::backend::server::state::AppState;

pub use auth_helpers::{auth_header, create_legacy_user, create_test_user, TestUser};
pub use database::TestDatabase;

/// Signing secret shared by the test server and token helpers
pub const TEST_SECRET: &str = "test-signing-secret";

/// Settings for tests: default everything, fixed signing secret
pub fn test_settings() -> Settings {
    Settings {
        secret_key: TEST_SECRET.to_string(),
        ..Settings::default()
    }
}

/// Spin up a test server backed by a fresh in-memory database
///
/// The returned `TestDatabase` shares its pool with the server, so fixtures
/// inserted through it are visible to API calls.
pub async fn spawn_server() -> (TestServer, TestDatabase) {
    let db = TestDatabase::new().await;
    let state = AppState::new(db.pool().clone(), test_settings());
    let server = TestServer::new(create_router(state)).expect("Failed to start test server");
    (server, db)
}
