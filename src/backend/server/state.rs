/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` conversions Axum uses for state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The SQLite connection pool
 * - The token service (signs and validates session tokens)
 * - The password service (hashing and verification)
 * - The settings the server was started with
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers take `State<SqlitePool>` or
 * `State<Arc<TokenService>>` directly instead of the whole `AppState`.
 * Everything in the state is cheap to clone; the services are behind `Arc`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::Settings;

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Session token signing and validation
    pub tokens: Arc<TokenService>,
    /// Password hashing and verification
    pub passwords: Arc<PasswordService>,
    /// Settings the server was started with
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build the state from an open pool and loaded settings
    pub fn new(db_pool: SqlitePool, settings: Settings) -> Self {
        let tokens = Arc::new(TokenService::new(
            &settings.secret_key,
            settings.access_token_expire_minutes,
        ));
        let passwords = Arc::new(PasswordService::new(settings.preferred_password_scheme));

        Self {
            db_pool,
            tokens,
            passwords,
            settings: Arc::new(settings),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<PasswordService> {
    fn from_ref(state: &AppState) -> Self {
        state.passwords.clone()
    }
}
