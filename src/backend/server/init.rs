/**
 * Server Initialization
 *
 * This module assembles the running application: it opens the database,
 * builds the shared state, and hands everything to the router.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Build `AppState` (token service, password service, settings)
 * 3. Create the router with all routes and middleware
 *
 * Database failures are fatal here; unlike optional integrations there is
 * no degraded mode without a store.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, Settings};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `settings` - Loaded server settings
///
/// # Returns
///
/// A configured `Router` ready to serve requests
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` when the database cannot be opened
/// or migrated.
pub async fn create_app(settings: &Settings) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing IssueHub backend server");

    let db_pool = load_database(settings).await?;
    let app_state = AppState::new(db_pool, settings.clone());

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
