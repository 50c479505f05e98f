/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route tables with the middleware stack.
 *
 * # Middleware Stack
 *
 * Outermost to innermost:
 *
 * 1. **Panic recovery** - a panicking handler becomes a JSON 500 instead
 *    of dropping the connection
 * 2. **Request tracing** - one span per request via `tower_http`
 * 3. **CORS** - origins from settings, credentials allowed so the session
 *    cookie works cross-origin
 */

use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::Settings;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes and middleware configured
///
/// # Arguments
///
/// * `app_state` - Application state shared by all handlers
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new()
        .route("/", axum::routing::get(root))
        .route("/health", axum::routing::get(health_check));

    let router = configure_api_routes(router, &app_state);

    let cors = cors_layer(&app_state.settings);

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state)
}

/// `GET /` - API welcome message
async fn root() -> Json<serde_json::Value> {
    Json(json!({"message": "Welcome to IssueHub API"}))
}

/// `GET /health` - liveness probe
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({"status": "healthy"}))
}

/// JSON 404 for unmatched paths
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not Found"})))
}

/// Build the CORS layer from the configured origins
///
/// Credentials are allowed, so origins must be listed explicitly; the
/// wildcard is rejected by browsers in that combination.
fn cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_origin_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::COOKIE])
}

/// Turn a handler panic into a JSON 500 response
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"detail": "Internal server error"})),
    )
        .into_response()
}
