/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored credential
 * 3. Upgrade the stored credential if it uses a non-preferred scheme
 * 4. Issue a JWT and return it in the body and as a session cookie
 *
 * # Security
 *
 * - Unknown email and wrong password answer with the same 401 message
 * - Credential upgrades are best-effort: a failed rewrite is logged and
 *   the login still succeeds with the old credential in place
 * - The session cookie is HttpOnly with SameSite=Lax; its Max-Age equals
 *   the token TTL so both expire together
 */

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::users::{get_user_by_email, update_password_hash, User};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Name of the session cookie carrying the bearer token
pub const SESSION_COOKIE: &str = "access_token";

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool, password and token services)
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// `200 OK` with `{"access_token": ..., "token_type": "bearer"}` and a
/// `Set-Cookie` header installing the session cookie
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password (same message for
///   both, to prevent user enumeration)
/// * `500 Internal Server Error` - database or token issuance failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = get_user_by_email(&state.db_pool, &request.email).await?;
    let user = match user {
        Some(user) if state.passwords.verify(&request.password, &user.password_hash) => user,
        _ => {
            tracing::warn!("Failed login attempt for: {}", request.email);
            return Err(ApiError::unauthorized("Incorrect email or password"));
        }
    };

    if state.passwords.needs_rehash(&user.password_hash) {
        upgrade_credential(&state, &user, &request.password).await;
    }

    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| ApiError::internal(format!("Token issuance failed: {e}")))?;
    let cookie = session_cookie(&token, state.tokens.ttl_seconds());

    tracing::info!("User logged in: {} ({})", user.id, user.email);
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(TokenResponse {
            access_token: token,
            token_type: "bearer".to_string(),
        }),
    ))
}

/// Re-hash and persist a credential stored under a non-preferred scheme
///
/// Failures are logged and swallowed: the user presented a valid password,
/// so the login must succeed either way.
async fn upgrade_credential(state: &AppState, user: &User, password: &str) {
    match state.passwords.hash(password) {
        Ok(new_hash) => match update_password_hash(&state.db_pool, user.id, &new_hash).await {
            Ok(()) => tracing::info!(
                "Upgraded stored credential for user {} to {}",
                user.id,
                state.passwords.preferred().as_str()
            ),
            Err(e) => tracing::warn!(
                "Failed to persist upgraded credential for user {}: {e}",
                user.id
            ),
        },
        Err(e) => tracing::warn!("Failed to re-hash credential for user {}: {e}", user.id),
    }
}

/// Build the Set-Cookie value installing the session cookie
///
/// The value is quoted because it contains a space (`Bearer <token>`), which
/// is also how the cookie middleware parses it back.
fn session_cookie(token: &str, max_age: i64) -> String {
    format!(
        "{SESSION_COOKIE}=\"Bearer {token}\"; HttpOnly; Max-Age={max_age}; Path=/; SameSite=Lax"
    )
}
