/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in user. The session token is
 * read from the `Authorization: Bearer` header, falling back to the
 * session cookie set by login, then validated and resolved to a full
 * user row. Handlers receive the user through the [`CurrentUser`]
 * extractor.
 *
 * Every authentication failure maps to the same 401 response so callers
 * cannot distinguish a missing token from an expired one or a deleted
 * account.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::handlers::login::SESSION_COOKIE;
use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user attached to the request by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Pull the session token out of the request headers
///
/// The `Authorization` header wins when it carries a bearer token;
/// otherwise the session cookie is consulted. Cookie values are stored
/// quoted with a `Bearer ` prefix, so both are stripped here.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == SESSION_COOKIE {
                return value
                    .trim_matches('"')
                    .strip_prefix("Bearer ")
                    .map(|token| token.to_string());
            }
        }
    }
    None
}

/// Authentication middleware
///
/// 1. Extracts the session token from header or cookie
/// 2. Validates the token signature and expiry
/// 3. Loads the user row the token refers to
/// 4. Attaches the user to request extensions as [`CurrentUser`]
///
/// Returns `401 Unauthorized` when any of those steps fail.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing session token");
        ApiError::unauthorized("Could not validate credentials")
    })?;

    let user_id = state.tokens.validate(&token).map_err(|e| {
        tracing::warn!("Invalid session token: {:?}", e);
        ApiError::unauthorized("Could not validate credentials")
    })?;

    let user = get_user_by_id(&state.db_pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token for unknown user {}", user_id);
            ApiError::unauthorized("Could not validate credentials")
        })?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            tracing::warn!("CurrentUser not found in request extensions");
            ApiError::unauthorized("Could not validate credentials")
        })
    }
}
