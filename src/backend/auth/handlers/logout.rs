/**
 * Logout Handler
 *
 * This module implements POST /api/auth/logout.
 *
 * Sessions are stateless JWTs, so there is nothing to revoke server-side:
 * logout clears the session cookie and the token itself remains valid until
 * its expiry passes. Callers holding the raw token can keep using it; this
 * endpoint only ends the cookie-based session.
 */

use axum::{
    http::header,
    response::{IntoResponse, Json},
};

use crate::backend::auth::handlers::login::SESSION_COOKIE;

/// Logout handler
///
/// Always succeeds. Responds with a `Set-Cookie` header that expires the
/// session cookie immediately.
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{SESSION_COOKIE}=\"\"; HttpOnly; Max-Age=0; Path=/; SameSite=Lax");
    (
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({ "message": "Logged out successfully" })),
    )
}
