/**
 * Get Current User Handler
 *
 * This module implements GET /api/auth/me.
 *
 * The auth middleware has already resolved the token to a live user row, so
 * this handler only shapes the response. A token for a deleted user never
 * reaches here; the middleware answers 401 for it.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::middleware::auth::CurrentUser;

/// Get current user handler
///
/// Returns the authenticated user's profile.
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
