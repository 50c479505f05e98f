/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Check the email is not already registered
 * 2. Hash the password with the preferred scheme
 * 3. Insert the user
 * 4. Return the new profile
 *
 * # Security
 *
 * - Passwords are hashed before storage and never logged
 * - The unique index on email backs up the pre-check, so a concurrent
 *   duplicate signup still answers with the same conflict error
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{SignupRequest, UserResponse};
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Signup handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool and password service)
/// * `Json(request)` - Signup request containing name, email, and password
///
/// # Returns
///
/// `201 Created` with the new user's profile
///
/// # Errors
///
/// * `400 Bad Request` - the email is already registered
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Alice Johnson",
///   "email": "alice@example.com",
///   "password": "password123"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!("Signup request for: {}", request.email);

    if get_user_by_email(&state.db_pool, &request.email)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = state.passwords.hash(&request.password)?;
    let user = create_user(&state.db_pool, request.name, request.email, password_hash).await?;

    tracing::info!("User registered: {} ({})", user.id, user.email);
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
