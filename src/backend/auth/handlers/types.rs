/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication
 * handlers. These types are shared across signup, login, and get_me.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's display name
    pub name: String,
    /// User's email address (unique)
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against the stored hash)
    pub password: String,
}

/// Token response
///
/// Returned by the login handler. The same token is also set as the
/// `access_token` session cookie.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed JWT for subsequent requests
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients. Does not
/// include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: i64,
    /// User's display name
    pub name: String,
    /// User's email address
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
