/**
 * Backend Error Types
 *
 * This module defines the error type used across HTTP handlers. Every
 * handler returns `Result<_, ApiError>`; the conversion module turns the
 * error into an HTTP response at a single boundary.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - `Unauthorized` - the request carried no token, an invalid or expired
 *   token, a token for a deleted user, or bad login credentials
 * - `Forbidden` - the caller is authenticated but lacks project membership
 *   or the maintainer role
 * - `NotFound` - the referenced user or issue does not exist
 * - `Conflict` - a uniqueness rule was violated (email, project key,
 *   membership); reported as 400 to match the API contract
 * - `Validation` - an enum field carried an unknown value
 *
 * ## Server errors
 *
 * - `Database` - an underlying sqlx failure that is not a recognised
 *   constraint violation
 * - `Internal` - any other server-side failure (hashing, token signing)
 *
 * Server errors are logged with full detail and answered with a generic
 * message; client errors carry their message verbatim in the response body.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend API error type
///
/// This enum represents all failure modes a handler can produce. Each
/// variant maps to an HTTP status code and a client-facing detail message.
///
/// # Usage
///
/// ```rust
/// use issuehub::backend::error::ApiError;
///
/// // Create a not-found error
/// let err = ApiError::not_found("Issue not found");
///
/// // Create a permission error
/// let err = ApiError::forbidden("You don't have access to this project");
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failure (missing, invalid, or expired credentials)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission failure (authenticated but not allowed)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Referenced resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness rule violated (duplicate email, project key, membership)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request carried a value outside the accepted set
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database failure that is not a recognised constraint violation
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Any other server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create an authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create a permission error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create a missing-resource error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a duplicate-resource error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create an invalid-value error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 400 Bad Request (the API reports duplicates as 400)
    /// - `Validation` - 400 Bad Request
    /// - `Database` / `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing detail message
    ///
    /// Server-side failures collapse to a generic message; their real cause
    /// is only logged. Client errors return their message verbatim.
    pub fn detail(&self) -> String {
        match self {
            Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Validation(message) => message.clone(),
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::unauthorized("no token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::forbidden("not a member").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("duplicate").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::validation("bad value").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let error = ApiError::not_found("Issue not found");
        assert_eq!(error.detail(), "Issue not found");

        let error = ApiError::conflict("Email already registered");
        assert_eq!(error.detail(), "Email already registered");
    }

    #[test]
    fn test_server_errors_hide_their_message() {
        let error = ApiError::internal("bcrypt backend exploded");
        assert_eq!(error.detail(), "Internal server error");

        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.detail(), "Internal server error");
    }

    #[test]
    fn test_constructors_accept_str_and_string() {
        let from_str = ApiError::forbidden("nope");
        let from_string = ApiError::forbidden(String::from("nope"));
        assert_eq!(from_str.detail(), from_string.detail());
    }
}
