/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be converted to HTTP responses and built from lower
 * level failures.
 *
 * # HTTP Response Conversion
 *
 * `ApiError` implements `IntoResponse` from Axum, so handlers can return it
 * directly. The error is converted to an appropriate HTTP status code and a
 * JSON body of the form:
 *
 * ```json
 * {
 *   "detail": "Issue not found"
 * }
 * ```
 *
 * Unauthorized responses additionally carry a `WWW-Authenticate: Bearer`
 * header. Database and internal errors log their real cause and answer with
 * a generic detail message.
 *
 * # From Conversions
 *
 * `From<sqlx::Error>` lets storage calls use the `?` operator. Unique
 * constraint violations are recognised and translated into the same conflict
 * errors the handlers raise on their pre-checks, which keeps duplicate
 * detection correct under concurrent inserts. Foreign key violations become
 * validation errors since they mean the request referenced a row that does
 * not exist.
 */

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::password::PasswordHashError;
use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert a backend error into an HTTP response
    ///
    /// # Response Format
    ///
    /// The response body is a JSON object with a single `detail` field. The
    /// status code comes from [`ApiError::status_code`].
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Database(err) => {
                tracing::error!("Database error while handling request: {err}");
            }
            ApiError::Internal(message) => {
                tracing::error!("Internal error while handling request: {message}");
            }
            _ => {}
        }

        let body = Json(serde_json::json!({ "detail": self.detail() }));
        let mut response = (status, body).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                let message = db_err.message();
                if message.contains("users.email") {
                    return ApiError::conflict("Email already registered");
                }
                if message.contains("projects.key") {
                    return ApiError::conflict("Project key already exists");
                }
                if message.contains("project_members") {
                    return ApiError::conflict("User is already a member");
                }
            }
            if db_err.is_foreign_key_violation() {
                return ApiError::validation("Referenced record does not exist");
            }
        }
        ApiError::Database(err)
    }
}

impl From<PasswordHashError> for ApiError {
    fn from(err: PasswordHashError) -> Self {
        ApiError::internal(format!("Password hashing failed: {err}"))
    }
}
