//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Bad credentials, missing or invalid tokens
/// - **Resource Errors**: Requested accounts or items not found
/// - **Business Rule Errors**: Out-of-stock items, insufficient balance
/// - **Validation Errors**: Duplicate username at signup
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Signup attempted with a username that is already taken.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Username already exists")]
    DuplicateUsername,

    /// Login attempted with an unknown username or wrong password.
    ///
    /// Both cases produce the same message so a caller cannot probe
    /// which usernames exist.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Request to a protected route without a usable bearer token.
    ///
    /// Covers a missing Authorization header and a header that is not
    /// in `Bearer <token>` form.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Missing authentication token")]
    Unauthenticated,

    /// Bearer token was present but failed verification.
    ///
    /// Covers bad signatures, malformed tokens, and expired tokens.
    ///
    /// Returns HTTP 403 Forbidden.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Account referenced by a verified token no longer resolves.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// Catalog item does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Item not found")]
    ItemNotFound,

    /// Catalog item has no remaining stock.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Item is out of stock")]
    OutOfStock,

    /// Card balance does not cover the item price.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// A cryptographic collaborator failed (password hashing, token signing).
    ///
    /// Returns HTTP 500 Internal Server Error. The String carries the
    /// underlying detail for logs only; it is never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "message": "Human-readable error message"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `DuplicateUsername`, `OutOfStock`, `InsufficientBalance` → 400 Bad Request
/// - `InvalidCredentials`, `Unauthenticated` → 401 Unauthorized
/// - `InvalidToken` → 403 Forbidden
/// - `AccountNotFound`, `ItemNotFound` → 404 Not Found
/// - `Database`, `Internal` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, message)
        let (status, message) = match self {
            AppError::DuplicateUsername | AppError::OutOfStock | AppError::InsufficientBalance => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::InvalidCredentials | AppError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::InvalidToken => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::AccountNotFound | AppError::ItemNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Database(ref e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(ref detail) => {
                tracing::error!("internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        // Build JSON response body
        let body = Json(json!({ "message": message }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn business_rule_errors_are_bad_request() {
        assert_eq!(status_of(AppError::DuplicateUsername), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::OutOfStock), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::InsufficientBalance),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn auth_errors_split_between_401_and_403() {
        assert_eq!(
            status_of(AppError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(AppError::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AppError::InvalidToken), StatusCode::FORBIDDEN);
    }

    #[test]
    fn lookup_errors_are_not_found() {
        assert_eq!(status_of(AppError::AccountNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(AppError::ItemNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_errors_hide_detail() {
        let response = AppError::Internal("argon2 exploded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
