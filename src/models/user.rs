//! User account data models and API request/response types.
//!
//! This module defines:
//! - `User`: Database entity representing a user and their virtual card
//! - `SignupRequest` / `LoginRequest`: Request bodies for the auth endpoints
//! - `LoginResponse` / `UserResponse`: Response bodies returned to clients

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. The virtual card sub-record is flattened into
/// the `card_number` and `card_balance` columns.
///
/// # Security Note
///
/// This struct deliberately does NOT derive `Serialize`. The password hash
/// must never leave the application, so every response goes through
/// [`UserResponse`], which has no field for it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for this user
    pub id: Uuid,

    /// Login name, unique and immutable after creation
    pub username: String,

    /// Argon2 hash of the user's password
    pub password_hash: String,

    /// 16-digit card number, generated once at signup, unique across users
    pub card_number: String,

    /// Current card balance
    ///
    /// Must be >= 0 (enforced by database CHECK constraint).
    /// Only the purchase transaction mutates this column.
    pub card_balance: Decimal,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /auth/signup`.
///
/// # JSON Example
///
/// ```json
/// {
///   "username": "bold",
///   "password": "password"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
///
/// Same shape as [`SignupRequest`], kept separate so the two endpoints can
/// evolve independently.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful login.
///
/// # JSON Example
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed bearer token, valid for one hour
    pub token: String,
}

/// The card sub-record as it appears on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// 16-digit card number
    pub card_number: String,

    /// Current balance
    pub balance: Decimal,
}

/// Response body for `GET /auth/me`.
///
/// Every account field except the password hash.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "username": "bold",
///   "card": {
///     "cardNumber": "4539148803436467",
///     "balance": 100.0
///   },
///   "createdAt": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub card: CardView,
    pub created_at: DateTime<Utc>,
}

/// Convert a database User into an API UserResponse.
///
/// This transformation drops the `password_hash` field.
impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            card: CardView {
                card_number: user.card_number,
                balance: user.card_balance,
            },
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "bold".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            card_number: "4539148803436467".to_string(),
            card_balance: Decimal::new(1000, 1), // 100.0
            created_at: Utc::now(),
        }
    }

    #[test]
    fn user_response_never_contains_password_hash() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("argon2"));
    }

    #[test]
    fn user_response_uses_camel_case_card_fields() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["card"]["cardNumber"], "4539148803436467");
        assert_eq!(json["card"]["balance"], 100.0);
        assert_eq!(json["username"], "bold");
    }
}
