//! Account service - signup, login verification, and account lookup.
//!
//! This service owns the user lifecycle:
//! - Creating accounts with a hashed password and a freshly generated card
//! - Verifying login credentials
//! - Fetching account details for authenticated requests
//!
//! Password hashing and verification are argon2 behind the small
//! `hash_password` / `verify_password` helpers; nothing outside this module
//! touches the hash.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{db::DbPool, error::AppError, models::user::User};

/// Create a new account.
///
/// # Process
///
/// 1. Reject the username if it is already taken
/// 2. Hash the password with argon2
/// 3. Generate a fresh 16-digit card number
/// 4. Insert the user row with the configured starting balance
///
/// # Card Number Collisions
///
/// Generation is retry-free: with 10^16 possible numbers the collision risk
/// is accepted rather than detected. The UNIQUE constraint on `card_number`
/// backstops the unthinkable case, surfacing it as a database error.
///
/// # Errors
///
/// - `DuplicateUsername`: Username already exists
/// - `Internal`: Password hashing failed
/// - `Database`: Database error occurred (including a lost username race,
///   caught by the UNIQUE constraint)
pub async fn create_account(
    pool: &DbPool,
    starting_balance: Decimal,
    username: &str,
    password: &str,
) -> Result<Uuid, AppError> {
    // Check username availability first to give a clean 400
    let taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
        .bind(username)
        .fetch_one(pool)
        .await?;

    if taken {
        return Err(AppError::DuplicateUsername);
    }

    let password_hash = hash_password(password)?;
    let card_number = generate_card_number();

    let account_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO users (username, password_hash, card_number, card_balance)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(username)
    .bind(&password_hash)
    .bind(&card_number)
    .bind(starting_balance)
    .fetch_one(pool)
    .await?;

    tracing::info!(username, "account created");

    Ok(account_id)
}

/// Verify login credentials and return the matching user.
///
/// An unknown username and a wrong password both map to
/// `InvalidCredentials`, so callers cannot probe which usernames exist.
///
/// # Errors
///
/// - `InvalidCredentials`: Username not found or password mismatch
/// - `Internal`: Stored hash is malformed
/// - `Database`: Database error occurred
pub async fn authenticate(pool: &DbPool, username: &str, password: &str) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, card_number, card_balance, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    Ok(user)
}

/// Fetch an account by id.
///
/// # Errors
///
/// - `AccountNotFound`: No user with this id
/// - `Database`: Database error occurred
pub async fn get_account(pool: &DbPool, account_id: Uuid) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, card_number, card_balance, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::AccountNotFound)
}

/// Generate a 16-digit card number.
///
/// Each digit is sampled independently and uniformly.
fn generate_card_number() -> String {
    let mut rng = rand::rng();
    (0..16)
        .map(|_| char::from(b'0' + rng.random_range(0..10)))
        .collect()
}

/// Hash a plaintext password with argon2 and a random salt.
fn hash_password(plaintext: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

/// Check a plaintext password against a stored argon2 hash.
fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(format!("stored password hash is malformed: {e}")))?;

    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_numbers_are_sixteen_digits() {
        for _ in 0..50 {
            let number = generate_card_number();
            assert_eq!(number.len(), 16);
            assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn card_numbers_vary() {
        // Two independent draws colliding would mean a broken generator
        assert_ne!(generate_card_number(), generate_card_number());
    }

    #[test]
    fn password_round_trips_through_hash() {
        let hash = hash_password("pass1234").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("pass1234", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let first = hash_password("pass1234").unwrap();
        let second = hash_password("pass1234").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_stored_hash_is_an_internal_error() {
        assert!(matches!(
            verify_password("pass1234", "not-a-phc-string"),
            Err(AppError::Internal(_))
        ));
    }
}
