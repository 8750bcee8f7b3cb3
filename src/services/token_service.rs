//! Token service - issues and verifies login bearer tokens.
//!
//! Tokens are HS256-signed JWTs whose subject is the account id, valid for
//! one hour from issue. The signing secret comes from configuration and is
//! threaded through explicitly; this module holds no state.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Token validity window in seconds (1 hour).
const TOKEN_TTL_SECS: i64 = 3600;

/// Claims carried by a login token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account id of the logged-in user
    sub: Uuid,

    /// Expiry as a unix timestamp
    exp: i64,
}

/// Issue a signed token for an account.
///
/// # Errors
///
/// Returns `AppError::Internal` if signing fails (e.g., key material is
/// unusable); this is not reachable with an HMAC secret in practice.
pub fn issue(secret: &str, account_id: Uuid) -> Result<String, AppError> {
    let claims = Claims {
        sub: account_id,
        exp: Utc::now().timestamp() + TOKEN_TTL_SECS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
}

/// Verify a token and return the account id it was issued for.
///
/// # Errors
///
/// Returns `AppError::InvalidToken` if the token is malformed, the signature
/// does not verify, or the token has expired.
pub fn verify(secret: &str, token: &str) -> Result<Uuid, AppError> {
    // Validation::default() is HS256 with expiry checking enabled
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::InvalidToken)?;

    Ok(token_data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_verifies_to_same_account() {
        let account_id = Uuid::new_v4();
        let token = issue(SECRET, account_id).unwrap();

        assert_eq!(verify(SECRET, &token).unwrap(), account_id);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue("other-secret", Uuid::new_v4()).unwrap();

        assert!(matches!(
            verify(SECRET, &token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verify(SECRET, "not.a.jwt"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Two hours in the past, well beyond the default validation leeway
        let claims = Claims {
            sub: Uuid::new_v4(),
            exp: Utc::now().timestamp() - 2 * TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify(SECRET, &token),
            Err(AppError::InvalidToken)
        ));
    }
}
