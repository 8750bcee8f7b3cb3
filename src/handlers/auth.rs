//! Authentication HTTP handlers.
//!
//! This module implements the account-facing API endpoints:
//! - POST /auth/signup - Create a new account
//! - POST /auth/login - Verify credentials and issue a token
//! - GET /auth/me - Fetch the authenticated account

use axum::{Extension, Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::user::{LoginRequest, LoginResponse, SignupRequest, UserResponse},
    services::{account_service, token_service},
    state::AppState,
};

/// Create a new account.
///
/// # Endpoint
///
/// `POST /auth/signup`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "bold",
///   "password": "password"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"message": "User created successfully"}`
/// - **Error (400)**: Username already exists
/// - **Error (500)**: Database or hashing error
///
/// The new account starts with the configured card balance and a freshly
/// generated 16-digit card number.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let starting_balance = Decimal::from(state.config.starting_balance);

    account_service::create_account(
        &state.pool,
        starting_balance,
        &request.username,
        &request.password,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    ))
}

/// Log in an existing account.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Response
///
/// - **Success (200 OK)**: `{"token": "<jwt>"}`, valid for one hour
/// - **Error (401)**: Unknown username or wrong password (same message for
///   both, so usernames cannot be probed)
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user =
        account_service::authenticate(&state.pool, &request.username, &request.password).await?;

    let token = token_service::issue(&state.config.jwt_secret, user.id)?;

    Ok(Json(LoginResponse { token }))
}

/// Fetch the authenticated account.
///
/// # Endpoint
///
/// `GET /auth/me`
///
/// # Response
///
/// - **Success (200 OK)**: Account fields minus the password hash
/// - **Error (401/403)**: Missing or invalid token
/// - **Error (404)**: Token subject no longer resolves to an account
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
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<UserResponse>, AppError> {
    let user = account_service::get_account(&state.pool, auth.account_id).await?;

    // Convert User to UserResponse (drops the password hash)
    Ok(Json(user.into()))
}
