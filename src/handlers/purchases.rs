//! Purchase HTTP handler.
//!
//! - POST /auth/purchase - Buy one unit of an item against the card balance

use axum::{Extension, Json, extract::State};

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::purchase::{PurchaseRequest, PurchaseResponse},
    services::purchase_service,
    state::AppState,
};

/// Purchase a single item.
///
/// # Endpoint
///
/// `POST /auth/purchase`
///
/// # Request Body
///
/// ```json
/// {
///   "itemId": "660e8400-e29b-41d4-a716-446655440001"
/// }
/// ```
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "message": "Purchase successful",
///   "itemPurchased": "Keyboard",
///   "cashbackReceived": 1.5,
///   "newBalance": 51.5
/// }
/// ```
///
/// # Errors
///
/// - **404**: Item (or the token's account) does not exist
/// - **400**: Out of stock or insufficient balance
/// - **500**: Database error
pub async fn purchase(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, AppError> {
    let receipt =
        purchase_service::purchase(&state.pool, auth.account_id, request.item_id).await?;

    Ok(Json(PurchaseResponse {
        message: "Purchase successful".to_string(),
        item_purchased: receipt.item_name,
        cashback_received: receipt.cashback,
        new_balance: receipt.new_balance,
    }))
}
