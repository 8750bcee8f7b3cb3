//! Catalog item HTTP handlers.
//!
//! - GET /auth/items - List all catalog items

use axum::{Json, extract::State};

use crate::{
    error::AppError,
    models::item::{Item, ItemResponse},
    state::AppState,
};

/// List all catalog items.
///
/// # Endpoint
///
/// `GET /auth/items`
///
/// # Authentication
///
/// Requires a valid bearer token.
///
/// # Response
///
/// - **Success (200 OK)**: Array of items (may be empty)
/// - **Error (401/403)**: Missing or invalid token
/// - **Error (500)**: Database error
///
/// ```json
/// [
///   {
///     "id": "660e8400-e29b-41d4-a716-446655440001",
///     "name": "Keyboard",
///     "price": 50.0,
///     "quantity": 3
///   }
/// ]
/// ```
///
/// Items are returned in insertion order (oldest first).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = sqlx::query_as::<_, Item>(
        r#"
        SELECT id, name, price, quantity, created_at
        FROM items
        ORDER BY created_at
        "#,
    )
    .fetch_all(&state.pool)
    .await?;

    let responses: Vec<ItemResponse> = items.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
