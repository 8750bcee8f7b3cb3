//! Catalog item data models.
//!
//! This module defines:
//! - `Item`: Database entity representing a catalog item
//! - `ItemResponse`: Response body returned by the item listing endpoint

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Represents a catalog item record from the database.
///
/// # Database Table
///
/// Maps to the `items` table. Rows are created by operator tooling; this
/// service only lists items and decrements `quantity` during purchases.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Item {
    /// Unique identifier for this item
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Unit price
    ///
    /// Must be > 0 (enforced by database CHECK constraint).
    pub price: Decimal,

    /// Remaining stock
    ///
    /// Must be >= 0 (enforced by database CHECK constraint).
    /// Decremented by exactly 1 per successful purchase.
    pub quantity: i32,

    /// Timestamp when the item was created
    pub created_at: DateTime<Utc>,
}

/// Response body for item listing.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "660e8400-e29b-41d4-a716-446655440001",
///   "name": "Keyboard",
///   "price": 50.0,
///   "quantity": 3
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}
