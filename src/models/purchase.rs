//! Purchase API request/response types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for `POST /auth/purchase`.
///
/// # JSON Example
///
/// ```json
/// {
///   "itemId": "660e8400-e29b-41d4-a716-446655440001"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// Catalog item to purchase
    pub item_id: Uuid,
}

/// Response body for a successful purchase.
///
/// # JSON Example
///
/// ```json
/// {
///   "message": "Purchase successful",
///   "itemPurchased": "Keyboard",
///   "cashbackReceived": 1.5,
///   "newBalance": 51.5
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    /// Human-readable confirmation
    pub message: String,

    /// Name of the purchased item
    pub item_purchased: String,

    /// 3% cashback credited to the card
    pub cashback_received: Decimal,

    /// Card balance after the purchase settled
    pub new_balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_request_accepts_camel_case_item_id() {
        let request: PurchaseRequest = serde_json::from_str(
            r#"{"itemId": "660e8400-e29b-41d4-a716-446655440001"}"#,
        )
        .unwrap();
        assert_eq!(
            request.item_id.to_string(),
            "660e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn purchase_response_serializes_with_wire_names() {
        let response = PurchaseResponse {
            message: "Purchase successful".to_string(),
            item_purchased: "Keyboard".to_string(),
            cashback_received: Decimal::new(15, 1),
            new_balance: Decimal::new(515, 1),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["itemPurchased"], "Keyboard");
        assert_eq!(json["cashbackReceived"], 1.5);
        assert_eq!(json["newBalance"], 51.5);
    }
}
