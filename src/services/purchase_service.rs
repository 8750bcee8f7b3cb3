//! Purchase service - Core business logic for the purchase transaction.
//!
//! A purchase touches two independent rows: the buyer's card balance and the
//! item's stock count. Both updates happen inside a single PostgreSQL
//! transaction with row locks, so two concurrent purchases of the last unit
//! cannot both pass the stock check, and concurrent purchases by the same
//! user cannot lose a balance update.
//!
//! # Lock Ordering
//!
//! Rows are always locked user-first, then item, so purchases cannot
//! deadlock against each other.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{db::DbPool, error::AppError, models::item::Item};

/// Outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    /// Name of the purchased item
    pub item_name: String,

    /// Cashback credited to the card
    pub cashback: Decimal,

    /// Card balance after settlement
    pub new_balance: Decimal,
}

/// Execute a single-item purchase.
///
/// # Process
///
/// 1. Start a database transaction
/// 2. Lock the buyer's row and read the card balance
/// 3. Lock the item row and read price and quantity
/// 4. Reject if the item is out of stock or the balance is short
/// 5. Settle: deduct the price, credit 3% cashback, decrement stock
/// 6. Commit (or roll back on error)
///
/// # Errors
///
/// - `AccountNotFound`: Buyer's account doesn't exist
/// - `ItemNotFound`: Item doesn't exist
/// - `OutOfStock`: Item quantity is below 1
/// - `InsufficientBalance`: Card balance is below the item price
/// - `Database`: Database error occurred
pub async fn purchase(
    pool: &DbPool,
    account_id: Uuid,
    item_id: Uuid,
) -> Result<PurchaseReceipt, AppError> {
    // Start db transaction
    let mut tx = pool.begin().await?;

    // Lock the buyer and read the balance
    // FOR UPDATE ensures no other transaction can modify this row
    let balance: Decimal =
        sqlx::query_scalar("SELECT card_balance FROM users WHERE id = $1 FOR UPDATE")
            .bind(account_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::AccountNotFound)?;

    // Lock the item and read price and stock
    let item = sqlx::query_as::<_, Item>(
        r#"
        SELECT id, name, price, quantity, created_at
        FROM items
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(item_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::ItemNotFound)?;

    // Reject before any write; both rows stay untouched on failure
    if let Err(rejection) = validate(balance, item.price, item.quantity) {
        tx.rollback().await?;
        return Err(rejection);
    }

    let (cashback, new_balance) = settle(balance, item.price);

    // Persist the new balance
    sqlx::query("UPDATE users SET card_balance = $1 WHERE id = $2")
        .bind(new_balance)
        .bind(account_id)
        .execute(&mut *tx)
        .await?;

    // Decrement stock
    sqlx::query("UPDATE items SET quantity = quantity - 1 WHERE id = $1")
        .bind(item_id)
        .execute(&mut *tx)
        .await?;

    // Commit both writes atomically
    tx.commit().await?;

    tracing::info!(
        %account_id,
        item = %item.name,
        %cashback,
        %new_balance,
        "purchase settled"
    );

    Ok(PurchaseReceipt {
        item_name: item.name,
        cashback,
        new_balance,
    })
}

/// Decide whether a purchase may proceed.
///
/// Stock is checked before balance, so an unaffordable item that is also
/// sold out reports `OutOfStock`.
fn validate(balance: Decimal, price: Decimal, quantity: i32) -> Result<(), AppError> {
    if quantity < 1 {
        return Err(AppError::OutOfStock);
    }
    if balance < price {
        return Err(AppError::InsufficientBalance);
    }
    Ok(())
}

/// Settle a purchase against a balance.
///
/// Returns `(cashback, new_balance)` where cashback is 3% of the price
/// rounded to 2 decimal places and the new balance is
/// `balance - price + cashback`.
fn settle(balance: Decimal, price: Decimal) -> (Decimal, Decimal) {
    let cashback = (price * Decimal::new(3, 2)).round_dp(2);
    (cashback, balance - price + cashback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn zero_quantity_is_out_of_stock_regardless_of_funds() {
        assert!(matches!(
            validate(dec("1500"), dec("50"), 0),
            Err(AppError::OutOfStock)
        ));
    }

    #[test]
    fn price_above_balance_is_insufficient_balance() {
        // balance=100, price=150 -> rejected, nothing settles
        assert!(matches!(
            validate(dec("100"), dec("150"), 3),
            Err(AppError::InsufficientBalance)
        ));
    }

    #[test]
    fn sold_out_wins_over_short_balance() {
        assert!(matches!(
            validate(dec("100"), dec("150"), 0),
            Err(AppError::OutOfStock)
        ));
    }

    #[test]
    fn affordable_in_stock_purchase_passes_validation() {
        assert!(validate(dec("100"), dec("50"), 1).is_ok());
    }

    #[test]
    fn settle_matches_the_worked_example() {
        // balance=100, price=50 -> cashback=1.5, newBalance=51.5
        let (cashback, new_balance) = settle(dec("100"), dec("50"));
        assert_eq!(cashback, dec("1.5"));
        assert_eq!(new_balance, dec("51.5"));
    }

    #[test]
    fn cashback_is_three_percent_rounded_to_cents() {
        let (cashback, _) = settle(dec("100"), dec("0.99"));
        // 0.99 * 0.03 = 0.0297 -> 0.03
        assert_eq!(cashback, dec("0.03"));

        let (cashback, _) = settle(dec("100"), dec("33.33"));
        // 33.33 * 0.03 = 0.9999 -> 1.00
        assert_eq!(cashback, dec("1.00"));
    }

    #[test]
    fn exact_balance_covers_the_price() {
        // price == balance passes the check; settlement leaves the cashback
        let (cashback, new_balance) = settle(dec("50"), dec("50"));
        assert_eq!(new_balance, cashback);
    }

    #[test]
    fn settlement_never_increases_balance_by_more_than_cashback() {
        let (cashback, new_balance) = settle(dec("1500"), dec("200"));
        assert_eq!(new_balance, dec("1500") - dec("200") + cashback);
        assert_eq!(cashback, dec("6.00"));
    }
}
