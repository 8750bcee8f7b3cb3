//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle database transactions, validation, and credential handling.

pub mod account_service;
pub mod purchase_service;
pub mod token_service;
