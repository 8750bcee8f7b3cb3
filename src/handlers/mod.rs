//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Signup, login, and account endpoints
pub mod auth;
/// Service health endpoint
pub mod health;
/// Catalog listing endpoint
pub mod items;
/// Purchase endpoint
pub mod purchases;
