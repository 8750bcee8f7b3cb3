//! Shared application state.
//!
//! The state is built once at startup and handed to every handler through
//! Axum's `State` extractor, so nothing in the application reaches for a
//! process-wide singleton.

use crate::{config::Config, db::DbPool};

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: DbPool,

    /// Application configuration (JWT secret, starting balance)
    pub config: Config,
}
