//! Database connection pool and migration management.

use sqlx::{Pool, Postgres};

/// Type alias for the PostgreSQL connection pool shared by all handlers.
pub type DbPool = Pool<Postgres>;

/// Create the PostgreSQL connection pool.
///
/// The pool is created once at startup and handed to handlers through
/// [`crate::state::AppState`]; nothing else in the application opens
/// connections.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server is
/// unreachable.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Apply pending migrations from the `migrations/` directory.
///
/// The `users` and `items` tables (including their UNIQUE and CHECK
/// constraints) are created here. sqlx tracks applied migrations in the
/// `_sqlx_migrations` table, so reruns are no-ops.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // Migration files are embedded at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
