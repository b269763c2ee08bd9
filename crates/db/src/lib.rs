//! Database access for the audit log feed.
//!
//! The pool is an explicit resource: created by [`create_pool`], handed to
//! the repositories by reference, and torn down with [`close_pool`].

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod repositories;
pub mod row;

pub type DbPool = sqlx::PgPool;

/// Connection pool sizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    /// How long a query waits for a free connection before failing.
    pub acquire_timeout_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 10,
            acquire_timeout_secs: 30,
        }
    }
}

/// Create a connection pool from a database URL.
///
/// The pool connects lazily: no connection is opened until the first query,
/// so the process can start (and answer `/health`) while the database is
/// unreachable. A malformed URL is still rejected here.
pub fn create_pool(database_url: &str, settings: &PoolSettings) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_lazy(database_url)
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Close every pooled connection. Pending acquires fail with `PoolClosed`.
pub async fn close_pool(pool: DbPool) {
    pool.close().await;
    tracing::info!("Database connection pool closed");
}
