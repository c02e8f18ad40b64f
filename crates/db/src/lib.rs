//! Metric store for search popularity counts.
//!
//! The `search_metrics` table lives in PostgreSQL (a hosted Supabase project
//! exposes the same database). [`store::MetricStore`] is the seam the search
//! pipeline depends on; [`store::PgMetricStore`] backs it with the
//! repository in [`repositories`], [`memory::InMemoryMetricStore`] keeps the
//! same semantics in process for local development and tests.

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use memory::InMemoryMetricStore;
pub use store::{MetricStore, MetricStoreError, PgMetricStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the pool can reach the database.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
