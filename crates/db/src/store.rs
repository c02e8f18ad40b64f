//! The [`MetricStore`] seam between the search pipeline and persistence.

use async_trait::async_trait;
use marquee_core::metric::{NewSearchMetric, SearchMetric};

use crate::repositories::SearchMetricRepo;
use crate::DbPool;

/// Errors from a metric store backend.
#[derive(Debug, thiserror::Error)]
pub enum MetricStoreError {
    /// The database rejected or failed the query.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Metrics are keyed by a non-empty search string.
    #[error("Search string must not be empty")]
    EmptySearch,
}

/// Persistence for search popularity counts.
#[async_trait]
pub trait MetricStore: Send + Sync {
    /// Insert the metric with `count = 1`, or increment the existing row for
    /// the same search string. Must be atomic per search string.
    async fn record_search(&self, input: &NewSearchMetric)
        -> Result<SearchMetric, MetricStoreError>;

    /// Up to `limit` metrics, highest count first.
    async fn fetch_trending(&self, limit: i64) -> Result<Vec<SearchMetric>, MetricStoreError>;

    async fn health_check(&self) -> Result<(), MetricStoreError>;
}

/// [`MetricStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgMetricStore {
    pool: DbPool,
}

impl PgMetricStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MetricStore for PgMetricStore {
    async fn record_search(
        &self,
        input: &NewSearchMetric,
    ) -> Result<SearchMetric, MetricStoreError> {
        if input.search.is_empty() {
            return Err(MetricStoreError::EmptySearch);
        }
        let row = SearchMetricRepo::record_search(&self.pool, input).await?;
        tracing::debug!(search = %row.search, count = row.count, "Recorded search metric");
        Ok(row.into())
    }

    async fn fetch_trending(&self, limit: i64) -> Result<Vec<SearchMetric>, MetricStoreError> {
        let rows = SearchMetricRepo::list_trending(&self.pool, limit).await?;
        Ok(rows.into_iter().map(SearchMetric::from).collect())
    }

    async fn health_check(&self) -> Result<(), MetricStoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
