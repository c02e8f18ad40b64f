//! Repository for the `search_metrics` table.
//!
//! Recording a search is a single upsert: the existence check and the
//! increment happen in one statement, so concurrent records of the same
//! search string never lose an increment or create a duplicate row.

use sqlx::PgPool;

use marquee_core::metric::NewSearchMetric;

use crate::models::search_metric::SearchMetricRow;

/// Column list for `search_metrics` SELECT queries.
const COLUMNS: &str = "id, search, count, movie_id, poster_url, created_at, updated_at";

/// Provides query operations for search metrics.
pub struct SearchMetricRepo;

impl SearchMetricRepo {
    /// Find the metric for an exact search string (case-sensitive).
    pub async fn find_by_search(
        pool: &PgPool,
        search: &str,
    ) -> Result<Option<SearchMetricRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM search_metrics WHERE search = $1");
        sqlx::query_as::<_, SearchMetricRow>(&query)
            .bind(search)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new metric with `count = 1`, or bump the count of the
    /// existing one.
    ///
    /// On conflict only `count` and `updated_at` change; `movie_id` and
    /// `poster_url` keep the values from the first insert.
    pub async fn record_search(
        pool: &PgPool,
        input: &NewSearchMetric,
    ) -> Result<SearchMetricRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO search_metrics (search, count, movie_id, poster_url) \
             VALUES ($1, 1, $2, $3) \
             ON CONFLICT (search) DO UPDATE SET \
                count = search_metrics.count + 1, \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SearchMetricRow>(&query)
            .bind(&input.search)
            .bind(input.movie_id)
            .bind(&input.poster_url)
            .fetch_one(pool)
            .await
    }

    /// The most popular searches, highest count first.
    ///
    /// Ties go to the most recently updated row, then insertion order.
    pub async fn list_trending(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<SearchMetricRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM search_metrics \
             ORDER BY count DESC, updated_at DESC, id ASC \
             LIMIT $1"
        );
        sqlx::query_as::<_, SearchMetricRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
