//! Search metric entity model.

use marquee_core::metric::SearchMetric;
use marquee_core::types::{DbId, MovieId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row of the `search_metrics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SearchMetricRow {
    pub id: DbId,
    pub search: String,
    pub count: i64,
    pub movie_id: MovieId,
    pub poster_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<SearchMetricRow> for SearchMetric {
    fn from(row: SearchMetricRow) -> Self {
        SearchMetric {
            search: row.search,
            count: row.count,
            movie_id: row.movie_id,
            poster_url: row.poster_url,
        }
    }
}
