//! Metric store gateway.
//!
//! Store failures never reach the movie browsing path: recording a search
//! logs and gives up, and a failed trending lookup becomes the trending
//! slice's own error state.

use std::sync::Arc;

use tokio::task::JoinHandle;

use marquee_core::messages::FETCH_TRENDING_ERROR;
use marquee_core::metric::{NewSearchMetric, SearchMetric, TRENDING_LIMIT};
use marquee_core::movie::Movie;
use marquee_core::view::SliceState;
use marquee_db::{MetricStore, MetricStoreError};

/// Cheaply cloneable handle to a [`MetricStore`].
#[derive(Clone)]
pub struct MetricGateway {
    store: Arc<dyn MetricStore>,
}

impl MetricGateway {
    pub fn new(store: Arc<dyn MetricStore>) -> Self {
        Self { store }
    }

    /// Record a successful search of `query` whose first match was `movie`.
    ///
    /// Errors are logged and swallowed.
    pub async fn record_search(&self, query: &str, movie: &Movie) {
        let input = NewSearchMetric::from_match(query, movie);
        match self.store.record_search(&input).await {
            Ok(metric) => {
                tracing::info!(
                    search = %metric.search,
                    count = metric.count,
                    movie_id = metric.movie_id,
                    "Search metric recorded",
                );
            }
            Err(e) => {
                tracing::error!(search = %query, error = %e, "Error in record_search");
            }
        }
    }

    /// Run [`record_search`](Self::record_search) as a detached task.
    ///
    /// The handle is only useful to tests; dropping it does not cancel the
    /// record.
    pub fn spawn_record(&self, query: String, movie: Movie) -> JoinHandle<()> {
        let gateway = self.clone();
        tokio::spawn(async move {
            gateway.record_search(&query, &movie).await;
        })
    }

    /// Top searches by count, at most [`TRENDING_LIMIT`].
    ///
    /// Errors are logged before being returned.
    pub async fn fetch_trending(&self) -> Result<Vec<SearchMetric>, MetricStoreError> {
        self.store
            .fetch_trending(TRENDING_LIMIT)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error in fetch_trending"))
    }

    /// Trending lookup folded into a view slice.
    pub async fn trending_slice(&self) -> SliceState<SearchMetric> {
        match self.fetch_trending().await {
            Ok(items) => SliceState::Ready { items },
            Err(_) => SliceState::Failed {
                message: FETCH_TRENDING_ERROR.to_string(),
            },
        }
    }

    /// Whether the backing store is reachable.
    pub async fn is_healthy(&self) -> bool {
        match self.store.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Metric store health check failed");
                false
            }
        }
    }
}
