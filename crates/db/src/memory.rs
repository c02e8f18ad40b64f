//! In-process [`MetricStore`] with the same upsert semantics as PostgreSQL.
//!
//! Used when `METRIC_STORE=memory` and by the pipeline and API tests.
//! Counts are lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use marquee_core::metric::{NewSearchMetric, SearchMetric};

use crate::store::{MetricStore, MetricStoreError};

#[derive(Debug)]
struct Entry {
    metric: SearchMetric,
    /// Bumped on every write; newer writes sort first among equal counts.
    touched: u64,
    inserted: u64,
}

#[derive(Debug, Default)]
struct Inner {
    rows: HashMap<String, Entry>,
    clock: u64,
}

#[derive(Debug, Default)]
pub struct InMemoryMetricStore {
    inner: Mutex<Inner>,
}

impl InMemoryMetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current metric for an exact search string.
    pub async fn get(&self, search: &str) -> Option<SearchMetric> {
        let inner = self.inner.lock().await;
        inner.rows.get(search).map(|e| e.metric.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MetricStore for InMemoryMetricStore {
    async fn record_search(
        &self,
        input: &NewSearchMetric,
    ) -> Result<SearchMetric, MetricStoreError> {
        if input.search.is_empty() {
            return Err(MetricStoreError::EmptySearch);
        }

        let mut inner = self.inner.lock().await;
        inner.clock += 1;
        let now = inner.clock;

        let entry = inner
            .rows
            .entry(input.search.clone())
            .and_modify(|e| {
                e.metric.count += 1;
                e.touched = now;
            })
            .or_insert_with(|| Entry {
                metric: SearchMetric {
                    search: input.search.clone(),
                    count: 1,
                    movie_id: input.movie_id,
                    poster_url: input.poster_url.clone(),
                },
                touched: now,
                inserted: now,
            });

        Ok(entry.metric.clone())
    }

    async fn fetch_trending(&self, limit: i64) -> Result<Vec<SearchMetric>, MetricStoreError> {
        let inner = self.inner.lock().await;
        let mut entries: Vec<&Entry> = inner.rows.values().collect();
        entries.sort_by(|a, b| {
            b.metric
                .count
                .cmp(&a.metric.count)
                .then(b.touched.cmp(&a.touched))
                .then(a.inserted.cmp(&b.inserted))
        });

        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(entries
            .into_iter()
            .take(limit)
            .map(|e| e.metric.clone())
            .collect())
    }

    async fn health_check(&self) -> Result<(), MetricStoreError> {
        Ok(())
    }
}
