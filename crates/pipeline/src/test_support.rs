//! Fakes shared by the pipeline unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use marquee_core::metric::{NewSearchMetric, SearchMetric};
use marquee_core::movie::Movie;
use marquee_core::query::SearchQuery;
use marquee_db::{MetricStore, MetricStoreError};
use marquee_tmdb::{MoviePage, MovieSource, TmdbApiError};

/// A metric store whose every call fails.
pub struct FailingStore;

#[async_trait]
impl MetricStore for FailingStore {
    async fn record_search(
        &self,
        _input: &NewSearchMetric,
    ) -> Result<SearchMetric, MetricStoreError> {
        Err(MetricStoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn fetch_trending(&self, _limit: i64) -> Result<Vec<SearchMetric>, MetricStoreError> {
        Err(MetricStoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn health_check(&self) -> Result<(), MetricStoreError> {
        Err(MetricStoreError::Database(sqlx::Error::PoolClosed))
    }
}

pub fn page(results: Vec<Movie>) -> MoviePage {
    MoviePage {
        total_results: results.len() as u64,
        total_pages: 1,
        page: 1,
        results,
    }
}

/// What a [`ScriptedSource`] answers for one query.
pub enum Reply {
    Movies(Vec<Movie>),
    Fail(fn() -> TmdbApiError),
}

/// A movie source with canned replies and per-query latency.
///
/// Unscripted queries answer with a single movie titled after the query
/// (`"discover"` for the empty query) after no delay.
#[derive(Default)]
pub struct ScriptedSource {
    replies: HashMap<String, Reply>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<SearchQuery>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, query: &str, reply: Reply) -> Self {
        self.replies.insert(query.to_string(), reply);
        self
    }

    pub fn delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Every query received, in order.
    pub fn calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().unwrap().clone()
    }

    /// Literal strings of every query received, in order.
    pub fn call_strings(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|q| q.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl MovieSource for ScriptedSource {
    async fn fetch_movies(&self, query: &SearchQuery) -> Result<MoviePage, TmdbApiError> {
        self.calls.lock().unwrap().push(query.clone());

        if let Some(delay) = self.delays.get(query.as_str()) {
            tokio::time::sleep(*delay).await;
        }

        match self.replies.get(query.as_str()) {
            Some(Reply::Movies(movies)) => Ok(page(movies.clone())),
            Some(Reply::Fail(make)) => Err(make()),
            None => {
                let title = if query.is_discover() {
                    "discover"
                } else {
                    query.as_str()
                };
                Ok(page(vec![Movie::new(1, title, Some("/p.jpg"))]))
            }
        }
    }
}
