#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_core::metric::{NewSearchMetric, SearchMetric};
use marquee_core::movie::Movie;
use marquee_core::query::SearchQuery;
use marquee_db::{InMemoryMetricStore, MetricStore, MetricStoreError};
use marquee_pipeline::{MetricGateway, MovieQueryPipeline};
use marquee_tmdb::{MoviePage, MovieSource, TmdbApiError};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

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

/// A movie source with canned replies.
///
/// Unscripted queries answer with one movie titled after the query
/// (`"discover"` for the empty query).
#[derive(Default)]
pub struct StubSource {
    movies: HashMap<String, Vec<Movie>>,
    failures: HashMap<String, fn() -> TmdbApiError>,
    calls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movies(mut self, query: &str, movies: Vec<Movie>) -> Self {
        self.movies.insert(query.to_string(), movies);
        self
    }

    pub fn fail(mut self, query: &str, make: fn() -> TmdbApiError) -> Self {
        self.failures.insert(query.to_string(), make);
        self
    }

    /// Literal strings of every query received, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieSource for StubSource {
    async fn fetch_movies(&self, query: &SearchQuery) -> Result<MoviePage, TmdbApiError> {
        let key = query.as_str().to_string();
        self.calls.lock().unwrap().push(key.clone());

        if let Some(make) = self.failures.get(&key) {
            return Err(make());
        }
        let results = match self.movies.get(&key) {
            Some(movies) => movies.clone(),
            None => {
                let title = if query.is_discover() {
                    "discover"
                } else {
                    key.as_str()
                };
                vec![Movie::new(1, title, Some("/p.jpg"))]
            }
        };
        Ok(MoviePage {
            total_results: results.len() as u64,
            total_pages: 1,
            page: 1,
            results,
        })
    }
}

pub fn build_state(
    store: Arc<dyn MetricStore>,
    source: Arc<dyn MovieSource>,
    debounce: Duration,
) -> AppState {
    AppState {
        config: Arc::new(test_config()),
        pipeline: MovieQueryPipeline::new(source, MetricGateway::new(store)),
        debounce,
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(store: Arc<dyn MetricStore>, source: Arc<dyn MovieSource>) -> Router {
    let state = build_state(store, source, Duration::from_millis(50));
    build_app_router(state, &test_config())
}

/// Router backed by an empty in-memory store and an unscripted source.
pub fn default_app() -> Router {
    build_test_app(
        Arc::new(InMemoryMetricStore::new()),
        Arc::new(StubSource::new()),
    )
}

/// Serve the app on an ephemeral local port.
pub async fn spawn_server(state: AppState) -> SocketAddr {
    let app = build_app_router(state, &test_config());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Poll the store until `search` has been recorded.
pub async fn wait_for_metric(store: &InMemoryMetricStore, search: &str) -> SearchMetric {
    for _ in 0..200 {
        if let Some(metric) = store.get(search).await {
            return metric;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("search {search:?} was never recorded");
}
