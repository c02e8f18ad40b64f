//! Movie query pipeline.
//!
//! Resolves a raw query string to a movie list. An empty query asks the
//! provider for popular movies, anything else is a keyword search. Provider
//! errors collapse into a single [`FetchError`] carrying the message a client
//! should show.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use marquee_core::messages::{FETCH_MOVIES_ERROR, PROVIDER_FAILURE_FALLBACK};
use marquee_core::metric::should_record;
use marquee_core::movie::Movie;
use marquee_core::query::SearchQuery;
use marquee_core::view::SliceState;
use marquee_tmdb::{MovieSource, TmdbApiError};

use crate::gateway::MetricGateway;

/// The only error a movie lookup exposes: a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl From<&TmdbApiError> for FetchError {
    fn from(err: &TmdbApiError) -> Self {
        let message = match err {
            TmdbApiError::ProviderFailure { message, .. } => message
                .clone()
                .unwrap_or_else(|| PROVIDER_FAILURE_FALLBACK.to_string()),
            _ => FETCH_MOVIES_ERROR.to_string(),
        };
        FetchError { message }
    }
}

/// Result of one [`MovieQueryPipeline::resolve_movies`] call.
#[derive(Debug)]
pub struct Resolution {
    pub query: SearchQuery,
    pub outcome: Result<Vec<Movie>, FetchError>,
    /// The detached metric record, if this search qualified for one.
    pub recording: Option<JoinHandle<()>>,
}

impl Resolution {
    /// Fold the outcome into a view slice. A pending record keeps running.
    pub fn into_slice(self) -> SliceState<Movie> {
        match self.outcome {
            Ok(items) => SliceState::Ready { items },
            Err(e) => SliceState::Failed { message: e.message },
        }
    }
}

#[derive(Clone)]
pub struct MovieQueryPipeline {
    source: Arc<dyn MovieSource>,
    gateway: MetricGateway,
}

impl MovieQueryPipeline {
    pub fn new(source: Arc<dyn MovieSource>, gateway: MetricGateway) -> Self {
        Self { source, gateway }
    }

    pub fn gateway(&self) -> &MetricGateway {
        &self.gateway
    }

    /// Fetch movies for `raw` and, when a non-empty search matched at least
    /// one movie, record it against the first match.
    ///
    /// The record runs detached; its outcome never changes the returned
    /// movie list.
    pub async fn resolve_movies(&self, raw: &str) -> Resolution {
        let query = SearchQuery::parse(raw);

        match self.source.fetch_movies(&query).await {
            Ok(page) => {
                tracing::debug!(
                    query = %raw,
                    results = page.results.len(),
                    "Movies resolved",
                );

                let recording = match page.results.first() {
                    Some(first) if should_record(raw, page.results.len()) => Some(
                        self.gateway
                            .spawn_record(raw.to_string(), first.clone()),
                    ),
                    _ => None,
                };

                Resolution {
                    query,
                    outcome: Ok(page.results),
                    recording,
                }
            }
            Err(e) => {
                tracing::error!(query = %raw, error = %e, "Error fetching movies");
                Resolution {
                    query,
                    outcome: Err(FetchError::from(&e)),
                    recording: None,
                }
            }
        }
    }
}
