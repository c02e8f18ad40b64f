//! The [`MovieSource`] seam the search pipeline resolves queries against.

use async_trait::async_trait;
use marquee_core::query::SearchQuery;

use crate::api::{TmdbApi, TmdbApiError};
use crate::messages::MoviePage;

/// Anything that can turn a [`SearchQuery`] into a page of movies.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn fetch_movies(&self, query: &SearchQuery) -> Result<MoviePage, TmdbApiError>;
}

#[async_trait]
impl MovieSource for TmdbApi {
    async fn fetch_movies(&self, query: &SearchQuery) -> Result<MoviePage, TmdbApiError> {
        TmdbApi::fetch_movies(self, query).await
    }
}
