//! REST client for the TMDB movie list endpoints.
//!
//! Wraps discovery (`GET /discover/movie?sort_by=popularity.desc`) and
//! keyword search (`GET /search/movie?query=...`) using [`reqwest`], with a
//! bearer credential on every request.

use marquee_core::query::SearchQuery;
use reqwest::header::ACCEPT;
use reqwest::Url;

use crate::messages::{MovieEnvelope, MoviePage};

/// Production API root.
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";

/// HTTP client for the TMDB v3 API.
#[derive(Clone)]
pub struct TmdbApi {
    client: reqwest::Client,
    api_url: String,
    access_token: String,
}

/// Errors from the TMDB REST layer.
#[derive(Debug, thiserror::Error)]
pub enum TmdbApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured API root could not be turned into an endpoint URL.
    #[error("Invalid TMDB URL: {0}")]
    InvalidUrl(String),

    /// TMDB returned a non-2xx status.
    #[error("TMDB API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx body explicitly flagged the request as failed.
    #[error("TMDB reported failure ({status}): {}", .message.as_deref().unwrap_or("<no message>"))]
    ProviderFailure {
        status: u16,
        /// Provider-supplied explanation, if any.
        message: Option<String>,
    },

    /// A success status with a body that is not a movie list.
    #[error("Malformed TMDB response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TmdbApi {
    /// Create a new API client.
    ///
    /// * `api_url` - API root, e.g. [`DEFAULT_API_URL`].
    /// * `access_token` - v4 read access token sent as a bearer credential.
    pub fn new(api_url: String, access_token: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, access_token)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, access_token: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Popular movies, most popular first.
    pub async fn discover_movies(&self) -> Result<MoviePage, TmdbApiError> {
        self.fetch_movies(&SearchQuery::Discover).await
    }

    /// Movies matching a keyword search.
    pub async fn search_movies(&self, query: &str) -> Result<MoviePage, TmdbApiError> {
        self.fetch_movies(&SearchQuery::Keyword(query.to_string()))
            .await
    }

    /// Issue the request a [`SearchQuery`] resolves to.
    pub async fn fetch_movies(&self, query: &SearchQuery) -> Result<MoviePage, TmdbApiError> {
        let url = self.endpoint_url(query)?;
        tracing::debug!(url = %url, "Requesting movies from TMDB");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        Self::parse_page(response).await
    }

    /// Build the endpoint URL for a query.
    ///
    /// Keyword text is percent-encoded as a query-string value, so any user
    /// input is safe to pass.
    pub fn endpoint_url(&self, query: &SearchQuery) -> Result<Url, TmdbApiError> {
        let (path, key, value) = match query {
            SearchQuery::Discover => ("discover/movie", "sort_by", "popularity.desc"),
            SearchQuery::Keyword(q) => ("search/movie", "query", q.as_str()),
        };

        let mut url = Url::parse(&format!("{}/{path}", self.api_url))
            .map_err(|e| TmdbApiError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    // ---- private helpers ----

    /// Classify a response into a page or an error.
    ///
    /// Any non-2xx status is an [`TmdbApiError::ApiError`], whatever the
    /// body says. A 2xx body carrying a failure flag is a
    /// [`TmdbApiError::ProviderFailure`] with the provider's message.
    async fn parse_page(response: reqwest::Response) -> Result<MoviePage, TmdbApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TmdbApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let envelope = serde_json::from_str::<MovieEnvelope>(&body)?;
        if envelope.is_failure() {
            return Err(TmdbApiError::ProviderFailure {
                status: status.as_u16(),
                message: envelope.failure_message(),
            });
        }

        Ok(envelope.into_page())
    }
}
