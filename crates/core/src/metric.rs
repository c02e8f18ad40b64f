//! Search popularity metrics.
//!
//! A [`SearchMetric`] is keyed by the literal search string (case-sensitive,
//! no normalization). It is created on the first successful match and its
//! count is incremented on every later match; the movie it was created with
//! is never overwritten.

use serde::{Deserialize, Serialize};

use crate::movie::Movie;
use crate::types::MovieId;

/// CDN prefix for w500 poster images.
pub const POSTER_CDN_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Maximum number of rows returned by a trending lookup.
pub const TRENDING_LIMIT: i64 = 5;

/// One persisted record of a search string's popularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetric {
    pub search: String,
    pub count: i64,
    pub movie_id: MovieId,
    pub poster_url: String,
}

/// Build the poster URL stored with a new metric.
///
/// Plain concatenation of [`POSTER_CDN_BASE`] and the provider's poster path.
/// A movie without a poster yields the bare base URL.
pub fn poster_url(poster_path: Option<&str>) -> String {
    format!("{POSTER_CDN_BASE}{}", poster_path.unwrap_or_default())
}

/// Values inserted for a search string seen for the first time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSearchMetric {
    pub search: String,
    pub movie_id: MovieId,
    pub poster_url: String,
}

impl NewSearchMetric {
    pub fn from_match(search: &str, movie: &Movie) -> Self {
        Self {
            search: search.to_string(),
            movie_id: movie.id,
            poster_url: poster_url(movie.poster_path.as_deref()),
        }
    }
}

/// Whether a successful search should be counted.
///
/// Empty queries (discovery) and zero-result searches never create or bump a
/// metric.
pub fn should_record(query: &str, result_count: usize) -> bool {
    !query.is_empty() && result_count > 0
}
