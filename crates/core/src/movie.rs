//! Movie entity as returned by the metadata provider.
//!
//! Only `id`, `title` and `poster_path` are interpreted. Every other field
//! the provider sends (overview, vote_average, release_date, ...) is kept
//! verbatim in [`Movie::extra`] and serialized back out unchanged.

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Provider attributes passed through opaquely.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Movie {
    /// Build a movie with no pass-through attributes.
    pub fn new(id: MovieId, title: impl Into<String>, poster_path: Option<&str>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: poster_path.map(str::to_string),
            extra: serde_json::Map::new(),
        }
    }
}
