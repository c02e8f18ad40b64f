//! Search query classification.

use serde::Serialize;

/// What a raw query string asks the metadata provider for.
///
/// Only the exact empty string means discovery. Whitespace is not trimmed:
/// `" "` is a keyword search like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "query", rename_all = "snake_case")]
pub enum SearchQuery {
    /// Popular movies, no search term.
    Discover,
    /// Keyword search for the contained (un-encoded) text.
    Keyword(String),
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            SearchQuery::Discover
        } else {
            SearchQuery::Keyword(raw.to_string())
        }
    }

    /// The literal search string, empty for discovery.
    pub fn as_str(&self) -> &str {
        match self {
            SearchQuery::Discover => "",
            SearchQuery::Keyword(q) => q,
        }
    }

    pub fn is_discover(&self) -> bool {
        matches!(self, SearchQuery::Discover)
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        SearchQuery::parse(raw)
    }
}
