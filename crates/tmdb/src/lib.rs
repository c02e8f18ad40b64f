//! Client for The Movie Database (TMDB) v3 HTTP API.
//!
//! Covers the two endpoints the search pipeline needs (popularity
//! discovery and keyword search), the response envelope with its failure
//! signalling, and the [`MovieSource`] seam the pipeline is written against.

pub mod api;
pub mod messages;
pub mod source;

pub use api::{TmdbApi, TmdbApiError};
pub use messages::MoviePage;
pub use source::MovieSource;
