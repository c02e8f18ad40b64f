//! Response bodies returned by the TMDB movie list endpoints.

use marquee_core::movie::Movie;
use serde::Deserialize;

/// Raw body of `/discover/movie` and `/search/movie`.
///
/// Successful bodies carry `results`; failures carry a failure flag and a
/// message. TMDB itself signals failure with `success: false` and
/// `status_message`; the OMDb-style `response: "False"` / `error` pair is
/// accepted as well since some proxies in front of TMDB answer that way.
#[derive(Debug, Default, Deserialize)]
pub struct MovieEnvelope {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,

    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_message: Option<String>,
}

impl MovieEnvelope {
    /// Whether the body explicitly reports a failed request.
    pub fn is_failure(&self) -> bool {
        self.success == Some(false) || self.response.as_deref() == Some("False")
    }

    /// Provider-supplied failure text, verbatim, if any non-blank one was
    /// sent.
    pub fn failure_message(&self) -> Option<String> {
        self.error
            .as_deref()
            .or(self.status_message.as_deref())
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
    }

    pub fn into_page(self) -> MoviePage {
        MoviePage {
            results: self.results.unwrap_or_default(),
            page: self.page.unwrap_or(1),
            total_pages: self.total_pages.unwrap_or(0),
            total_results: self.total_results.unwrap_or(0),
        }
    }
}

/// One page of movie results.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub results: Vec<Movie>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
}
