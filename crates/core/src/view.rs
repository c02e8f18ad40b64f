//! Client-facing view state.
//!
//! A search client shows two independent asynchronous slices: the trending
//! searches and the main movie results. Each slice is in exactly one of the
//! [`SliceState`] states, and a client renders a spinner, an error line or
//! the list accordingly.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::metric::SearchMetric;
use crate::movie::Movie;

/// State of one asynchronously loaded list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SliceState<T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    Failed { message: String },
    Ready { items: Vec<T> },
}

impl<T> Default for SliceState<T> {
    fn default() -> Self {
        SliceState::Idle
    }
}

impl<T> SliceState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, SliceState::Loading)
    }

    /// Error message, if the slice failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            SliceState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Loaded items; empty unless the slice is ready.
    pub fn items(&self) -> &[T] {
        match self {
            SliceState::Ready { items } => items,
            _ => &[],
        }
    }

    /// A section is shown while loading, on error, or with a non-empty list.
    /// An empty, settled dataset hides it.
    pub fn is_visible(&self) -> bool {
        match self {
            SliceState::Idle => false,
            SliceState::Loading | SliceState::Failed { .. } => true,
            SliceState::Ready { items } => !items.is_empty(),
        }
    }
}

/// Snapshot pushed to a live search client.
///
/// Serializes with `movies_visible` and `trending_visible` alongside the
/// slices, computed from them at serialization time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Debounced query the movie slice belongs to.
    pub query: String,
    pub movies: SliceState<Movie>,
    pub trending: SliceState<SearchMetric>,
}

impl ViewState {
    pub fn movies_visible(&self) -> bool {
        self.movies.is_visible()
    }

    pub fn trending_visible(&self) -> bool {
        self.trending.is_visible()
    }
}

impl Serialize for ViewState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ViewState", 5)?;
        state.serialize_field("query", &self.query)?;
        state.serialize_field("movies", &self.movies)?;
        state.serialize_field("movies_visible", &self.movies_visible())?;
        state.serialize_field("trending", &self.trending)?;
        state.serialize_field("trending_visible", &self.trending_visible())?;
        state.end()
    }
}
