//! Search pipeline: debounced input, movie resolution and search metrics.
//!
//! The pieces compose bottom-up:
//!
//! - [`gateway::MetricGateway`] records searches and reads trending metrics,
//!   degrading silently when the store fails.
//! - [`resolver::MovieQueryPipeline`] turns a query into a movie list or a
//!   [`resolver::FetchError`], firing the metric record as a detached task.
//! - [`debounce::Debouncer`] turns keystrokes into a stable query.
//! - [`session::SearchSession`] wires the three together for one client and
//!   publishes [`marquee_core::view::ViewState`] snapshots.

pub mod debounce;
pub mod gateway;
pub mod generation;
pub mod resolver;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use gateway::MetricGateway;
pub use resolver::{FetchError, MovieQueryPipeline, Resolution};
pub use session::SearchSession;
