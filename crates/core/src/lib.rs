//! Domain types shared by every Marquee crate.
//!
//! Zero internal dependencies: the metadata client, the metric store, the
//! search pipeline and the HTTP surface all build on these types.

pub mod error;
pub mod messages;
pub mod metric;
pub mod movie;
pub mod query;
pub mod types;
pub mod view;
