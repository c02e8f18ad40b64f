//! User-facing messages shown by clients in place of a list.
//!
//! Kept in one place so the REST handlers and the live search session
//! report identical text for identical failures.

/// Shown when the movie request fails at the transport or HTTP level.
pub const FETCH_MOVIES_ERROR: &str = "Error fetching movies. Please try again later.";

/// Fallback when the provider flags a failure without a message of its own.
pub const PROVIDER_FAILURE_FALLBACK: &str = "Failed to fetch movies";

/// Shown in the trending section when the metric store cannot be read.
pub const FETCH_TRENDING_ERROR: &str = "Error fetching trending movies. Please try again later.";
