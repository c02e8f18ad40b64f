use std::sync::Arc;
use std::time::Duration;

use marquee_pipeline::MovieQueryPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Movie lookup plus metric recording, shared by every request and session.
    pub pipeline: MovieQueryPipeline,
    /// Quiet period applied to live WebSocket search input.
    pub debounce: Duration,
}
