pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies?query=                  popular movies or keyword search
/// /trending                       top searches by count
/// /ws/search                      WebSocket live search session
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::movies::list_movies))
        .route("/trending", get(handlers::trending::list_trending))
        .route("/ws/search", get(ws::search_ws_handler))
}
