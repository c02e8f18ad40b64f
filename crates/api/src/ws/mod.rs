//! WebSocket live search.
//!
//! Each connection owns one [`marquee_pipeline::SearchSession`]. The client
//! streams raw search box values; the server pushes a full view snapshot
//! whenever the session's state changes.

mod handler;
pub mod messages;

pub use handler::search_ws_handler;
pub use messages::{ClientMessage, ServerMessage};
