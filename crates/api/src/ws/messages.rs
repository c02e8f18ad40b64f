use serde::{Deserialize, Serialize};

use marquee_core::view::ViewState;

/// Frames sent by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Current value of the search box, sent on every keystroke.
    Input { value: String },
    /// Reload the trending list.
    RefreshTrending,
}

/// Frames pushed to the browser.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage<'a> {
    View { state: &'a ViewState },
}
