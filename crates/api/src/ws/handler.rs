use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::watch;

use marquee_core::view::ViewState;
use marquee_pipeline::SearchSession;

use crate::state::AppState;
use crate::ws::messages::{ClientMessage, ServerMessage};

/// HTTP handler that upgrades the connection to a live search session.
pub async fn search_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Manage a single live search connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Starts a [`SearchSession`] for the connection.
///   2. Spawns a sender task that pushes every view change to the sink.
///   3. Feeds inbound frames into the session on the current task.
///   4. Shuts the session down on disconnect.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "Search session connected");

    let session = SearchSession::start(state.pipeline.clone(), state.debounce);
    let views = session.subscribe();

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward view snapshots to the WebSocket sink.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        let mut views = views;
        loop {
            let Some(frame) = view_frame(&mut views) else {
                break;
            };
            if sink.send(Message::Text(frame.into())).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
            if views.changed().await.is_err() {
                break;
            }
        }
    });

    // Receiver loop: feed inbound frames to the session.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(text.as_str()) {
                Ok(ClientMessage::Input { value }) => session.input(value),
                Ok(ClientMessage::RefreshTrending) => session.refresh_trending(),
                Err(e) => {
                    tracing::debug!(conn_id = %conn_id, error = %e, "Ignoring malformed frame");
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    send_task.abort();
    session.shutdown().await;
    tracing::info!(conn_id = %conn_id, "Search session disconnected");
}

/// Serialize the latest view, marking it seen.
fn view_frame(views: &mut watch::Receiver<ViewState>) -> Option<String> {
    let view = views.borrow_and_update();
    match serde_json::to_string(&ServerMessage::View { state: &view }) {
        Ok(frame) => Some(frame),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize view");
            None
        }
    }
}
