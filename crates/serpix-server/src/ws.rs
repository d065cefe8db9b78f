//! WebSocket transport: one task pair per connection.
//!
//! The receive half parses client frames into input events for the game
//! loop. The send half relays broadcast frames addressed to this connection.
//! Closing the socket, for any reason, sends exactly one disconnect.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use serpix_core::commands::InputEvent;

use crate::protocol::ClientMessage;
use crate::state::AppState;

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| socket_loop(socket, state))
}

async fn socket_loop(socket: WebSocket, state: AppState) {
    let connection_id = state.next_connection_id();
    info!(connection = %connection_id, "client connected");

    // Subscribe before reading so the init frame for a join cannot be missed.
    let mut rx = state.frames.subscribe();
    let (mut sender, mut receiver) = socket.split();

    let send_task = tokio::spawn(async move {
        loop {
            let frame = match rx.recv().await {
                Ok(frame) => frame,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(connection = %connection_id, skipped, "ws receiver lagged");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };
            if !frame.is_for(connection_id) {
                continue;
            }
            if sender
                .send(Message::Text(frame.payload.to_string().into()))
                .await
                .is_err()
            {
                break;
            }
        }
    });

    while let Some(message) = receiver.next().await {
        match message {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(message) => {
                    if !state.send_input(message.into_input(connection_id)) {
                        break;
                    }
                }
                Err(err) => {
                    warn!(connection = %connection_id, "rejected client frame: {err}");
                }
            },
            Ok(Message::Binary(_)) => {}
            Ok(Message::Ping(_)) => {}
            Ok(Message::Pong(_)) => {}
            Ok(Message::Close(_)) => break,
            Err(err) => {
                warn!(connection = %connection_id, "ws receive error: {err}");
                break;
            }
        }
    }

    state.send_input(InputEvent::Disconnect { connection_id });
    send_task.abort();
    info!(connection = %connection_id, "client disconnected");
}
