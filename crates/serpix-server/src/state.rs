//! Application state shared between socket tasks and the game loop thread.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};

use tokio::sync::broadcast;

use serpix_core::commands::InputEvent;
use serpix_core::types::ConnectionId;

/// Commands sent from the transport to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An input event to forward to the simulation engine.
    Input(InputEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// One serialized server message on its way to the sockets.
#[derive(Debug, Clone)]
pub struct OutboundFrame {
    /// `None` broadcasts to every connection.
    pub target: Option<ConnectionId>,
    pub payload: Arc<str>,
}

impl OutboundFrame {
    pub fn broadcast(payload: impl Into<Arc<str>>) -> Self {
        Self {
            target: None,
            payload: payload.into(),
        }
    }

    pub fn to(target: ConnectionId, payload: impl Into<Arc<str>>) -> Self {
        Self {
            target: Some(target),
            payload: payload.into(),
        }
    }

    /// Whether `connection_id` should receive this frame.
    pub fn is_for(&self, connection_id: ConnectionId) -> bool {
        self.target.map_or(true, |target| target == connection_id)
    }
}

/// Cloned into every request handler by axum.
#[derive(Clone)]
pub struct AppState {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub frames: broadcast::Sender<OutboundFrame>,
    next_connection: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        frames: broadcast::Sender<OutboundFrame>,
    ) -> Self {
        Self {
            command_tx,
            frames,
            next_connection: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Allocate a connection id. Never reused within a process.
    pub fn next_connection_id(&self) -> ConnectionId {
        ConnectionId(self.next_connection.fetch_add(1, Ordering::Relaxed))
    }

    /// Forward an input event. Returns false once the game loop has stopped.
    pub fn send_input(&self, event: InputEvent) -> bool {
        self.command_tx.send(GameLoopCommand::Input(event)).is_ok()
    }
}
