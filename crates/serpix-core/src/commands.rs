//! Input events delivered by the transport boundary.
//!
//! Commands are queued and applied at the next tick boundary, so nothing
//! outside the tick ever mutates the registry.

use serde::{Deserialize, Serialize};

use crate::types::ConnectionId;

/// All inputs the simulation accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Create a human agent bound to `connection_id`.
    Join {
        connection_id: ConnectionId,
        name: String,
    },
    /// Set the desired heading and boost intent of the connection's live agent.
    UpdateDirection {
        connection_id: ConnectionId,
        angle: f64,
        boosting: bool,
    },
    /// Remove the connection's agent immediately.
    Disconnect { connection_id: ConnectionId },
}
