//! Discrete events emitted by the simulation alongside each snapshot.

use serde::{Deserialize, Serialize};

use crate::types::{AgentId, ConnectionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A join was applied. Addressed to the joining connection only.
    PlayerJoined {
        connection_id: ConnectionId,
        player_id: AgentId,
        world_size: f64,
    },
    /// A rampage buff was granted. Broadcast to everyone.
    Rampage { snake_name: String },
}
