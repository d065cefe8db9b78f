//! Wire messages exchanged with browser clients.
//!
//! Every frame is a JSON object `{"type": ..., "data": ...}`.

use serde::{Deserialize, Serialize};

use serpix_core::commands::InputEvent;
use serpix_core::state::GameStateSnapshot;
use serpix_core::types::{AgentId, ConnectionId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ClientMessage {
    Join(JoinRequest),
    UpdateDirection(DirectionUpdate),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct JoinRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionUpdate {
    pub angle: f64,
    #[serde(default)]
    pub boosting: bool,
}

impl ClientMessage {
    /// Convert into the engine's input event for `connection_id`.
    pub fn into_input(self, connection_id: ConnectionId) -> InputEvent {
        match self {
            ClientMessage::Join(request) => InputEvent::Join {
                connection_id,
                name: request.name.unwrap_or_default(),
            },
            ClientMessage::UpdateDirection(update) => InputEvent::UpdateDirection {
                connection_id,
                angle: update.angle,
                boosting: update.boosting,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Sent only to the connection that joined.
    Init(InitData),
    GameState(GameStateSnapshot),
    Rampage(RampageData),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InitData {
    pub player_id: AgentId,
    pub world_size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RampageData {
    pub snake_name: String,
}
