//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::ConnectionId;

/// Who steers an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    /// Steered by a connected player through `UpdateDirection` commands.
    Human { connection_id: ConnectionId },
    /// Steered by the bot AI every tick.
    Bot,
}

impl AgentKind {
    pub fn is_bot(&self) -> bool {
        matches!(self, AgentKind::Bot)
    }

    /// Connection bound to a human agent, if any.
    pub fn connection_id(&self) -> Option<ConnectionId> {
        match self {
            AgentKind::Human { connection_id } => Some(*connection_id),
            AgentKind::Bot => None,
        }
    }
}

/// Food grade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodGrade {
    /// Field food: replaced in place when eaten.
    #[default]
    Ordinary,
    /// Dropped from an eliminated agent's body: removed when eaten.
    Premium,
}
