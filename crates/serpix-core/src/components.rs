//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::enums::AgentKind;
use crate::types::{AgentId, Point};

/// Identity and presentation of an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: AgentId,
    pub name: String,
    /// CSS color string from the palette.
    pub color: String,
    pub kind: AgentKind,
}

/// Registry insertion order. Collision scans and snapshots follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JoinOrder(pub u64);

/// Body segments, head first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Body {
    pub segments: VecDeque<Point>,
}

/// Heading and speed state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Motion {
    /// Current heading (radians).
    pub angle: f64,
    /// Desired heading, set by the player or the bot AI.
    pub target_angle: f64,
    pub base_speed: f64,
    /// Speed applied on the last move.
    pub speed: f64,
    /// Boost intent.
    pub boosting: bool,
}

/// Score, size and life state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vitals {
    /// Never negative.
    pub score: f64,
    pub base_radius: f64,
    /// Derived from score, capped at the configured max radius.
    pub radius: f64,
    pub alive: bool,
    /// Ticks of post-spawn grace remaining.
    pub invulnerable_ticks: u32,
}

/// Rampage buff state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PowerBoost {
    pub active: bool,
    /// Tick after which the buff lapses.
    pub ends_at_tick: u64,
}

/// Attached on elimination; the entity is despawned once `remove_at_tick` is reached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PendingRemoval {
    pub remove_at_tick: u64,
}
