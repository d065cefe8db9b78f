//! Game state snapshot: the complete visible state broadcast after each tick.

use serde::{Deserialize, Serialize};

use crate::types::{AgentId, Point};

/// Complete game state broadcast to every observer after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateSnapshot {
    pub snakes: Vec<SnakeView>,
    pub foods: Vec<FoodView>,
    pub kill_notifications: Vec<KillNotificationView>,
}

/// One agent, live or awaiting removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakeView {
    pub id: AgentId,
    pub name: String,
    pub color: String,
    /// Head-first prefix of the body, capped for payload size.
    pub segments: Vec<Point>,
    pub angle: f64,
    pub radius: f64,
    pub score: f64,
    pub dead: bool,
    pub is_boosting: bool,
    pub power_boost: bool,
    /// Grace ticks remaining.
    pub invulnerable: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodView {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    pub value: f64,
    pub is_premium: bool,
}

/// Kill-credit popup. Times are simulation milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillNotificationView {
    pub x: f64,
    pub y: f64,
    pub points: f64,
    pub created_at: u64,
    pub duration: u64,
}
