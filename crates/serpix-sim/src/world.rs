//! The world aggregate mutated by the tick driver.
//!
//! Systems borrow a `GameWorld` for the duration of one call and never keep
//! references across ticks.

use serpix_core::types::Point;

use crate::registry::AgentRegistry;
use crate::resources::ResourceField;

/// Kill-credit popup, owned by no agent and pruned by age.
#[derive(Debug, Clone, PartialEq)]
pub struct KillNotification {
    pub position: Point,
    pub points: f64,
    pub created_at_tick: u64,
    pub duration_ticks: u64,
}

#[derive(Default)]
pub struct GameWorld {
    pub agents: AgentRegistry,
    pub resources: ResourceField,
    pub notifications: Vec<KillNotification>,
    /// Tick at which the last rampage fired (0 before the first).
    pub last_power_event_tick: u64,
}

impl GameWorld {
    pub fn new() -> Self {
        Self::default()
    }
}
