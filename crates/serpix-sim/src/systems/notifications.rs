//! Kill notification pruning.

use crate::world::GameWorld;

/// Drop notifications whose display window has elapsed at tick `now`.
pub fn prune(world: &mut GameWorld, now: u64) {
    world
        .notifications
        .retain(|n| now.saturating_sub(n.created_at_tick) < n.duration_ticks);
}
