//! Snapshot system: builds a complete GameStateSnapshot from the world.
//!
//! Read-only; never modifies the world.

use serpix_core::components::*;
use serpix_core::config::GameConfig;
use serpix_core::constants::SNAPSHOT_SEGMENT_CAP;
use serpix_core::state::*;

use crate::world::GameWorld;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &GameWorld, config: &GameConfig) -> GameStateSnapshot {
    GameStateSnapshot {
        snakes: build_snakes(world),
        foods: build_foods(world),
        kill_notifications: build_notifications(world, config),
    }
}

/// Every agent, including those awaiting removal, in join order.
fn build_snakes(world: &GameWorld) -> Vec<SnakeView> {
    let ecs = world.agents.world();
    let mut snakes: Vec<(JoinOrder, SnakeView)> = ecs
        .query::<(&JoinOrder, &Identity, &Body, &Motion, &Vitals, &PowerBoost)>()
        .iter()
        .map(|(_, (order, identity, body, motion, vitals, power))| {
            let view = SnakeView {
                id: identity.id,
                name: identity.name.clone(),
                color: identity.color.clone(),
                segments: body
                    .segments
                    .iter()
                    .take(SNAPSHOT_SEGMENT_CAP)
                    .copied()
                    .collect(),
                angle: motion.angle,
                radius: vitals.radius,
                score: vitals.score,
                dead: !vitals.alive,
                is_boosting: motion.boosting,
                power_boost: power.active,
                invulnerable: vitals.invulnerable_ticks,
            };
            (*order, view)
        })
        .collect();

    snakes.sort_by_key(|(order, _)| *order);
    snakes.into_iter().map(|(_, view)| view).collect()
}

fn build_foods(world: &GameWorld) -> Vec<FoodView> {
    world
        .resources
        .items()
        .iter()
        .map(|item| FoodView {
            id: item.id,
            x: item.position.x,
            y: item.position.y,
            radius: item.radius,
            color: item.color.clone(),
            value: item.value,
            is_premium: item.is_premium(),
        })
        .collect()
}

fn build_notifications(world: &GameWorld, config: &GameConfig) -> Vec<KillNotificationView> {
    world
        .notifications
        .iter()
        .map(|n| KillNotificationView {
            x: n.position.x,
            y: n.position.y,
            points: n.points,
            created_at: config.tick_to_ms(n.created_at_tick),
            duration: config.tick_to_ms(n.duration_ticks),
        })
        .collect()
}
