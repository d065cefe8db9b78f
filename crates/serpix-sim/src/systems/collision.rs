//! Agent-versus-agent collision detection and resolution.
//!
//! The scan walks other agents in join order and stops at the first body
//! segment within reach, so simultaneous contacts resolve in favor of the
//! earliest-joined agent rather than the closest one.

use hecs::Entity;
use tracing::debug;

use serpix_core::components::{Body, PowerBoost, Vitals};
use serpix_core::config::GameConfig;
use serpix_core::constants::{COLLISION_RADIUS_FACTOR, KILL_REWARD_FRACTION};
use serpix_core::types::Point;

use crate::systems::{elimination, growth};
use crate::world::{GameWorld, KillNotification};

/// A resolved collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOutcome {
    pub winner: Entity,
    pub loser: Entity,
    pub points: f64,
}

/// Points a winner gains from a loser with `loser_score`.
pub fn kill_reward(loser_score: f64) -> f64 {
    (loser_score * KILL_REWARD_FRACTION).ceil()
}

/// First agent in `order`, other than the mover, that is alive and whose
/// body lies within reach of `next`.
///
/// `order` is the tick's join-ordered agent list. A buffed mover ignores
/// agents still inside their spawn grace window, so those cannot be
/// collision-killed.
pub fn detect(
    world: &GameWorld,
    order: &[Entity],
    mover: Entity,
    next: Point,
) -> Option<Entity> {
    let ecs = world.agents.world();
    let (mover_radius, mover_buffed) = {
        let vitals = ecs.get::<&Vitals>(mover).ok()?;
        let power = ecs.get::<&PowerBoost>(mover).ok()?;
        (vitals.radius, power.active)
    };

    for &other in order {
        if other == mover {
            continue;
        }
        let Ok(vitals) = ecs.get::<&Vitals>(other) else {
            continue;
        };
        if !vitals.alive || (mover_buffed && vitals.invulnerable_ticks > 0) {
            continue;
        }
        let reach = mover_radius + vitals.radius * COLLISION_RADIUS_FACTOR;
        let Ok(body) = ecs.get::<&Body>(other) else {
            continue;
        };
        if body.segments.iter().any(|seg| next.distance_to(seg) < reach) {
            return Some(other);
        }
    }
    None
}

/// Detect and resolve at most one collision for `mover` heading to `next`.
///
/// A buffed mover always wins. Otherwise the agent that was hit wins. The
/// winner gains `ceil(loser score × 0.1)`, a notification is recorded at the
/// winner's head, and the loser is eliminated.
pub fn resolve(
    world: &mut GameWorld,
    order: &[Entity],
    mover: Entity,
    next: Point,
    now: u64,
    config: &GameConfig,
) -> Option<CollisionOutcome> {
    let other = detect(world, order, mover, next)?;

    let mover_buffed = world
        .agents
        .world()
        .get::<&PowerBoost>(mover)
        .map(|power| power.active)
        .unwrap_or(false);

    let (winner, loser) = if mover_buffed {
        (mover, other)
    } else {
        (other, mover)
    };

    let loser_score = world
        .agents
        .world()
        .get::<&Vitals>(loser)
        .map(|vitals| vitals.score)
        .ok()?;
    let points = kill_reward(loser_score);

    {
        let vitals = world
            .agents
            .world_mut()
            .query_one_mut::<&mut Vitals>(winner)
            .ok()?;
        vitals.score += points;
        vitals.radius = growth::radius_for(vitals.score, vitals.base_radius, config.max_radius);
    }

    if let Some(position) = world.agents.head(winner) {
        world.notifications.push(KillNotification {
            position,
            points,
            created_at_tick: now,
            duration_ticks: config.notification_duration_ticks(),
        });
    }

    debug!(?winner, ?loser, points, "collision resolved");
    elimination::eliminate(world, loser, now, config);

    Some(CollisionOutcome {
        winner,
        loser,
        points,
    })
}
