//! Per-agent motion integration, the body of the tick.
//!
//! For each live agent in join order: tick down grace and buff timers, run
//! the bot AI, steer, move, then check walls, agents and food. An agent
//! eliminated earlier in the same tick is skipped.

use hecs::Entity;
use rand::Rng;

use serpix_core::components::{Body, Identity, Motion, PowerBoost, Vitals};
use serpix_core::config::GameConfig;
use serpix_core::constants::TURN_RATE;

use crate::systems::{bot_ai, collision, elimination, feeding, growth, steering};
use crate::world::GameWorld;

/// Advance every live agent by one tick.
pub fn run<R: Rng + ?Sized>(world: &mut GameWorld, rng: &mut R, config: &GameConfig, now: u64) {
    // No agent is created or despawned while agents move, so one join-ordered
    // list serves every collision scan this tick.
    let order = world.agents.ordered();
    for &entity in &order {
        update_agent(world, &order, entity, rng, config, now);
    }
}

fn update_agent<R: Rng + ?Sized>(
    world: &mut GameWorld,
    order: &[Entity],
    entity: Entity,
    rng: &mut R,
    config: &GameConfig,
    now: u64,
) {
    // Timers.
    let is_bot = {
        let Ok((vitals, power, identity)) = world
            .agents
            .world_mut()
            .query_one_mut::<(&mut Vitals, &mut PowerBoost, &Identity)>(entity)
        else {
            return;
        };
        if !vitals.alive {
            return;
        }
        vitals.invulnerable_ticks = vitals.invulnerable_ticks.saturating_sub(1);
        if power.active && now > power.ends_at_tick {
            power.active = false;
        }
        identity.kind.is_bot()
    };

    if is_bot {
        bot_ai::steer(world, entity, rng);
    }

    // Steering and speed.
    let (head, next, boosting, score, invulnerable) = {
        let Ok((motion, vitals, power, body)) = world
            .agents
            .world_mut()
            .query_one_mut::<(&mut Motion, &mut Vitals, &PowerBoost, &Body)>(entity)
        else {
            return;
        };
        let Some(head) = body.segments.front().copied() else {
            return;
        };

        motion.angle = steering::turn_toward(motion.angle, motion.target_angle, TURN_RATE);
        steering::apply_speed(motion, vitals, power.active);
        vitals.radius = growth::radius_for(vitals.score, vitals.base_radius, config.max_radius);

        let next = steering::advance(head, motion.angle, motion.speed);
        (
            head,
            next,
            motion.boosting,
            vitals.score,
            vitals.invulnerable_ticks,
        )
    };

    // Walls.
    if !next.within_square(config.world_size) {
        elimination::eliminate(world, entity, now, config);
        return;
    }

    // Agents.
    if invulnerable == 0 && collision::resolve(world, order, entity, next, now, config).is_some() {
        return;
    }

    // Commit the move.
    if let Ok(mut body) = world.agents.world_mut().get::<&mut Body>(entity) {
        let target = growth::target_length(score, config.initial_length);
        growth::commit_head(&mut body, next, boosting, target);
    }

    // Food, checked from the head the agent moved away from.
    feeding::run(world, entity, head, rng, config);
}
