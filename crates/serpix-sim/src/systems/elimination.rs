//! Elimination: mark dead, scatter the body as premium food, and reclaim the
//! agent once its removal deadline passes.

use hecs::Entity;
use rand::Rng;
use tracing::debug;

use serpix_core::components::{Body, Identity, PendingRemoval, Vitals};
use serpix_core::config::GameConfig;
use serpix_core::constants::SCATTER_STRIDE;
use serpix_core::enums::AgentKind;

use crate::world::GameWorld;
use crate::world_setup::{random_color, replacement_bot_name};

/// Kill `entity` at tick `now`. No-op for agents that are already dead or gone.
///
/// Every `SCATTER_STRIDE`th body segment, starting at the head, becomes a
/// premium item in the agent's color. The agent stays in the registry until
/// `now + elimination delay`.
pub fn eliminate(world: &mut GameWorld, entity: Entity, now: u64, config: &GameConfig) {
    let scattered = {
        let ecs = world.agents.world_mut();
        let Ok((vitals, identity, body)) =
            ecs.query_one_mut::<(&mut Vitals, &Identity, &Body)>(entity)
        else {
            return;
        };
        if !vitals.alive {
            return;
        }
        vitals.alive = false;

        debug!(agent = %identity.id, name = %identity.name, score = vitals.score, "agent eliminated");

        let drops: Vec<_> = body
            .segments
            .iter()
            .step_by(SCATTER_STRIDE)
            .copied()
            .collect();
        (drops, identity.color.clone())
    };

    let (drops, color) = scattered;
    for position in drops {
        world.resources.push_premium(position, color.clone());
    }

    let remove_at_tick = now.saturating_add(config.elimination_delay_ticks());
    let inserted = world
        .agents
        .world_mut()
        .insert_one(entity, PendingRemoval { remove_at_tick });
    debug_assert!(inserted.is_ok(), "eliminated agent vanished before its deadline was set");
}

/// Remove every agent whose deadline has arrived; each removed bot is
/// replaced by a fresh bot with a new identity. Returns how many were removed.
pub fn reclaim<R: Rng + ?Sized>(
    world: &mut GameWorld,
    rng: &mut R,
    config: &GameConfig,
    now: u64,
) -> usize {
    let due: Vec<(Entity, AgentKind)> = world
        .agents
        .ordered()
        .into_iter()
        .filter_map(|entity| {
            let ecs = world.agents.world();
            let pending = ecs.get::<&PendingRemoval>(entity).ok()?;
            if pending.remove_at_tick > now {
                return None;
            }
            let kind = ecs.get::<&Identity>(entity).ok()?.kind;
            Some((entity, kind))
        })
        .collect();

    for &(entity, kind) in &due {
        world.agents.remove(entity);
        if kind.is_bot() {
            let color = random_color(rng, &config.palette);
            let name = replacement_bot_name(rng);
            let (_, id) = world.agents.create_bot(name, color, rng, config);
            debug!(agent = %id, "replacement bot spawned");
        }
    }

    due.len()
}
