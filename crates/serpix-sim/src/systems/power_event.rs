//! Rampage scheduler. Periodically grants one live agent a short buff.

use hecs::Entity;
use rand::Rng;
use tracing::info;

use serpix_core::components::{Identity, PowerBoost};
use serpix_core::config::GameConfig;
use serpix_core::constants::POWER_EVENT_HUMAN_BIAS;
use serpix_core::events::GameEvent;

use crate::world::GameWorld;

/// Fire a rampage if the interval has elapsed and anyone is alive.
///
/// The clock resets to the firing tick, so a late firing pushes the next one
/// back rather than double-firing. Returns the chosen agent.
pub fn run<R: Rng + ?Sized>(
    world: &mut GameWorld,
    rng: &mut R,
    config: &GameConfig,
    now: u64,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    if now.saturating_sub(world.last_power_event_tick) <= config.power_event_interval_ticks() {
        return None;
    }

    let candidates: Vec<(Entity, bool)> = world
        .agents
        .live_agents()
        .into_iter()
        .filter_map(|entity| {
            let identity = world.agents.world().get::<&Identity>(entity).ok()?;
            Some((entity, !identity.kind.is_bot()))
        })
        .collect();

    let lucky = choose_lucky(&candidates, POWER_EVENT_HUMAN_BIAS, rng)?;

    let ecs = world.agents.world_mut();
    let (power, identity) = ecs
        .query_one_mut::<(&mut PowerBoost, &Identity)>(lucky)
        .ok()?;
    power.active = true;
    power.ends_at_tick = now.saturating_add(config.power_event_duration_ticks());
    let snake_name = identity.name.clone();

    world.last_power_event_tick = now;
    info!(agent = %identity.id, name = %snake_name, "rampage granted");
    events.push(GameEvent::Rampage { snake_name });

    Some(lucky)
}

/// Pick the rampage recipient from `(candidate, is_human)` pairs.
///
/// With probability `human_bias` a uniformly random human is chosen when any
/// exist; otherwise the pick is uniform over everyone.
pub fn choose_lucky<T: Copy, R: Rng + ?Sized>(
    candidates: &[(T, bool)],
    human_bias: f64,
    rng: &mut R,
) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }

    let humans: Vec<T> = candidates
        .iter()
        .filter(|(_, is_human)| *is_human)
        .map(|(candidate, _)| *candidate)
        .collect();

    if !humans.is_empty() && rng.gen::<f64>() < human_bias {
        return Some(humans[rng.gen_range(0..humans.len())]);
    }
    Some(candidates[rng.gen_range(0..candidates.len())].0)
}
