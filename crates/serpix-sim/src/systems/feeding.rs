//! Food consumption for one agent.

use hecs::Entity;
use rand::Rng;

use serpix_core::components::Vitals;
use serpix_core::config::GameConfig;
use serpix_core::types::Point;

use crate::systems::growth;
use crate::world::GameWorld;

/// Eat every item overlapping `head`. Returns the number of items eaten.
///
/// Radius grows as items are eaten, so later items in the same pass use the
/// updated reach. A replaced ordinary item is not re-checked in this pass.
pub fn run<R: Rng + ?Sized>(
    world: &mut GameWorld,
    entity: Entity,
    head: Point,
    rng: &mut R,
    config: &GameConfig,
) -> usize {
    let Ok(mut vitals) = world
        .agents
        .world()
        .get::<&Vitals>(entity)
        .map(|vitals| *vitals)
    else {
        return 0;
    };

    let mut eaten = 0;
    let mut index = 0;
    while index < world.resources.len() {
        let item = &world.resources.items()[index];
        if head.distance_to(&item.position) >= vitals.radius + item.radius {
            index += 1;
            continue;
        }

        let premium = item.is_premium();
        if let Some(item) = world.resources.consume(index, rng, config) {
            vitals.score += item.value;
            vitals.radius = growth::radius_for(vitals.score, vitals.base_radius, config.max_radius);
            eaten += 1;
        }
        if !premium {
            index += 1;
        }
    }

    if eaten > 0 {
        if let Ok(stored) = world.agents.world_mut().query_one_mut::<&mut Vitals>(entity) {
            *stored = vitals;
        }
    }
    eaten
}
