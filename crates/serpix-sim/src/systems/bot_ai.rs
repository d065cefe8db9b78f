//! Bot AI system: runs the bot decision for one agent.
//!
//! Gathers the bot's surroundings from the world, calls the decision
//! function from serpix-bot-ai, and writes heading and boost intent back.

use hecs::Entity;
use rand::Rng;

use serpix_core::components::{Motion, PowerBoost, Vitals};

use serpix_bot_ai::decision::{evaluate, BotContext};

use crate::systems::steering::wrap_angle;
use crate::world::GameWorld;

/// Update one bot's target heading and boost intent.
pub fn steer<R: Rng + ?Sized>(world: &mut GameWorld, entity: Entity, rng: &mut R) {
    let Some(head) = world.agents.head(entity) else {
        return;
    };

    let (score, power_boost, target_angle) = {
        let ecs = world.agents.world();
        let (Ok(vitals), Ok(power), Ok(motion)) = (
            ecs.get::<&Vitals>(entity),
            ecs.get::<&PowerBoost>(entity),
            ecs.get::<&Motion>(entity),
        ) else {
            return;
        };
        (vitals.score, power.active, motion.target_angle)
    };

    let rival_heads = world.agents.live_heads(Some(entity));
    let foods = world.resources.positions();

    let decision = evaluate(
        &BotContext {
            head,
            target_angle,
            score,
            power_boost,
            rival_heads: &rival_heads,
            foods: &foods,
        },
        rng,
    );

    if let Ok(mut motion) = world.agents.world_mut().get::<&mut Motion>(entity) {
        motion.target_angle = wrap_angle(decision.target_angle);
        motion.boosting = decision.boosting;
    }
}
