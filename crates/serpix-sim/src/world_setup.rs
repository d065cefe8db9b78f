//! Initial arena population and naming helpers.

use rand::Rng;
use tracing::info;

use serpix_core::config::GameConfig;
use serpix_core::constants::BOT_NAME_NUMBER_RANGE;

use crate::world::GameWorld;

/// Fill the food field and create the starting bots (`Bot 1..=N`).
pub fn populate<R: Rng + ?Sized>(world: &mut GameWorld, rng: &mut R, config: &GameConfig) {
    world.resources.populate(config.food_count, rng, config);

    for i in 0..config.bot_count {
        let color = random_color(rng, &config.palette);
        world
            .agents
            .create_bot(format!("Bot {}", i + 1), color, rng, config);
    }

    info!(
        foods = config.food_count,
        bots = config.bot_count,
        world_size = config.world_size,
        "arena populated"
    );
}

/// Name for a bot created to replace an eliminated one.
pub fn replacement_bot_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Bot {}", rng.gen_range(0..BOT_NAME_NUMBER_RANGE))
}

/// Uniform pick from the palette. Falls back to white on an empty palette.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, palette: &[String]) -> String {
    if palette.is_empty() {
        return "#ffffff".to_string();
    }
    palette[rng.gen_range(0..palette.len())].clone()
}
