//! Per-tick bot decision.
//!
//! Pure functions over plain data: the caller gathers the bot's surroundings
//! into a [`BotContext`] and applies the returned [`BotDecision`].
//! No ECS dependency and no state carried between ticks.

use rand::Rng;

use serpix_core::constants::*;
use serpix_core::types::Point;

/// Behavior selected for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotMode {
    /// Buffed: chase the nearest rival head and always boost.
    Hunting,
    /// Default: chase nearby food or wander.
    Foraging,
}

/// Input to the decision for a single bot.
pub struct BotContext<'a> {
    pub head: Point,
    pub target_angle: f64,
    pub score: f64,
    pub power_boost: bool,
    /// Heads of every other live agent.
    pub rival_heads: &'a [Point],
    /// Positions of every food item.
    pub foods: &'a [Point],
}

/// Output of the decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotDecision {
    pub mode: BotMode,
    pub target_angle: f64,
    pub boosting: bool,
}

impl BotMode {
    pub fn select(power_boost: bool) -> Self {
        if power_boost {
            BotMode::Hunting
        } else {
            BotMode::Foraging
        }
    }
}

/// Decide heading and boost intent for one bot.
pub fn evaluate<R: Rng + ?Sized>(ctx: &BotContext<'_>, rng: &mut R) -> BotDecision {
    let mode = BotMode::select(ctx.power_boost);

    let target_angle = match mode {
        BotMode::Hunting => hunt(ctx),
        BotMode::Foraging => forage(ctx, rng),
    };

    let roll: f64 = rng.gen();
    let boosting = ctx.power_boost || (roll < BOT_BOOST_CHANCE && ctx.score > BOT_BOOST_MIN_SCORE);

    BotDecision {
        mode,
        target_angle,
        boosting,
    }
}

fn hunt(ctx: &BotContext<'_>) -> f64 {
    match nearest(&ctx.head, ctx.rival_heads, f64::INFINITY) {
        Some(prey) => ctx.head.angle_to(&prey),
        None => ctx.target_angle,
    }
}

fn forage<R: Rng + ?Sized>(ctx: &BotContext<'_>, rng: &mut R) -> f64 {
    match nearest(&ctx.head, ctx.foods, BOT_FOOD_SEARCH_RADIUS) {
        Some(food) => ctx.head.angle_to(&food),
        None => {
            let drift = (rng.gen::<f64>() - 0.5) * BOT_WANDER_JITTER;
            ctx.target_angle + drift
        }
    }
}

/// Closest candidate strictly nearer than `max_distance`. Linear scan; ties keep the first.
pub fn nearest(from: &Point, candidates: &[Point], max_distance: f64) -> Option<Point> {
    let mut best = None;
    let mut best_distance = max_distance;
    for candidate in candidates {
        let d = from.distance_to(candidate);
        if d < best_distance {
            best_distance = d;
            best = Some(*candidate);
        }
    }
    best
}
