//! Simulation constants and tuning parameters.
//!
//! Values the surrounding layer may override at process start live in
//! [`crate::config::GameConfig`]; the `DEFAULT_*` entries here are its defaults.

// --- Process-start defaults ---

/// Default simulation tick rate (Hz).
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Default side length of the square arena (world units).
pub const DEFAULT_WORLD_SIZE: f64 = 8000.0;

/// Default number of body segments a fresh agent spawns with.
pub const DEFAULT_INITIAL_LENGTH: usize = 20;

/// Default number of ordinary food items kept on the field.
pub const DEFAULT_FOOD_COUNT: usize = 1200;

/// Default number of bots kept in the arena.
pub const DEFAULT_BOT_COUNT: usize = 25;

/// Default agent radius cap.
pub const DEFAULT_MAX_RADIUS: f64 = 50.0;

/// Default interval between rampage events (milliseconds).
pub const DEFAULT_POWER_EVENT_INTERVAL_MS: u64 = 120_000;

/// Default rampage buff duration (milliseconds).
pub const DEFAULT_POWER_EVENT_DURATION_MS: u64 = 5_000;

/// Default palette for bots and food.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#ef4444", "#f59e0b", "#10b981", "#3b82f6", "#8b5cf6", "#ec4899", "#ffffff",
];

/// Color given to every human agent.
pub const DEFAULT_HUMAN_COLOR: &str = "#10b981";

// --- Growth ---

/// Radius of a zero-score agent.
pub const BASE_RADIUS: f64 = 12.0;

/// Radius gained per point of score.
pub const RADIUS_PER_SCORE: f64 = 0.005;

/// Body segments gained per point of score.
pub const LENGTH_PER_SCORE: f64 = 0.5;

// --- Steering ---

/// Speed of a non-boosting agent (world units per tick).
pub const BASE_SPEED: f64 = 2.0;

/// Fraction of the remaining heading error closed each tick.
pub const TURN_RATE: f64 = 0.06;

/// Speed multiplier while boosting.
pub const BOOST_SPEED_MULTIPLIER: f64 = 2.0;

/// Boosting requires a score strictly above this. Boost decay never goes below it.
pub const BOOST_MIN_SCORE: f64 = 20.0;

/// Score spent per boosting tick (waived while buffed).
pub const BOOST_SCORE_COST: f64 = 0.2;

// --- Collision ---

/// Fraction of the other agent's radius that counts toward a body hit.
pub const COLLISION_RADIUS_FACTOR: f64 = 0.7;

/// Fraction of the loser's score awarded to the winner (rounded up).
pub const KILL_REWARD_FRACTION: f64 = 0.1;

// --- Food ---

/// Ordinary food radius range `[MIN, MAX)`.
pub const FOOD_RADIUS_MIN: f64 = 3.0;
pub const FOOD_RADIUS_MAX: f64 = 7.0;

/// Score value of an ordinary item.
pub const FOOD_VALUE: f64 = 1.0;

/// Radius of a premium item.
pub const PREMIUM_FOOD_RADIUS: f64 = 8.0;

/// Score value of a premium item.
pub const PREMIUM_FOOD_VALUE: f64 = 10.0;

/// Every Nth body segment of an eliminated agent becomes premium food.
pub const SCATTER_STRIDE: usize = 4;

// --- Spawning ---

/// Minimum distance between a spawn point and any arena edge.
pub const SPAWN_MARGIN: f64 = 300.0;

/// Candidate points sampled when placing a new agent.
pub const SPAWN_ATTEMPTS: usize = 15;

/// Post-spawn grace window (ticks).
pub const SPAWN_INVULNERABLE_TICKS: u32 = 60;

// --- Elimination ---

/// Delay between death and removal from the registry (milliseconds).
pub const ELIMINATION_DELAY_MS: u64 = 2_000;

/// Display window of a kill notification (milliseconds).
pub const KILL_NOTIFICATION_DURATION_MS: u64 = 2_000;

// --- Power event ---

/// Probability that the rampage prefers a human when one is alive.
pub const POWER_EVENT_HUMAN_BIAS: f64 = 0.3;

// --- Bot AI ---

/// Bots only chase food closer than this.
pub const BOT_FOOD_SEARCH_RADIUS: f64 = 400.0;

/// Peak-to-peak random heading drift per tick when no food is in range.
pub const BOT_WANDER_JITTER: f64 = 0.1;

/// Per-tick probability that a well-fed bot boosts.
pub const BOT_BOOST_CHANCE: f64 = 0.05;

/// Bots only boost voluntarily above this score.
pub const BOT_BOOST_MIN_SCORE: f64 = 50.0;

/// Exclusive upper bound of the number in a replacement bot's name.
pub const BOT_NAME_NUMBER_RANGE: u32 = 1000;

// --- Snapshot ---

/// Maximum body segments per agent sent in a snapshot.
pub const SNAPSHOT_SEGMENT_CAP: usize = 100;

// --- Boundary ---

/// Longest accepted display name (characters).
pub const MAX_NAME_LEN: usize = 16;

/// Name given to a human who joins without one.
pub const DEFAULT_PLAYER_NAME: &str = "Player";
