//! Process-start configuration supplied by the surrounding layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Invalid configuration. Raised once at engine construction, never mid-tick.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tick_rate must be positive")]
    ZeroTickRate,
    #[error("world_size {0} leaves no room inside the spawn margin")]
    WorldTooSmall(f64),
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("initial_length must be at least 1")]
    ZeroInitialLength,
    #[error("max_radius {max} is below the base radius {base}")]
    MaxRadiusBelowBase { max: f64, base: f64 },
    #[error("power_event_duration_ms must be positive")]
    ZeroPowerDuration,
}

/// Arena parameters fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_size: f64,
    pub initial_length: usize,
    pub food_count: usize,
    pub bot_count: usize,
    pub palette: Vec<String>,
    pub human_color: String,
    pub max_radius: f64,
    pub power_event_interval_ms: u64,
    pub power_event_duration_ms: u64,
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_size: DEFAULT_WORLD_SIZE,
            initial_length: DEFAULT_INITIAL_LENGTH,
            food_count: DEFAULT_FOOD_COUNT,
            bot_count: DEFAULT_BOT_COUNT,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            human_color: DEFAULT_HUMAN_COLOR.to_string(),
            max_radius: DEFAULT_MAX_RADIUS,
            power_event_interval_ms: DEFAULT_POWER_EVENT_INTERVAL_MS,
            power_event_duration_ms: DEFAULT_POWER_EVENT_DURATION_MS,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if !self.world_size.is_finite() || self.world_size <= SPAWN_MARGIN * 2.0 {
            return Err(ConfigError::WorldTooSmall(self.world_size));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.initial_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }
        if self.max_radius < BASE_RADIUS {
            return Err(ConfigError::MaxRadiusBelowBase {
                max: self.max_radius,
                base: BASE_RADIUS,
            });
        }
        if self.power_event_duration_ms == 0 {
            return Err(ConfigError::ZeroPowerDuration);
        }
        Ok(())
    }

    /// Convert a millisecond duration into whole ticks (rounded, at least 1).
    ///
    /// Saturates for durations too long to represent, which then never elapse.
    pub fn ms_to_ticks(&self, ms: u64) -> u64 {
        let rate = self.tick_rate.max(1) as u64;
        (ms.saturating_mul(rate).saturating_add(500) / 1000).max(1)
    }

    /// Milliseconds of simulation time at `tick`.
    pub fn tick_to_ms(&self, tick: u64) -> u64 {
        crate::types::SimTime::ticks_to_ms(tick, self.tick_rate)
    }

    pub fn elimination_delay_ticks(&self) -> u64 {
        self.ms_to_ticks(ELIMINATION_DELAY_MS)
    }

    pub fn notification_duration_ticks(&self) -> u64 {
        self.ms_to_ticks(KILL_NOTIFICATION_DURATION_MS)
    }

    pub fn power_event_interval_ticks(&self) -> u64 {
        self.ms_to_ticks(self.power_event_interval_ms)
    }

    pub fn power_event_duration_ticks(&self) -> u64 {
        self.ms_to_ticks(self.power_event_duration_ms)
    }
}
