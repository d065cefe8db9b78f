//! Simulation engine: the tick driver.
//!
//! `GameEngine` owns the world aggregate, the seeded RNG and the input queue,
//! applies queued commands at the tick boundary, runs all systems in order,
//! and produces one `GameStateSnapshot` per tick. Completely headless (no
//! transport dependency), enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use serpix_core::commands::InputEvent;
use serpix_core::components::{Identity, Motion, Vitals};
use serpix_core::config::{ConfigError, GameConfig};
use serpix_core::constants::{DEFAULT_PLAYER_NAME, MAX_NAME_LEN};
use serpix_core::events::GameEvent;
use serpix_core::state::GameStateSnapshot;
use serpix_core::types::{ConnectionId, SimTime};

use crate::systems;
use crate::systems::steering::wrap_angle;
use crate::world::GameWorld;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// Everything one tick produces.
#[derive(Debug, Clone)]
pub struct TickOutput {
    /// Tick number this output belongs to.
    pub tick: u64,
    pub snapshot: GameStateSnapshot,
    pub events: Vec<GameEvent>,
}

/// The simulation engine. Sole writer of the world.
pub struct GameEngine {
    world: GameWorld,
    config: GameConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<InputEvent>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Validate the config, then populate food and bots.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.game.validate()?;

        let mut engine = Self {
            world: GameWorld::new(),
            config: config.game,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };
        world_setup::populate(&mut engine.world, &mut engine.rng, &engine.config);
        Ok(engine)
    }

    /// Queue an input event for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: InputEvent) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple input events.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = InputEvent>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return its output.
    pub fn tick(&mut self) -> TickOutput {
        let now = self.time.tick;

        systems::elimination::reclaim(&mut self.world, &mut self.rng, &self.config, now);
        self.process_commands();
        systems::power_event::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            now,
            &mut self.events,
        );
        systems::movement::run(&mut self.world, &mut self.rng, &self.config, now);
        systems::notifications::prune(&mut self.world, now);

        let snapshot = systems::snapshot::build_snapshot(&self.world, &self.config);
        self.time.advance();

        TickOutput {
            tick: now,
            snapshot,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Get the current simulation time (the tick about to run).
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only access to the world aggregate.
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Mutable access to the world aggregate, for scenario setup between ticks.
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single input event. Events naming unknown connections are dropped.
    fn handle_command(&mut self, command: InputEvent) {
        match command {
            InputEvent::Join {
                connection_id,
                name,
            } => self.join(connection_id, name),
            InputEvent::UpdateDirection {
                connection_id,
                angle,
                boosting,
            } => {
                if !angle.is_finite() {
                    return;
                }
                let Some(entity) = self.world.agents.find_by_connection(connection_id) else {
                    return;
                };
                if let Ok((motion, vitals)) = self
                    .world
                    .agents
                    .world_mut()
                    .query_one_mut::<(&mut Motion, &Vitals)>(entity)
                {
                    if vitals.alive {
                        motion.target_angle = wrap_angle(angle);
                        motion.boosting = boosting;
                    }
                }
            }
            InputEvent::Disconnect { connection_id } => {
                if let Some(entity) = self.world.agents.find_by_connection(connection_id) {
                    self.world.agents.remove(entity);
                    info!(connection = %connection_id, "player left");
                }
            }
        }
    }

    /// Create a human for `connection_id`, replacing any agent it already owns.
    fn join(&mut self, connection_id: ConnectionId, name: String) {
        if let Some(previous) = self.world.agents.find_by_connection(connection_id) {
            self.world.agents.remove(previous);
        }

        let name = sanitize_name(&name);
        let (entity, player_id) = self.world.agents.create_human(
            name,
            self.config.human_color.clone(),
            connection_id,
            &mut self.rng,
            &self.config,
        );

        if let Ok(identity) = self.world.agents.world().get::<&Identity>(entity) {
            info!(connection = %connection_id, agent = %player_id, name = %identity.name, "player joined");
        }

        self.events.push(GameEvent::PlayerJoined {
            connection_id,
            player_id,
            world_size: self.config.world_size,
        });
    }
}

/// Trim and cap a display name, defaulting blank names.
pub fn sanitize_name(raw: &str) -> String {
    let trimmed: String = raw.trim().chars().take(MAX_NAME_LEN).collect();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed
    }
}
