//! Agent registry: identity allocation, creation and removal of agents.
//!
//! Agents are hecs entities. Every agent carries a [`JoinOrder`]; anything
//! that must be order-stable (collision scans, snapshots) walks
//! [`AgentRegistry::ordered`] rather than raw query order, which hecs does
//! not keep stable across despawns.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::Rng;

use serpix_core::components::*;
use serpix_core::config::GameConfig;
use serpix_core::constants::{BASE_RADIUS, BASE_SPEED, SPAWN_INVULNERABLE_TICKS};
use serpix_core::enums::AgentKind;
use serpix_core::types::{AgentId, ConnectionId, Point};

use crate::spawn::find_spawn_point;

/// Owns every agent, live or awaiting removal.
pub struct AgentRegistry {
    world: World,
    next_id: u64,
    next_join: u64,
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            next_id: 1,
            next_join: 0,
        }
    }

    /// Read-only access to the underlying ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Create a human agent bound to `connection_id`.
    pub fn create_human<R: Rng + ?Sized>(
        &mut self,
        name: String,
        color: String,
        connection_id: ConnectionId,
        rng: &mut R,
        config: &GameConfig,
    ) -> (Entity, AgentId) {
        self.create(name, color, AgentKind::Human { connection_id }, rng, config)
    }

    /// Create a bot.
    pub fn create_bot<R: Rng + ?Sized>(
        &mut self,
        name: String,
        color: String,
        rng: &mut R,
        config: &GameConfig,
    ) -> (Entity, AgentId) {
        self.create(name, color, AgentKind::Bot, rng, config)
    }

    fn create<R: Rng + ?Sized>(
        &mut self,
        name: String,
        color: String,
        kind: AgentKind,
        rng: &mut R,
        config: &GameConfig,
    ) -> (Entity, AgentId) {
        let spawn = find_spawn_point(&self.live_heads(None), config.world_size, rng);
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);

        let id = AgentId(self.next_id);
        self.next_id += 1;
        let order = JoinOrder(self.next_join);
        self.next_join += 1;

        let segments: VecDeque<Point> = std::iter::repeat(spawn)
            .take(config.initial_length.max(1))
            .collect();

        let entity = self.world.spawn((
            Identity {
                id,
                name,
                color,
                kind,
            },
            order,
            Body { segments },
            Motion {
                angle,
                target_angle: angle,
                base_speed: BASE_SPEED,
                speed: BASE_SPEED,
                boosting: false,
            },
            Vitals {
                score: 0.0,
                base_radius: BASE_RADIUS,
                radius: BASE_RADIUS,
                alive: true,
                invulnerable_ticks: SPAWN_INVULNERABLE_TICKS,
            },
            PowerBoost::default(),
        ));

        (entity, id)
    }

    /// Remove an agent outright. Returns false if it was already gone.
    pub fn remove(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    /// Look up an agent by its stable id.
    pub fn find(&self, id: AgentId) -> Option<Entity> {
        self.world
            .query::<&Identity>()
            .iter()
            .find(|(_, identity)| identity.id == id)
            .map(|(entity, _)| entity)
    }

    /// Look up the agent bound to a connection, live or dead.
    pub fn find_by_connection(&self, connection_id: ConnectionId) -> Option<Entity> {
        self.world
            .query::<&Identity>()
            .iter()
            .find(|(_, identity)| identity.kind.connection_id() == Some(connection_id))
            .map(|(entity, _)| entity)
    }

    /// Every agent in join order.
    pub fn ordered(&self) -> Vec<Entity> {
        let mut entries: Vec<(JoinOrder, Entity)> = self
            .world
            .query::<&JoinOrder>()
            .iter()
            .map(|(entity, order)| (*order, entity))
            .collect();
        entries.sort_by_key(|(order, _)| *order);
        entries.into_iter().map(|(_, entity)| entity).collect()
    }

    /// Live agents in join order.
    pub fn live_agents(&self) -> Vec<Entity> {
        self.ordered()
            .into_iter()
            .filter(|&entity| self.is_alive(entity))
            .collect()
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.world
            .get::<&Vitals>(entity)
            .map(|vitals| vitals.alive)
            .unwrap_or(false)
    }

    /// Head of an agent's body.
    pub fn head(&self, entity: Entity) -> Option<Point> {
        self.world
            .get::<&Body>(entity)
            .ok()
            .and_then(|body| body.segments.front().copied())
    }

    /// Heads of all live agents, optionally skipping one.
    pub fn live_heads(&self, exclude: Option<Entity>) -> Vec<Point> {
        self.world
            .query::<(&Vitals, &Body)>()
            .iter()
            .filter(|(entity, (vitals, _))| vitals.alive && Some(*entity) != exclude)
            .filter_map(|(_, (_, body))| body.segments.front().copied())
            .collect()
    }

    /// Total agents, including those awaiting removal.
    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
