//! Simulation engine for Serpix.
//!
//! Owns the hecs agent registry, the food field and the kill notifications,
//! runs all systems at a fixed tick rate, and produces `GameStateSnapshot`s
//! for observers.

pub mod engine;
pub mod registry;
pub mod resources;
pub mod spawn;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig, TickOutput};
pub use serpix_core as core;
