//! Core types and definitions for the Serpix arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input commands, output events, snapshot views, constants
//! and runtime configuration. It has no dependency on any transport or
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
