//! Bot AI for Serpix.
//!
//! Implements the per-tick steering decision for autonomous agents:
//! hunting while buffed, foraging otherwise.

pub mod decision;

pub use serpix_core as core;

#[cfg(test)]
mod tests;
