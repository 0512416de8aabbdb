//! Simulation engine for the redoubt tower-defense core.
//!
//! Owns the hecs ECS world, advances it by caller-supplied time deltas in
//! a fixed system order, and produces `GameStateSnapshot`s for the host.
//! Completely headless: no rendering, input, or scene concerns.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use redoubt_core as core;
