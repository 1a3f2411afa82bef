//! Simulation engine for SKIRMISH.
//!
//! Owns the entity store, runs systems once per frame in a fixed order,
//! and produces GameStateSnapshots for the presentation layer.

pub mod clock;
pub mod config;
pub mod engine;
pub mod magazine;
pub mod persistence;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skirmish_core as core;
