//! Headless host for the skirmish simulation.
//!
//! Runs the engine on its own thread at a fixed frame rate and exposes a
//! small command/poll surface to whatever drives input and rendering.

pub mod game_loop;
pub mod host;
pub mod state;

pub use skirmish_core as core;
