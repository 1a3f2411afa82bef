//! Systems that operate on the entity store each tick.
//!
//! Systems are plain functions over `&mut EntityStore` (or `&EntityStore`
//! for read-only). They do not own state: all state lives in the store,
//! the respawn queue, or the engine.

pub mod cleanup;
pub mod combat;
pub mod enemy_ai;
pub mod movement;
pub mod respawn;
pub mod snapshot;
