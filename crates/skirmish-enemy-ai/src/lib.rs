//! Enemy AI for SKIRMISH.
//!
//! Implements the per-enemy patrol/engage state machine and the
//! mode-driven enemy behavior profiles.

pub mod fsm;
pub mod profiles;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;
