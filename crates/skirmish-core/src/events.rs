//! Events emitted by the simulation for audio feedback.
//!
//! Fire-and-forget: the engine never waits for a consumer.

use serde::{Deserialize, Serialize};

/// Sound cues for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SoundEvent {
    /// A weapon was fired (player or enemy).
    Shot,
    /// A bullet hit the player or an enemy.
    Hit,
    /// A collectible was picked up.
    Success,
}
