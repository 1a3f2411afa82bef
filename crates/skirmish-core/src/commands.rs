//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are instantaneous: the engine applies them on receipt and
//! invalid ones are dropped silently.

use serde::{Deserialize, Serialize};

use crate::enums::GameMode;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire the selected weapon from the last known player pose.
    Fire,
    /// Begin a reload if the magazine is not full and no reload is running.
    RequestReload,
    /// Switch between first- and third-person view.
    ToggleView,
    /// Enter a game mode and spawn its initial population.
    SetMode { mode: GameMode },
    /// Select a weapon by name.
    SetWeapon { name: String },
    /// Leave the game: clear every collection and return to the menu.
    Reset,
}
