//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game mode selected on the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One-hit kills, enemies respawn, enemies never shoot back.
    #[default]
    Practice,
    /// Multi-hit enemies that return fire, no respawn.
    #[serde(rename = "1v1")]
    Duel,
}

/// Camera view mode. Purely presentational but owned by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Fps,
    Tps,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Fps => ViewMode::Tps,
            ViewMode::Tps => ViewMode::Fps,
        }
    }
}

/// Collectible kind; each maps to one currency counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Coin,
    Gem,
}

impl CollectibleKind {
    /// Key used by durable storage for this kind's counter.
    pub fn storage_key(self) -> &'static str {
        match self {
            CollectibleKind::Coin => "coins",
            CollectibleKind::Gem => "gems",
        }
    }
}

/// Which side fired a bullet. A bullet belongs to exactly one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Home screen: no entities, nothing ticks.
    #[default]
    Menu,
    Active,
    /// Every enemy is gone and nothing is scheduled to respawn.
    Cleared,
}
