//! Game state snapshot: the complete visible state handed to the presentation
//! layer after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Currency, EntityId, SimTime};

/// Complete game state, refreshed every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub collectibles: Vec<CollectibleView>,
    /// Respawns waiting in the scheduler queue.
    pub pending_respawns: u32,
}

/// Player scalars for the HUD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub forward: Vec3,
    pub health: i32,
    pub max_health: i32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub is_reloading: bool,
    /// Seconds until the running reload completes, 0 when ready.
    pub reload_remaining_secs: f32,
    pub score: u64,
    pub currency: Currency,
    pub game_mode: GameMode,
    pub view_mode: ViewMode,
    pub selected_weapon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub id: EntityId,
    pub position: Vec3,
    pub direction: Vec3,
    pub owner: BulletOwner,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub position: Vec3,
    pub facing: Vec3,
    pub health: i32,
    pub max_health: i32,
    pub can_shoot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleView {
    pub id: EntityId,
    pub position: Vec3,
    pub kind: CollectibleKind,
    pub value: u32,
}
