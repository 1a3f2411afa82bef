//! Mode-specific enemy behavior profiles.
//!
//! Consolidates what a game mode means for enemy spawning, combat and
//! patrol parameters.

use rand::Rng;

use skirmish_core::constants::*;
use skirmish_core::enums::GameMode;

/// Behavior profile for enemies in a game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyProfile {
    /// Whether enemies return fire.
    pub can_shoot: bool,
    /// Whether a player bullet kills outright instead of dealing damage.
    pub one_hit_kill: bool,
    /// Whether killed enemies are replaced after a delay.
    pub respawns: bool,
}

/// Get the enemy profile for a game mode.
pub fn get_profile(mode: GameMode) -> EnemyProfile {
    match mode {
        GameMode::Practice => EnemyProfile {
            can_shoot: false,
            one_hit_kill: true,
            respawns: true,
        },
        GameMode::Duel => EnemyProfile {
            can_shoot: true,
            one_hit_kill: false,
            respawns: false,
        },
    }
}

/// Per-enemy patrol parameters, drawn once at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolTraits {
    pub move_speed: f32,
    pub patrol_radius: f32,
}

/// Draw patrol speed and radius for a freshly spawned enemy.
pub fn roll_patrol_traits(rng: &mut impl Rng) -> PatrolTraits {
    PatrolTraits {
        move_speed: rng.gen_range(ENEMY_MOVE_SPEED_MIN..ENEMY_MOVE_SPEED_MAX),
        patrol_radius: rng.gen_range(PATROL_RADIUS_MIN..PATROL_RADIUS_MAX),
    }
}
