//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{BulletOwner, CollectibleKind};

/// World-space position of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// A projectile in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Unit vector, normalized once at creation.
    pub direction: Vec3,
    /// Units per second, always positive.
    pub speed: f32,
    /// Seconds since the bullet was fired.
    pub age_secs: f32,
    /// Seconds after which the bullet expires.
    pub lifetime_secs: f32,
    pub owner: BulletOwner,
}

/// An enemy soldier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub health: i32,
    pub max_health: i32,
    /// Patrol anchor: the spawn position, center of the patrol circle.
    pub anchor: Vec3,
    pub patrol_radius: f32,
    /// Current patrol waypoint, always on the anchor circle.
    pub waypoint: Vec3,
    pub move_speed: f32,
    /// Unit XZ vector the enemy faces.
    pub facing: Vec3,
    /// Only true in 1v1 mode.
    pub can_shoot: bool,
    /// Clock milliseconds of the last shot, `None` if it never fired.
    pub last_shot_ms: Option<u64>,
}

/// A pickup that credits currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectible {
    pub kind: CollectibleKind,
    /// Always positive.
    pub value: u32,
}
