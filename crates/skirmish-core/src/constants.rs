//! Simulation constants and tuning parameters.
//!
//! Distances are world units, times are seconds unless suffixed `_MS`.

/// Default frame rate for the headless host (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the default rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Player ---

/// Default maximum player health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Default magazine size.
pub const PLAYER_MAX_AMMO: u32 = 30;

/// Default reload duration.
pub const RELOAD_SECS: f32 = 2.0;

/// Player bullet muzzle speed (units/s).
pub const PLAYER_BULLET_SPEED: f32 = 50.0;

/// Player bullet lifetime.
pub const PLAYER_BULLET_LIFETIME_SECS: f32 = 3.0;

/// Weapon selected when none has been chosen.
pub const DEFAULT_WEAPON: &str = "rifle";

// --- Enemy fire ---

/// Enemy bullet speed (units/s).
pub const ENEMY_BULLET_SPEED: f32 = 20.0;

/// Enemy bullet lifetime.
pub const ENEMY_BULLET_LIFETIME_SECS: f32 = 3.0;

/// Enemy bullets leave from chest height above the enemy position.
pub const ENEMY_MUZZLE_HEIGHT: f32 = 1.0;

/// Enemies engage the player inside this range.
pub const ENEMY_ENGAGE_RANGE: f32 = 15.0;

/// Minimum milliseconds between two shots by the same enemy.
pub const ENEMY_FIRE_COOLDOWN_MS: u64 = 2000;

// --- Patrol ---

/// An enemy closer than this to its waypoint picks a new one.
pub const WAYPOINT_REACHED_RADIUS: f32 = 1.0;

/// Patrol speed range (units/s), drawn per enemy.
pub const ENEMY_MOVE_SPEED_MIN: f32 = 0.5;
pub const ENEMY_MOVE_SPEED_MAX: f32 = 1.0;

/// Patrol radius range, drawn per enemy.
pub const PATROL_RADIUS_MIN: f32 = 3.0;
pub const PATROL_RADIUS_MAX: f32 = 7.0;

// --- Collision ---

/// Bullet hit radius against the player and enemies.
pub const BULLET_HIT_RADIUS: f32 = 1.5;

/// Player pickup radius for collectibles.
pub const PICKUP_RADIUS: f32 = 2.0;

/// Damage dealt by one enemy bullet to the player.
pub const ENEMY_BULLET_DAMAGE: i32 = 5;

/// Damage dealt by one player bullet to a 1v1 enemy.
pub const PLAYER_BULLET_DAMAGE: i32 = 5;

// --- Score ---

/// Score for a practice-mode kill.
pub const SCORE_PRACTICE_KILL: u64 = 15;

/// Score for a non-lethal 1v1 hit.
pub const SCORE_DUEL_HIT: u64 = 5;

/// Score for defeating a 1v1 enemy.
pub const SCORE_DUEL_KILL: u64 = 100;

// --- Spawning ---

/// Spawn ring inner radius around the origin.
pub const SPAWN_RING_MIN: f32 = 10.0;

/// Spawn ring outer radius around the origin.
pub const SPAWN_RING_MAX: f32 = 40.0;

/// Fixed spawn height.
pub const SPAWN_HEIGHT: f32 = 1.0;

/// Practice respawn delay window in milliseconds (min inclusive, max exclusive).
pub const RESPAWN_DELAY_MIN_MS: u64 = 1000;
pub const RESPAWN_DELAY_MAX_MS: u64 = 3000;

// --- World bounds ---

/// Bullets farther than this from the origin are removed.
pub const BULLET_MAX_RANGE: f32 = 100.0;
