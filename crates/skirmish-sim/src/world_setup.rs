//! Entity spawn factories for populating the simulation world.
//!
//! Creates enemies, collectibles and bullets with the component values
//! their game mode calls for. Spawn positions may overlap; there is no
//! collision avoidance at spawn time.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::components::{Bullet, Collectible, Enemy};
use skirmish_core::constants::*;
use skirmish_core::enums::{BulletOwner, CollectibleKind, GameMode};
use skirmish_core::types::EntityId;
use skirmish_enemy_ai::fsm::random_waypoint;
use skirmish_enemy_ai::profiles::{get_profile, roll_patrol_traits};

use crate::config::SimConfig;
use crate::store::EntityStore;

/// Spawn the initial population for `mode`: enemies, then coins, then gems.
pub fn populate(store: &mut EntityStore, rng: &mut ChaCha8Rng, config: &SimConfig, mode: GameMode) {
    let enemy_count = match mode {
        GameMode::Practice => config.practice_enemy_count,
        GameMode::Duel => config.duel_enemy_count,
    };
    for _ in 0..enemy_count {
        let position = random_ring_position(rng);
        spawn_enemy(store, rng, config, mode, position);
    }
    for _ in 0..config.coin_count {
        spawn_collectible(store, rng, CollectibleKind::Coin, config.coin_value);
    }
    for _ in 0..config.gem_count {
        spawn_collectible(store, rng, CollectibleKind::Gem, config.gem_value);
    }
    debug!(
        ?mode,
        enemies = enemy_count,
        coins = config.coin_count,
        gems = config.gem_count,
        "Populated world"
    );
}

/// Uniformly random bearing at 10..40 units from the origin, fixed height.
pub fn random_ring_position(rng: &mut ChaCha8Rng) -> Vec3 {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let distance: f32 = rng.gen_range(SPAWN_RING_MIN..SPAWN_RING_MAX);
    Vec3::new(angle.cos() * distance, SPAWN_HEIGHT, angle.sin() * distance)
}

/// Build an enemy at full health for `mode`, anchored at `position`.
pub fn make_enemy(
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    mode: GameMode,
    position: Vec3,
) -> Enemy {
    let profile = get_profile(mode);
    let traits = roll_patrol_traits(rng);
    let health = match mode {
        GameMode::Practice => config.practice_enemy_health,
        GameMode::Duel => config.duel_enemy_health,
    };
    Enemy {
        health,
        max_health: health,
        anchor: position,
        patrol_radius: traits.patrol_radius,
        waypoint: random_waypoint(position, traits.patrol_radius, rng),
        move_speed: traits.move_speed,
        facing: Vec3::NEG_Z,
        can_shoot: profile.can_shoot,
        last_shot_ms: None,
    }
}

pub fn spawn_enemy(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    mode: GameMode,
    position: Vec3,
) -> EntityId {
    let enemy = make_enemy(rng, config, mode, position);
    store.add_enemy(position, enemy)
}

pub fn spawn_collectible(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    kind: CollectibleKind,
    value: u32,
) -> EntityId {
    let position = random_ring_position(rng);
    store.add_collectible(position, Collectible { kind, value })
}

/// A player bullet leaving the camera along `forward`.
pub fn player_bullet(forward: Vec3) -> Bullet {
    Bullet {
        direction: forward.try_normalize().unwrap_or(Vec3::NEG_Z),
        speed: PLAYER_BULLET_SPEED,
        age_secs: 0.0,
        lifetime_secs: PLAYER_BULLET_LIFETIME_SECS,
        owner: BulletOwner::Player,
    }
}

/// An enemy bullet along an already-normalized `direction`.
pub fn enemy_bullet(direction: Vec3) -> Bullet {
    Bullet {
        direction,
        speed: ENEMY_BULLET_SPEED,
        age_secs: 0.0,
        lifetime_secs: ENEMY_BULLET_LIFETIME_SECS,
        owner: BulletOwner::Enemy,
    }
}
