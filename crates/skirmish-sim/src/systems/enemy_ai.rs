//! Enemy AI system: runs the patrol/engage FSM for every enemy.
//!
//! Evaluates in id order so random waypoint draws are reproducible, then
//! writes back motion and spawns enemy bullets.

use glam::Vec3;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::events::SoundEvent;
use skirmish_enemy_ai::fsm::{evaluate, EnemyContext, EngageDecision};

use crate::store::EntityStore;
use crate::world_setup;

pub fn run(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    now_ms: u64,
    dt: f32,
    sound_events: &mut Vec<SoundEvent>,
) {
    let player_position: Vec3 = store.player.position;

    for (id, position, mut enemy) in store.enemies() {
        let ctx = EnemyContext {
            position,
            anchor: enemy.anchor,
            patrol_radius: enemy.patrol_radius,
            waypoint: enemy.waypoint,
            move_speed: enemy.move_speed,
            facing: enemy.facing,
            can_shoot: enemy.can_shoot,
            last_shot_ms: enemy.last_shot_ms,
            player_position,
            now_ms,
            dt,
        };

        let update = evaluate(&ctx, rng);
        enemy.waypoint = update.patrol.waypoint;
        enemy.facing = update.patrol.facing;

        if let EngageDecision::Fire { origin, direction } = update.engage {
            enemy.last_shot_ms = Some(now_ms);
            let bullet_id = store.add_bullet(origin, world_setup::enemy_bullet(direction));
            sound_events.push(SoundEvent::Shot);
            debug!(enemy = %id, bullet = %bullet_id, "Enemy fired at player");
        }

        store.update_enemy(id, update.patrol.position, enemy);
    }
}
