//! Collision & combat resolver.
//!
//! Runs once per tick after motion, in a fixed order:
//! 1. enemy bullets against the player,
//! 2. player bullets against enemies,
//! 3. the player against collectibles.
//!
//! Within each pass, entities are visited in id (insertion) order and every
//! qualifying hit is applied, not just the first.

use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use skirmish_core::constants::*;
use skirmish_core::enums::BulletOwner;
use skirmish_core::events::SoundEvent;
use skirmish_enemy_ai::profiles::get_profile;

use crate::persistence::CurrencyStore;
use crate::store::EntityStore;
use crate::systems::respawn::RespawnQueue;

/// Mutable collaborators the resolver writes to besides the store.
pub struct CombatOutputs<'a> {
    pub respawns: &'a mut RespawnQueue,
    pub rng: &'a mut ChaCha8Rng,
    pub currency_store: &'a mut dyn CurrencyStore,
    pub sound_events: &'a mut Vec<SoundEvent>,
}

/// Run all three passes. `now_ms` is the sim clock used for respawn due times.
pub fn run(store: &mut EntityStore, out: &mut CombatOutputs<'_>, now_ms: u64) {
    resolve_enemy_bullets(store, out.sound_events);
    resolve_player_bullets(store, out, now_ms);
    resolve_pickups(store, out.currency_store, out.sound_events);
}

/// An enemy bullet within range of the player deals damage and is consumed.
fn resolve_enemy_bullets(store: &mut EntityStore, sound_events: &mut Vec<SoundEvent>) {
    let player_position = store.player.position;

    for (id, position, bullet) in store.bullets() {
        if bullet.owner != BulletOwner::Enemy {
            continue;
        }
        if position.distance(player_position) < BULLET_HIT_RADIUS {
            store.damage_player(ENEMY_BULLET_DAMAGE);
            store.remove_bullet(id);
            sound_events.push(SoundEvent::Hit);
            debug!(bullet = %id, health = store.player.health, "Player hit");
        }
    }
}

/// Player bullets against enemies.
///
/// Practice: every enemy in range dies and gets a respawn scheduled, then
/// the bullet is consumed. 1v1: every enemy in range takes damage and the
/// bullet flies on, so it can hit again on later ticks while in range.
fn resolve_player_bullets(store: &mut EntityStore, out: &mut CombatOutputs<'_>, now_ms: u64) {
    let profile = get_profile(store.player.game_mode);
    let enemies = store.enemies();

    for (bullet_id, bullet_position, bullet) in store.bullets() {
        if bullet.owner != BulletOwner::Player {
            continue;
        }

        let mut killed = false;
        for &(enemy_id, enemy_position, _) in &enemies {
            if !store.contains_enemy(enemy_id) {
                continue;
            }
            if bullet_position.distance(enemy_position) >= BULLET_HIT_RADIUS {
                continue;
            }

            out.sound_events.push(SoundEvent::Hit);

            if profile.one_hit_kill {
                store.remove_enemy(enemy_id);
                store.add_score(SCORE_PRACTICE_KILL);
                killed = true;
                if profile.respawns {
                    let entry = out.respawns.schedule_random(now_ms, out.rng);
                    debug!(enemy = %enemy_id, due_ms = entry.due_ms, "Enemy killed, respawn scheduled");
                }
                continue;
            }

            match store.damage_enemy(enemy_id, PLAYER_BULLET_DAMAGE) {
                Some(remaining) if remaining <= 0 => {
                    store.remove_enemy(enemy_id);
                    store.add_score(SCORE_DUEL_KILL);
                    debug!(enemy = %enemy_id, "Enemy defeated");
                }
                Some(remaining) => {
                    store.add_score(SCORE_DUEL_HIT);
                    debug!(enemy = %enemy_id, health = remaining, "Enemy hit");
                }
                None => {}
            }
        }

        if killed {
            store.remove_bullet(bullet_id);
        }
    }
}

/// Collectibles within pickup range credit currency and mirror the new
/// total to durable storage. A failed write is logged and dropped.
fn resolve_pickups(
    store: &mut EntityStore,
    currency_store: &mut dyn CurrencyStore,
    sound_events: &mut Vec<SoundEvent>,
) {
    let player_position = store.player.position;

    for (id, position, collectible) in store.collectibles() {
        if position.distance(player_position) >= PICKUP_RADIUS {
            continue;
        }

        store.remove_collectible(id);
        let total = store.add_currency(collectible.kind, u64::from(collectible.value));
        if let Err(err) = currency_store.store(collectible.kind, total) {
            warn!(%err, kind = ?collectible.kind, total, "Failed to persist currency");
        }
        sound_events.push(SoundEvent::Success);
        debug!(
            collectible = %id,
            kind = ?collectible.kind,
            value = collectible.value,
            total,
            "Collected"
        );
    }
}
