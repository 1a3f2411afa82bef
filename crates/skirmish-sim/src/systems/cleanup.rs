//! Cleanup system: expires bullets and advances the reload timer.

use tracing::debug;

use skirmish_core::components::{Bullet, Position};
use skirmish_core::constants::BULLET_MAX_RANGE;
use skirmish_core::types::EntityId;

use crate::store::EntityStore;

/// Remove bullets past their lifetime or beyond the world range, then count
/// down any running reload. Uses a pre-allocated buffer to avoid per-tick
/// allocation.
pub fn run(store: &mut EntityStore, dt: f32, despawn_buffer: &mut Vec<EntityId>) {
    despawn_buffer.clear();

    for (_entity, (id, pos, bullet)) in store
        .world()
        .query::<(&EntityId, &Position, &Bullet)>()
        .iter()
    {
        if bullet.age_secs > bullet.lifetime_secs || pos.0.length() > BULLET_MAX_RANGE {
            despawn_buffer.push(*id);
        }
    }

    for id in despawn_buffer.drain(..) {
        store.remove_bullet(id);
    }

    if store.player.magazine.advance(dt) {
        debug!(ammo = store.player.magazine.ammo(), "Reload complete");
    }
}
