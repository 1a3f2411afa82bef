//! Kinematic integration system.
//!
//! Bullets move linearly: position += direction * speed * dt, and age by dt.
//! Directions are never renormalized here.

use skirmish_core::components::{Bullet, Position};

use crate::store::EntityStore;

/// Integrate every bullet by `dt` seconds.
pub fn run(store: &mut EntityStore, dt: f32) {
    for (_entity, (pos, bullet)) in store.world_mut().query_mut::<(&mut Position, &mut Bullet)>() {
        pos.0 += bullet.direction * bullet.speed * dt;
        bullet.age_secs += dt;
    }
}
