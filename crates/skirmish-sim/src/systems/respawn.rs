//! Respawn scheduler: deferred enemy respawns after practice-mode kills.
//!
//! Kills enqueue an entry with a due time on the sim clock; the
//! orchestrator drains due entries once per tick, in (due, enqueue) order.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::constants::{RESPAWN_DELAY_MAX_MS, RESPAWN_DELAY_MIN_MS};
use skirmish_core::enums::GameMode;

use crate::config::SimConfig;
use crate::store::EntityStore;
use crate::world_setup;

/// One pending respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduledRespawn {
    /// Sim-clock millisecond at or after which the enemy reappears.
    pub due_ms: u64,
    /// Enqueue order, breaks ties between equal due times.
    pub seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct RespawnQueue {
    entries: Vec<ScheduledRespawn>,
    next_seq: u64,
}

impl RespawnQueue {
    /// Enqueue a respawn `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) -> ScheduledRespawn {
        let entry = ScheduledRespawn {
            due_ms: now_ms.saturating_add(delay_ms),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        let at = self.entries.partition_point(|e| *e <= entry);
        self.entries.insert(at, entry);
        entry
    }

    /// Enqueue with a random delay in the practice respawn window.
    pub fn schedule_random(&mut self, now_ms: u64, rng: &mut ChaCha8Rng) -> ScheduledRespawn {
        let delay = rng.gen_range(RESPAWN_DELAY_MIN_MS..RESPAWN_DELAY_MAX_MS);
        self.schedule(now_ms, delay)
    }

    /// Remove and return every entry due at `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<ScheduledRespawn> {
        let split = self.entries.partition_point(|e| e.due_ms <= now_ms);
        self.entries.drain(..split).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ScheduledRespawn] {
        &self.entries
    }
}

/// Spawn a fresh full-health enemy at a random ring position for every
/// due entry.
pub fn run(
    store: &mut EntityStore,
    queue: &mut RespawnQueue,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    mode: GameMode,
    now_ms: u64,
) {
    for entry in queue.drain_due(now_ms) {
        let position = world_setup::random_ring_position(rng);
        let id = world_setup::spawn_enemy(store, rng, config, mode, position);
        debug!(enemy = %id, due_ms = entry.due_ms, now_ms, "Enemy respawned");
    }
}
