//! Fundamental identifier, time and currency types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::CollectibleKind;

/// Stable entity identifier. Allocated from a monotonically increasing
/// counter, so ordering by id is ordering by insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }

    /// Elapsed simulation time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        (self.elapsed_secs * 1000.0).round() as u64
    }
}

/// Persistent currency counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub coins: u64,
    pub gems: u64,
}

impl Currency {
    pub fn get(&self, kind: CollectibleKind) -> u64 {
        match kind {
            CollectibleKind::Coin => self.coins,
            CollectibleKind::Gem => self.gems,
        }
    }

    /// Add `amount` to the counter for `kind`, returning the new total.
    pub fn add(&mut self, kind: CollectibleKind, amount: u64) -> u64 {
        let counter = match kind {
            CollectibleKind::Coin => &mut self.coins,
            CollectibleKind::Gem => &mut self.gems,
        };
        *counter = counter.saturating_add(amount);
        *counter
    }
}
