//! Ammo/reload state machine.
//!
//! `Ready --fire--> Ready` while ammo remains, `Ready --reload--> Reloading`
//! when the magazine is not full, `Reloading --timer--> Ready` with a full
//! magazine. Every other request is a silent no-op.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReloadState {
    Ready,
    Reloading { remaining_secs: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Magazine {
    ammo: u32,
    max_ammo: u32,
    reload_secs: f32,
    state: ReloadState,
}

impl Magazine {
    /// A full magazine.
    pub fn new(max_ammo: u32, reload_secs: f32) -> Self {
        Self {
            ammo: max_ammo,
            max_ammo,
            reload_secs,
            state: ReloadState::Ready,
        }
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo
    }

    pub fn state(&self) -> ReloadState {
        self.state
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self.state, ReloadState::Reloading { .. })
    }

    pub fn reload_remaining_secs(&self) -> f32 {
        match self.state {
            ReloadState::Ready => 0.0,
            ReloadState::Reloading { remaining_secs } => remaining_secs.max(0.0),
        }
    }

    /// Spend one round. Returns false (and changes nothing) when empty or
    /// reloading.
    pub fn try_fire(&mut self) -> bool {
        if self.is_reloading() || self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    /// Start a reload. Returns false when already full or already reloading.
    pub fn begin_reload(&mut self) -> bool {
        if self.is_reloading() || self.ammo >= self.max_ammo {
            return false;
        }
        self.state = ReloadState::Reloading {
            remaining_secs: self.reload_secs,
        };
        true
    }

    /// Count down a running reload. Returns true on the tick it completes.
    pub fn advance(&mut self, dt: f32) -> bool {
        let ReloadState::Reloading { remaining_secs } = self.state else {
            return false;
        };
        let remaining_secs = remaining_secs - dt;
        if remaining_secs <= 0.0 {
            self.ammo = self.max_ammo;
            self.state = ReloadState::Ready;
            return true;
        }
        self.state = ReloadState::Reloading { remaining_secs };
        false
    }
}
