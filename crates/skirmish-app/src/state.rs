//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::events::SoundEvent;
use skirmish_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to apply before the next tick.
    Player(PlayerCommand),
    /// Latest camera pose from the input collaborator.
    Pose { position: Vec3, forward: Vec3 },
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// What the game loop publishes after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub snapshot: GameStateSnapshot,
    /// Sounds raised since the previous frame.
    pub sound_events: Vec<SoundEvent>,
}

/// Host-side handles to a running game loop.
///
/// `mpsc::Sender` is not Sync, so it sits behind a `Mutex`; the latest frame
/// is shared with the loop thread through an `Arc`.
pub struct AppState {
    /// `None` until `start_simulation` succeeds.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Overwritten by the game loop thread after each tick.
    pub latest_frame: Arc<Mutex<Option<Frame>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_frame: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
