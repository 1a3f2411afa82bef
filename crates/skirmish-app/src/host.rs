//! Host command surface: start the loop, forward commands, poll frames.
//!
//! These bridge an input/render driver to the game loop thread via channels.

use anyhow::{anyhow, bail, Context, Result};
use glam::Vec3;

use skirmish_core::commands::PlayerCommand;
use skirmish_sim::config::SimConfig;
use skirmish_sim::persistence::CurrencyStore;

use crate::game_loop;
use crate::state::{AppState, Frame, GameLoopCommand};

/// Start the simulation. Fails if the game loop is already running.
pub fn start_simulation(
    state: &AppState,
    config: SimConfig,
    currency_store: Box<dyn CurrencyStore>,
) -> Result<()> {
    let mut running = state.running.lock().map_err(|e| anyhow!(e.to_string()))?;

    if *running {
        bail!("Simulation already running");
    }

    let cmd_tx = game_loop::spawn_game_loop(config, currency_store, state.latest_frame.clone())
        .context("Failed to spawn game loop thread")?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<()> {
    let tx_lock = state.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| anyhow!("Failed to send command: {}", e)),
        None => bail!("Simulation not started"),
    }
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<()> {
    send(state, GameLoopCommand::Player(command))
}

/// Report the camera pose used by the next tick.
pub fn send_pose(state: &AppState, position: Vec3, forward: Vec3) -> Result<()> {
    send(state, GameLoopCommand::Pose { position, forward })
}

/// Get the latest frame synchronously.
pub fn get_frame(state: &AppState) -> Result<Option<Frame>> {
    let lock = state.latest_frame.lock().map_err(|e| anyhow!(e.to_string()))?;
    Ok(lock.clone())
}

/// Stop the game loop. Stopping a loop that never started is a no-op.
pub fn stop_simulation(state: &AppState) -> Result<()> {
    let mut running = state.running.lock().map_err(|e| anyhow!(e.to_string()))?;
    let mut tx_lock = state.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;

    if let Some(tx) = tx_lock.take() {
        // The loop may already be gone; nothing left to stop then.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    *running = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_sim::persistence::MemoryCurrencyStore;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_frame.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(send_command(&state, PlayerCommand::Fire).is_err());
        assert!(send_pose(&state, Vec3::ZERO, Vec3::NEG_Z).is_err());
        assert!(get_frame(&state).unwrap().is_none());
        stop_simulation(&state).unwrap();
    }

    #[test]
    fn test_start_twice_fails() {
        let state = AppState::new();
        start_simulation(
            &state,
            SimConfig::default(),
            Box::new(MemoryCurrencyStore::default()),
        )
        .unwrap();
        assert!(start_simulation(
            &state,
            SimConfig::default(),
            Box::new(MemoryCurrencyStore::default()),
        )
        .is_err());

        send_command(&state, PlayerCommand::ToggleView).unwrap();
        stop_simulation(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(send_command(&state, PlayerCommand::Fire).is_err());
    }
}
