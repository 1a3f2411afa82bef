//! Headless skirmish runner.
//!
//! Usage: `skirmish-app [config.json] [save-dir]`. Plays a short scripted
//! practice round and logs the outcome.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use glam::{Quat, Vec3};
use tracing::info;
use tracing_subscriber::EnvFilter;

use skirmish_app::host;
use skirmish_app::state::AppState;
use skirmish_core::commands::PlayerCommand;
use skirmish_core::enums::GameMode;
use skirmish_sim::config::SimConfig;
use skirmish_sim::persistence::FileCurrencyStore;

const DEMO_FRAMES: u32 = 300;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::from_json_file(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => SimConfig::default(),
    };
    let save_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("save"));
    info!(seed = config.seed, save_dir = %save_dir.display(), "Starting skirmish");

    let state = AppState::new();
    host::start_simulation(&state, config, Box::new(FileCurrencyStore::new(save_dir)))?;
    host::send_command(
        &state,
        PlayerCommand::SetMode {
            mode: GameMode::Practice,
        },
    )?;

    // Sweep the camera around and fire in bursts.
    for frame in 0..DEMO_FRAMES {
        let yaw = frame as f32 * 0.02;
        let forward = Quat::from_rotation_y(yaw) * Vec3::NEG_Z;
        host::send_pose(&state, Vec3::new(0.0, 1.0, 0.0), forward)?;
        if frame % 6 == 0 {
            host::send_command(&state, PlayerCommand::Fire)?;
        }
        if frame % 120 == 119 {
            host::send_command(&state, PlayerCommand::RequestReload)?;
        }
        thread::sleep(Duration::from_millis(16));
    }

    if let Some(frame) = host::get_frame(&state)? {
        let player = &frame.snapshot.player;
        info!(
            phase = ?frame.snapshot.phase,
            score = player.score,
            ammo = player.ammo,
            coins = player.currency.coins,
            gems = player.currency.gems,
            enemies = frame.snapshot.enemies.len(),
            "Demo finished"
        );
    }

    host::stop_simulation(&state)?;
    Ok(())
}
