//! Game loop thread: runs the simulation engine at the fixed tick rate and
//! publishes a frame after every tick.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via `mpsc` channel and are applied between ticks only,
//! so a reset can never tear a tick in half.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use glam::Vec3;
use tracing::{debug, info};

use skirmish_core::constants::{DT, TICK_RATE};
use skirmish_sim::clock::SystemClock;
use skirmish_sim::config::SimConfig;
use skirmish_sim::persistence::CurrencyStore;
use skirmish_sim::SimulationEngine;

use crate::state::{Frame, GameLoopCommand};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: SimConfig,
    currency_store: Box<dyn CurrencyStore>,
    latest_frame: Arc<Mutex<Option<Frame>>>,
) -> io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            let engine =
                SimulationEngine::new(config, Box::new(SystemClock::new()), currency_store);
            run_game_loop(engine, cmd_rx, &latest_frame);
        })?;

    Ok(cmd_tx)
}

/// Tracks the last camera pose between frames.
#[derive(Debug, Clone, Copy)]
struct Pose {
    position: Vec3,
    forward: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
        }
    }
}

/// Apply every pending command. Returns false when the loop should stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    pose: &mut Pose,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => {
                debug!(?cmd, "Player command");
                engine.handle_command(cmd);
            }
            Ok(GameLoopCommand::Pose { position, forward }) => {
                *pose = Pose { position, forward };
            }
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// Advance one tick and package the result.
fn step(engine: &mut SimulationEngine, pose: Pose) -> Frame {
    engine.tick(DT, pose.position, pose.forward);
    Frame {
        snapshot: engine.snapshot(),
        sound_events: engine.take_sound_events(),
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_frame: &Mutex<Option<Frame>>,
) {
    let mut pose = Pose::default();
    let mut next_tick_time = Instant::now();
    info!(tick_rate = TICK_RATE, "Game loop started");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &mut pose, &cmd_rx) {
            break;
        }

        // 2. Advance one tick
        let frame = step(&mut engine, pose);

        // 3. Publish for polling
        if let Ok(mut lock) = latest_frame.lock() {
            *lock = Some(frame);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, skip ahead rather than spiral
            next_tick_time = now;
        }
    }

    info!(tick = engine.time().tick, "Game loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::commands::PlayerCommand;
    use skirmish_core::enums::{GameMode, GamePhase};
    use skirmish_core::events::SoundEvent;
    use skirmish_sim::clock::ManualClock;
    use skirmish_sim::persistence::MemoryCurrencyStore;

    fn test_engine() -> SimulationEngine {
        SimulationEngine::new(
            SimConfig::default(),
            Box::new(ManualClock::new(0)),
            Box::new(MemoryCurrencyStore::default()),
        )
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::Fire)).unwrap();
        tx.send(GameLoopCommand::Pose {
            position: Vec3::ONE,
            forward: Vec3::X,
        })
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], GameLoopCommand::Player(PlayerCommand::Fire));
        assert!(matches!(commands[1], GameLoopCommand::Pose { .. }));
        assert_eq!(commands[2], GameLoopCommand::Shutdown);
    }

    #[test]
    fn test_drain_applies_commands_in_order() {
        let mut engine = test_engine();
        let mut pose = Pose::default();
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::SetMode {
            mode: GameMode::Practice,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Pose {
            position: Vec3::new(1.0, 2.0, 3.0),
            forward: Vec3::X,
        })
        .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Fire)).unwrap();

        assert!(drain_commands(&mut engine, &mut pose, &rx));
        assert_eq!(engine.phase(), GamePhase::Active);
        assert_eq!(pose.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(engine.store().bullet_count(), 1);

        let frame = step(&mut engine, pose);
        assert_eq!(frame.snapshot.player.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(frame.snapshot.time.tick, 1);
        assert!(frame.sound_events.contains(&SoundEvent::Shot));

        let frame = step(&mut engine, pose);
        assert!(frame.sound_events.is_empty(), "Sounds are drained per frame");
    }

    #[test]
    fn test_drain_stops_on_shutdown_and_disconnect() {
        let mut engine = test_engine();
        let mut pose = Pose::default();

        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &mut pose, &rx));

        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        drop(tx);
        assert!(!drain_commands(&mut engine, &mut pose, &rx));
    }

    #[test]
    fn test_reset_between_ticks_is_atomic() {
        let mut engine = test_engine();
        let mut pose = Pose::default();
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::SetMode {
            mode: GameMode::Practice,
        }))
        .unwrap();
        drain_commands(&mut engine, &mut pose, &rx);
        for _ in 0..10 {
            step(&mut engine, pose);
        }

        tx.send(GameLoopCommand::Player(PlayerCommand::Reset)).unwrap();
        drain_commands(&mut engine, &mut pose, &rx);
        let frame = step(&mut engine, pose);

        assert_eq!(frame.snapshot.phase, GamePhase::Menu);
        assert!(frame.snapshot.enemies.is_empty());
        assert!(frame.snapshot.collectibles.is_empty());
        assert!(frame.snapshot.bullets.is_empty());
    }

    #[test]
    fn test_frame_serialization_under_3ms() {
        let mut engine = test_engine();
        engine.set_mode(GameMode::Practice);
        for _ in 0..50 {
            engine.fire();
            step(&mut engine, Pose::default());
        }

        let frame = step(&mut engine, Pose::default());
        let start = Instant::now();
        let json = serde_json::to_string(&frame).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Frame serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_spawned_loop_publishes_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(
            SimConfig::default(),
            Box::new(MemoryCurrencyStore::default()),
            latest.clone(),
        )
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        while latest.lock().unwrap().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(latest.lock().unwrap().is_some());

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
