//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity store and every piece of sim state,
//! applies player commands, runs all systems once per frame, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.
//!
//! Commands and ticks both take `&mut self`, so a command (reset included)
//! lands either before a tick starts or after it finishes, never inside one.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::enums::{CollectibleKind, GameMode, GamePhase};
use skirmish_core::events::SoundEvent;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::types::{Currency, EntityId, SimTime};

use crate::clock::{Clock, SystemClock};
use crate::config::SimConfig;
use crate::persistence::{CurrencyStore, MemoryCurrencyStore};
use crate::store::{EntityStore, PlayerDefaults};
use crate::systems;
use crate::systems::combat::CombatOutputs;
use crate::systems::respawn::RespawnQueue;
use crate::world_setup;

/// The simulation engine. Owns the entity store and all sim state.
pub struct SimulationEngine {
    store: EntityStore,
    respawns: RespawnQueue,
    time: SimTime,
    phase: GamePhase,
    config: SimConfig,
    rng: ChaCha8Rng,
    clock: Box<dyn Clock>,
    currency_store: Box<dyn CurrencyStore>,
    sound_events: Vec<SoundEvent>,
    despawn_buffer: Vec<EntityId>,
}

impl SimulationEngine {
    /// Create an engine with explicit clock and currency storage.
    ///
    /// An invalid config is replaced by the defaults. Each currency counter
    /// is loaded once here; a counter that fails to load starts from zero.
    pub fn new(
        config: SimConfig,
        clock: Box<dyn Clock>,
        mut currency_store: Box<dyn CurrencyStore>,
    ) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(%err, "Rejected config, using defaults");
                SimConfig::default()
            }
        };
        let currency = load_currency(currency_store.as_mut());
        let defaults = PlayerDefaults {
            max_health: config.max_health,
            max_ammo: config.max_ammo,
            reload_secs: config.reload_secs,
        };

        Self {
            store: EntityStore::new(defaults, currency),
            respawns: RespawnQueue::default(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            clock,
            currency_store,
            sound_events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Engine on the wall clock with throwaway in-memory currency.
    pub fn headless(config: SimConfig) -> Self {
        Self::new(
            config,
            Box::new(SystemClock::new()),
            Box::new(MemoryCurrencyStore::default()),
        )
    }

    // --- Commands ---

    /// Apply one player command immediately.
    pub fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Fire => self.fire(),
            PlayerCommand::RequestReload => self.request_reload(),
            PlayerCommand::ToggleView => self.toggle_view(),
            PlayerCommand::SetMode { mode } => self.set_mode(mode),
            PlayerCommand::SetWeapon { name } => self.set_weapon(&name),
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Fire from the last known player pose. No-op outside a game, while
    /// reloading, or with an empty magazine.
    pub fn fire(&mut self) {
        if self.phase == GamePhase::Menu || !self.store.reduce_ammo() {
            return;
        }
        let player = &self.store.player;
        let (origin, forward) = (player.position, player.forward);
        let id = self
            .store
            .add_bullet(origin, world_setup::player_bullet(forward));
        self.sound_events.push(SoundEvent::Shot);
        debug!(bullet = %id, ammo = self.store.player.magazine.ammo(), "Player fired");
    }

    /// Begin a reload. No-op outside a game, when full, or already reloading.
    pub fn request_reload(&mut self) {
        if self.phase == GamePhase::Menu {
            return;
        }
        if self.store.reload_ammo() {
            debug!(
                ammo = self.store.player.magazine.ammo(),
                secs = self.config.reload_secs,
                "Reload started"
            );
        }
    }

    pub fn toggle_view(&mut self) {
        self.store.toggle_view_mode();
    }

    pub fn set_weapon(&mut self, name: &str) {
        self.store.set_weapon(name);
    }

    /// Enter `mode` with a fresh initial population. Re-entering the mode
    /// that is already running is a no-op.
    pub fn set_mode(&mut self, mode: GameMode) {
        if self.phase != GamePhase::Menu && self.store.player.game_mode == mode {
            debug!(?mode, "Mode already active");
            return;
        }
        self.clear_state(mode);
        world_setup::populate(&mut self.store, &mut self.rng, &self.config, mode);
        self.phase = GamePhase::Active;
        info!(?mode, enemies = self.store.enemy_count(), "Entered game mode");
    }

    /// Leave the game: drop every entity and pending respawn, restore player
    /// defaults for the current mode, return to the menu.
    pub fn reset(&mut self) {
        let mode = self.store.player.game_mode;
        self.clear_state(mode);
        self.phase = GamePhase::Menu;
        info!(?mode, "Game reset");
    }

    fn clear_state(&mut self, mode: GameMode) {
        self.store.reset(mode);
        self.respawns.clear();
        self.time = SimTime::default();
        self.sound_events.clear();
    }

    // --- Tick ---

    /// Advance the simulation by `dt` seconds with the player's current pose.
    ///
    /// Order: bullets move, enemies think, combat resolves, bullets and
    /// timers expire, due respawns appear.
    pub fn tick(&mut self, dt: f32, player_position: Vec3, player_forward: Vec3) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.store.set_player_pose(player_position, player_forward);

        if self.phase == GamePhase::Menu {
            return;
        }

        self.time.advance(dt);
        self.run_systems(dt);
        self.update_phase();
    }

    fn run_systems(&mut self, dt: f32) {
        let sim_ms = self.time.elapsed_ms();
        let wall_ms = self.clock.now_ms();
        let mode = self.store.player.game_mode;

        // 1. Bullet motion
        systems::movement::run(&mut self.store, dt);
        // 2. Enemy AI (patrol + engage)
        systems::enemy_ai::run(
            &mut self.store,
            &mut self.rng,
            wall_ms,
            dt,
            &mut self.sound_events,
        );
        // 3. Collision & combat
        systems::combat::run(
            &mut self.store,
            &mut CombatOutputs {
                respawns: &mut self.respawns,
                rng: &mut self.rng,
                currency_store: self.currency_store.as_mut(),
                sound_events: &mut self.sound_events,
            },
            sim_ms,
        );
        // 4. Expiry (bullets, reload timer)
        systems::cleanup::run(&mut self.store, dt, &mut self.despawn_buffer);
        // 5. Due respawns
        if self.phase == GamePhase::Active {
            systems::respawn::run(
                &mut self.store,
                &mut self.respawns,
                &mut self.rng,
                &self.config,
                mode,
                sim_ms,
            );
        }
    }

    fn update_phase(&mut self) {
        if self.phase == GamePhase::Active
            && self.store.enemy_count() == 0
            && self.respawns.is_empty()
        {
            self.phase = GamePhase::Cleared;
            info!(score = self.store.player.score, tick = self.time.tick, "All enemies cleared");
        }
    }

    // --- Read access ---

    /// Build a snapshot of the current state. Read-only.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.store, &self.time, self.phase, self.respawns.len())
    }

    /// Drain sound cues accumulated since the last call.
    pub fn take_sound_events(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sound_events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only access to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn respawns(&self) -> &RespawnQueue {
        &self.respawns
    }

    /// Mutable store access for tests that place entities by hand.
    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }
}

fn load_currency(currency_store: &mut dyn CurrencyStore) -> Currency {
    let mut currency = Currency::default();
    for kind in [CollectibleKind::Coin, CollectibleKind::Gem] {
        match currency_store.load(kind) {
            Ok(total) => {
                currency.add(kind, total);
            }
            Err(err) => warn!(%err, ?kind, "Failed to load currency counter, starting from zero"),
        }
    }
    currency
}
