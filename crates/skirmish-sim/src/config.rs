//! Simulation configuration.
//!
//! Combat rules fixed by the game design live in
//! `skirmish_core::constants`; everything a designer may tune lives here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skirmish_core::constants::*;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub practice_enemy_count: u32,
    pub duel_enemy_count: u32,
    pub practice_enemy_health: i32,
    pub duel_enemy_health: i32,
    pub max_health: i32,
    pub max_ammo: u32,
    /// Seconds a reload blocks firing.
    pub reload_secs: f32,
    pub coin_count: u32,
    pub coin_value: u32,
    pub gem_count: u32,
    pub gem_value: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            practice_enemy_count: 8,
            duel_enemy_count: 1,
            practice_enemy_health: 1,
            duel_enemy_health: 100,
            max_health: PLAYER_MAX_HEALTH,
            max_ammo: PLAYER_MAX_AMMO,
            reload_secs: RELOAD_SECS,
            coin_count: 8,
            coin_value: 1,
            gem_count: 3,
            gem_value: 5,
        }
    }
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl SimConfig {
    /// Load and validate a JSON config file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break store invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.reload_secs.is_finite() && self.reload_secs > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "reload_secs must be positive, got {}",
                self.reload_secs
            )));
        }
        if self.max_ammo == 0 {
            return Err(ConfigError::Invalid("max_ammo must be positive".into()));
        }
        if self.max_health <= 0 {
            return Err(ConfigError::Invalid("max_health must be positive".into()));
        }
        if self.practice_enemy_health <= 0 || self.duel_enemy_health <= 0 {
            return Err(ConfigError::Invalid("enemy health must be positive".into()));
        }
        if self.coin_value == 0 || self.gem_value == 0 {
            return Err(ConfigError::Invalid(
                "collectible values must be positive".into(),
            ));
        }
        Ok(())
    }
}
