//! Configuration management for garden parameters.
//!
//! Strongly-typed configuration structures mapping to `config.toml`. Every
//! gameplay constant of the garden rules can be tuned here; the defaults
//! reproduce the classic rules exactly.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. `RUST_LOG` (overrides `storage.log_level` only)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [garden]
//! slot_count = 3
//! starting_coins = 30
//! tick_interval_secs = 60
//! seed = 42
//!
//! [rules]
//! water_health = 20
//! level_up_chance = 0.25
//!
//! [rewards]
//! daily_bonus = 10
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Garden layout and timing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GardenConfig {
    pub slot_count: usize,
    pub starting_coins: u64,
    pub tick_interval_secs: u64,
    /// Seeds the gameplay RNG (level-ups, passive income). `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            slot_count: 3,
            starting_coins: 30,
            tick_interval_secs: 60,
            seed: None,
        }
    }
}

/// Per-action deltas and probabilities of the slot state machine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    pub water_health: u8,
    pub feed_hunger: u8,
    pub tick_health_decay: u8,
    pub tick_hunger_decay: u8,
    pub harvest_health_penalty: u8,
    pub harvest_health_floor: u8,
    pub harvest_hunger_penalty: u8,
    pub level_up_chance: f64,
    pub max_level: u8,
    pub passive_happiness_threshold: f64,
    pub passive_income_chance: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            water_health: 20,
            feed_hunger: 25,
            tick_health_decay: 2,
            tick_hunger_decay: 3,
            harvest_health_penalty: 20,
            harvest_health_floor: 10,
            harvest_hunger_penalty: 30,
            level_up_chance: 0.25,
            max_level: 5,
            passive_happiness_threshold: 70.0,
            passive_income_chance: 0.2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RewardsConfig {
    /// Coins granted for each new finance entry.
    pub entry_reward: u64,
    pub daily_bonus: u64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            entry_reward: 1,
            daily_bonus: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub save_path: String,
    pub log_path: String,
    pub log_level: String,
    pub csv_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            save_path: "garden_save.json".to_string(),
            log_path: "logs/pixel_garden.log".to_string(),
            log_level: "info".to_string(),
            csv_path: "finance_export.csv".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub target_fps: u64,
    pub garden: GardenConfig,
    pub rules: RulesConfig,
    pub rewards: RewardsConfig,
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            garden: GardenConfig::default(),
            rules: RulesConfig::default(),
            rewards: RewardsConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.garden.slot_count > 0, "Slot count must be positive");
        anyhow::ensure!(
            self.garden.slot_count <= 64,
            "Slot count too large (max 64)"
        );
        anyhow::ensure!(
            self.garden.tick_interval_secs > 0,
            "Tick interval must be positive"
        );

        anyhow::ensure!(self.rules.max_level >= 1, "Max level must be at least 1");
        anyhow::ensure!(
            self.rules.harvest_health_floor <= 100,
            "Harvest health floor must be in [0, 100]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.rules.level_up_chance),
            "Level-up chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.rules.passive_income_chance),
            "Passive income chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.rules.passive_happiness_threshold),
            "Passive happiness threshold must be in [0, 100]"
        );

        anyhow::ensure!(
            !self.storage.save_path.trim().is_empty(),
            "Save path must not be empty"
        );

        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes this config to `path` as TOML.
    pub fn write_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = toml::to_string(self)?;
        fs::write(path, text).with_context(|| format!("writing config to {}", path.display()))
    }

    /// Reads `path`, falling back to defaults when the file is missing or
    /// invalid. A missing file is created with the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let Ok(content) = fs::read_to_string(path) else {
            let default = Self::default();
            if let Err(e) = default.write_to(path) {
                tracing::warn!(path = %path.display(), error = %e, "Could not write default config");
            }
            return default;
        };
        Self::from_toml(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
            Self::default()
        })
    }
}
