//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [game]
//! level = 1
//! seed = 12345
//! levels = ./levels.json
//!
//! [simulation]
//! tick_rate = 60
//! max_seconds = 1800
//! autopilot = true
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_LEVEL: i64 = 1;
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_MAX_SECONDS: f32 = 1800.0;
const DEFAULT_AUTOPILOT: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// 1-based stage number; clamped into the catalog on load.
    pub level: i64,
    /// Random seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Optional JSON level catalog replacing the built-in stages.
    pub levels_path: Option<PathBuf>,
    /// Simulation ticks per simulated second.
    pub tick_rate: u32,
    /// Hard stop for a headless run, in simulated seconds.
    pub max_seconds: f32,
    /// Let the janitor bot play.
    pub autopilot: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            seed: None,
            levels_path: None,
            tick_rate: DEFAULT_TICK_RATE,
            max_seconds: DEFAULT_MAX_SECONDS,
            autopilot: DEFAULT_AUTOPILOT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Fixed frame delta derived from the tick rate.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_owned())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        // [game] section
        if let Some(level) = config.getint("game", "level")? {
            self.level = level;
        }
        if let Some(seed) = config.getuint("game", "seed")? {
            self.seed = Some(seed);
        }
        if let Some(levels) = config.get("game", "levels") {
            if !levels.trim().is_empty() {
                self.levels_path = Some(PathBuf::from(levels.trim()));
            }
        }

        // [simulation] section
        if let Some(tick_rate) = config.getuint("simulation", "tick_rate")? {
            if tick_rate == 0 {
                return Err("simulation.tick_rate must be positive".to_string());
            }
            self.tick_rate = tick_rate as u32;
        }
        if let Some(max_seconds) = config.getfloat("simulation", "max_seconds")? {
            self.max_seconds = max_seconds as f32;
        }
        if let Some(autopilot) = config.getbool("simulation", "autopilot")? {
            self.autopilot = autopilot;
        }

        info!(
            "Loaded config: level={}, seed={:?}, levels={:?}, tick_rate={}, max_seconds={}, autopilot={}",
            self.level,
            self.seed,
            self.levels_path,
            self.tick_rate,
            self.max_seconds,
            self.autopilot
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [game] section
        config.set("game", "level", Some(self.level.to_string()));
        if let Some(seed) = self.seed {
            config.set("game", "seed", Some(seed.to_string()));
        }
        if let Some(levels) = &self.levels_path {
            config.set("game", "levels", Some(levels.display().to_string()));
        }

        // [simulation] section
        config.set("simulation", "tick_rate", Some(self.tick_rate.to_string()));
        config.set(
            "simulation",
            "max_seconds",
            Some(self.max_seconds.to_string()),
        );
        config.set("simulation", "autopilot", Some(self.autopilot.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
