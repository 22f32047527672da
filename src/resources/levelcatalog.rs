//! Level catalog and the active level.
//!
//! A [`LevelDef`] declares one scripted stage: which modules the facility is
//! built from, how fast visitors arrive, how many angry visitors end the
//! shift, and a handful of flags. [`LevelCatalog::builtin`] holds the six
//! stages of the game; a catalog can also be read from (and written to) JSON.
//!
//! # JSON Format
//!
//! ```json
//! [
//!   {
//!     "name": "Stage 1: First Day",
//!     "modules": ["entrance", "tips", "toilet", "toilet", "supply_closet"],
//!     "loss_count": 3,
//!     "clock_speed": 35.0,
//!     "tutorial": true
//!   }
//! ]
//! ```
//!
//! Omitted fields take the defaults of [`LevelDef::new`].

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::bathroomlevel::ModuleType;
use crate::components::bathroomlevel::ModuleType::{
    Entrance, Poster, Sink, SupplyCloset, Tips, Toilet, Urinal,
};
use crate::rules::MAX_GROUP_SIZE;

fn default_loss_count() -> u32 {
    5
}
fn default_easiest() -> f32 {
    12.0
}
fn default_hardest() -> f32 {
    2.0
}
fn default_count() -> u32 {
    1
}
fn default_clock_speed() -> f32 {
    10.0
}

/// Declarative definition of one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub modules: Vec<ModuleType>,
    /// Angry visitors that end the shift.
    #[serde(default = "default_loss_count")]
    pub loss_count: u32,
    #[serde(default = "default_easiest")]
    pub time_between_spawns_easiest: f32,
    #[serde(default = "default_hardest")]
    pub time_between_spawns_hardest: f32,
    #[serde(default = "default_count")]
    pub min_count: u32,
    #[serde(default = "default_count")]
    pub max_count: u32,
    #[serde(default)]
    pub extra_poops: bool,
    /// In-game minutes per real second.
    #[serde(default = "default_clock_speed")]
    pub clock_speed: f32,
    #[serde(default)]
    pub tutorial: bool,
    #[serde(default)]
    pub start_dirty: bool,
}

impl LevelDef {
    pub fn new(name: impl Into<String>, modules: &[ModuleType]) -> Self {
        LevelDef {
            name: name.into(),
            modules: modules.to_vec(),
            loss_count: default_loss_count(),
            time_between_spawns_easiest: default_easiest(),
            time_between_spawns_hardest: default_hardest(),
            min_count: default_count(),
            max_count: default_count(),
            extra_poops: false,
            clock_speed: default_clock_speed(),
            tutorial: false,
            start_dirty: false,
        }
    }

    pub fn loss_count(mut self, count: u32) -> Self {
        self.loss_count = count;
        self
    }

    pub fn spawn_delay(mut self, easy: f32, hard: f32) -> Self {
        self.time_between_spawns_easiest = easy;
        self.time_between_spawns_hardest = hard;
        self
    }

    pub fn spawn_count(mut self, min_count: u32, max_count: u32) -> Self {
        self.min_count = min_count;
        self.max_count = max_count;
        self
    }

    pub fn extra_poops(mut self) -> Self {
        self.extra_poops = true;
        self
    }

    pub fn clock_speed(mut self, clock_speed: f32) -> Self {
        self.clock_speed = clock_speed;
        self
    }

    pub fn tutorial(mut self, tutorial: bool) -> Self {
        self.tutorial = tutorial;
        self
    }

    pub fn start_dirty(mut self, start_dirty: bool) -> Self {
        self.start_dirty = start_dirty;
        self
    }

    pub fn has_module(&self, module: ModuleType) -> bool {
        self.modules.contains(&module)
    }

    /// Reject values the simulation cannot play with.
    ///
    /// The error names the offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.modules.is_empty() {
            return Err("modules must not be empty".to_string());
        }
        if self.loss_count == 0 {
            return Err("loss_count must be at least 1".to_string());
        }
        if self.min_count > self.max_count {
            return Err(format!(
                "min_count ({}) must not exceed max_count ({})",
                self.min_count, self.max_count
            ));
        }
        if self.max_count > MAX_GROUP_SIZE {
            return Err(format!(
                "max_count ({}) must be at most {}",
                self.max_count, MAX_GROUP_SIZE
            ));
        }
        let positive = |value: f32| value.is_finite() && value > 0.0;
        if !positive(self.time_between_spawns_easiest) {
            return Err(format!(
                "time_between_spawns_easiest must be positive, got {}",
                self.time_between_spawns_easiest
            ));
        }
        if !positive(self.time_between_spawns_hardest) {
            return Err(format!(
                "time_between_spawns_hardest must be positive, got {}",
                self.time_between_spawns_hardest
            ));
        }
        if !positive(self.clock_speed) {
            return Err(format!(
                "clock_speed must be positive, got {}",
                self.clock_speed
            ));
        }
        Ok(())
    }
}

/// Ordered list of stages.
#[derive(Resource, Debug, Clone)]
pub struct LevelCatalog {
    pub levels: Vec<LevelDef>,
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LevelCatalog {
    /// The six stages of the game.
    pub fn builtin() -> Self {
        let introduction = LevelDef::new(
            "Stage 1: First Day",
            &[Entrance, Tips, Toilet, Toilet, SupplyCloset],
        )
        .loss_count(3)
        .clock_speed(35.0)
        .spawn_delay(8.0, 8.0)
        .start_dirty(true)
        .tutorial(true);

        let sink_or_swim = LevelDef::new(
            "Stage 2: Sink Or Swim",
            &[
                Entrance,
                Tips,
                Toilet,
                Toilet,
                Toilet,
                Poster,
                Sink,
                Poster,
                SupplyCloset,
            ],
        )
        .loss_count(3)
        .clock_speed(10.0)
        .spawn_delay(8.0, 4.0);

        let procrastination_hurts = LevelDef::new(
            "Stage 3: Procrastination Hurts",
            &[
                Entrance,
                Tips,
                Urinal,
                Poster,
                Sink,
                Sink,
                Poster,
                Toilet,
                Toilet,
                Toilet,
                SupplyCloset,
            ],
        )
        .loss_count(4)
        .clock_speed(15.0)
        .spawn_count(2, 3)
        .start_dirty(true)
        .spawn_delay(10.0, 6.0);

        let zero_tolerance = LevelDef::new(
            "Stage 4: Zero Tolerance",
            &[
                Entrance,
                Tips,
                Urinal,
                Toilet,
                Toilet,
                Toilet,
                Toilet,
                Sink,
                Sink,
                SupplyCloset,
            ],
        )
        .loss_count(1)
        .spawn_count(3, 4)
        .clock_speed(10.0)
        .spawn_delay(14.0, 10.0);

        let chili = LevelDef::new(
            "Stage 5: Chili Con Carne Convention",
            &[
                Entrance,
                Tips,
                Toilet,
                Toilet,
                Sink,
                Sink,
                Toilet,
                Toilet,
                SupplyCloset,
            ],
        )
        .extra_poops()
        .clock_speed(10.0)
        .spawn_count(2, 3)
        .spawn_delay(10.0, 6.0);

        let panic = LevelDef::new(
            "Stage 6: AHHHHHHHHHHHHHHHHHHHHHHHHHHHHHHH!!!",
            &[
                Entrance,
                Tips,
                Toilet,
                Urinal,
                Toilet,
                Urinal,
                Toilet,
                Sink,
                Sink,
                SupplyCloset,
            ],
        )
        .clock_speed(1.0)
        .spawn_count(1, 4)
        .spawn_delay(4.0, 1.0);

        LevelCatalog {
            levels: vec![
                introduction,
                sink_or_swim,
                procrastination_hurts,
                zero_tolerance,
                chili,
                panic,
            ],
        }
    }

    /// Pick a stage by its 1-based number, clamped into the catalog.
    ///
    /// Returns `None` only for an empty catalog.
    pub fn select(&self, level_number: i64) -> Option<&LevelDef> {
        if self.levels.is_empty() {
            return None;
        }
        let last = self.levels.len() as i64 - 1;
        let index = (level_number - 1).clamp(0, last);
        self.levels.get(index as usize)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let levels: Vec<LevelDef> = serde_json::from_str(json)?;
        if levels.is_empty() {
            return Err("level catalog contains no levels".into());
        }
        for level in &levels {
            level
                .validate()
                .map_err(|e| format!("level \"{}\": {}", level.name, e))?;
        }
        Ok(LevelCatalog { levels })
    }

    pub fn to_json(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(serde_json::to_string_pretty(&self.levels)?)
    }

    /// Loads a catalog from a JSON file at the specified path.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        Self::from_json(&file_content)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// The stage being played.
#[derive(Resource, Debug, Clone)]
pub struct ActiveLevel {
    pub number: usize,
    pub def: LevelDef,
}
