//! Level-definition component consumed by the level setup system.
//!
//! Spawning an entity with a [`BathroomLevel`] describes a facility as an
//! ordered list of [`ModuleType`]s. On the next tick the
//! [`level_setup_system`](crate::systems::levelsetup::level_setup_system)
//! assembles the modules left to right and records the entity that represents
//! each one.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rules;

/// Building blocks a facility is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    Entrance,
    Tips,
    Toilet,
    Poster,
    Urinal,
    Sink,
    SupplyCloset,
}

impl ModuleType {
    /// Horizontal space the module occupies in the facility strip.
    pub fn width(self) -> f32 {
        match self {
            ModuleType::Entrance => rules::ENTRANCE_WIDTH,
            ModuleType::Tips => rules::TIPS_WIDTH,
            ModuleType::Toilet => rules::TOILET_WIDTH,
            ModuleType::Poster => rules::POSTER_WIDTH,
            ModuleType::Urinal => rules::URINAL_WIDTH,
            ModuleType::Sink => rules::SINK_WIDTH,
            ModuleType::SupplyCloset => rules::SUPPLY_CLOSET_WIDTH,
        }
    }
}

/// A facility waiting to be (or already) assembled.
#[derive(Component, Debug, Clone)]
pub struct BathroomLevel {
    pub name: String,
    pub modules: Vec<ModuleType>,
    /// Set once the modules have been spawned.
    pub initialized: bool,
    /// Primary entity of each module, in `modules` order.
    pub module_entities: SmallVec<[Entity; 12]>,
}

impl BathroomLevel {
    pub fn new(name: impl Into<String>, modules: Vec<ModuleType>) -> Self {
        Self {
            name: name.into(),
            modules,
            initialized: false,
            module_entities: SmallVec::new(),
        }
    }

    /// Total width of the assembled facility.
    pub fn total_width(&self) -> f32 {
        self.modules.iter().map(|m| m.width()).sum()
    }
}
