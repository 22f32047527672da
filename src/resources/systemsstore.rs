//! Registry of state-entry hooks.
//!
//! The systems that run when the game enters a new state are registered once
//! with [`World::register_system`](bevy_ecs::world::World::register_system)
//! and stored here under a [`Hook`]. The game state observer looks them up
//! and runs them via [`SystemId`].

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Well-known hook slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Load the active level.
    Setup,
    /// First frame of play.
    EnterPlay,
    /// Shift won or lost.
    Finish,
    Quit,
}

/// Map of hooks to system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<Hook, SystemId>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SystemsStore {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, hook: Hook, id: SystemId) {
        self.map.insert(hook, id);
    }

    /// Retrieve a system ID by hook, if registered.
    pub fn get(&self, hook: Hook) -> Option<SystemId> {
        self.map.get(&hook).copied()
    }
}
