//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is the HUD's data source: the status system
//! publishes the clock, coins, anger and tutorial hint here every tick, and
//! the finish hook records the outcome. Anything that wants to show or report
//! the state of the shift reads it from here instead of querying entities.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

pub const SIGNAL_LEVEL_NAME: &str = "level_name";
pub const SIGNAL_CLOCK: &str = "clock";
pub const SIGNAL_TUTORIAL_HINT: &str = "tutorial_hint";
pub const SIGNAL_OUTCOME: &str = "outcome";
pub const SIGNAL_COINS: &str = "coins";
pub const SIGNAL_SCORE: &str = "score";
pub const SIGNAL_ANGER: &str = "anger";
pub const SIGNAL_MAX_ANGER: &str = "max_anger";
pub const SIGNAL_VISITORS: &str = "visitors";
pub const SIGNAL_DIFFICULTY: &str = "difficulty";
pub const FLAG_FINISHED: &str = "finished";
pub const FLAG_QUIT: &str = "quit_game";

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// Floating-point numeric signals addressed by string keys.
    pub scalars: FxHashMap<String, f32>,
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// String signals addressed by string keys.
    pub strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Set a string signal, skipping the allocation when unchanged.
    pub fn set_string(&mut self, key: &str, value: &str) {
        match self.strings.get_mut(key) {
            Some(existing) if existing == value => {}
            Some(existing) => {
                existing.clear();
                existing.push_str(value);
            }
            None => {
                self.strings.insert(key.to_owned(), value.to_owned());
            }
        }
    }
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_string_overwrites() {
        let mut signals = WorldSignals::default();
        signals.set_string(SIGNAL_CLOCK, "08:00");
        signals.set_string(SIGNAL_CLOCK, "08:01");
        assert_eq!(signals.get_string(SIGNAL_CLOCK), Some("08:01"));
    }

    #[test]
    fn test_flags() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag(FLAG_FINISHED));
        signals.set_flag(FLAG_FINISHED);
        assert!(signals.has_flag(FLAG_FINISHED));
        signals.clear_flag(FLAG_FINISHED);
        assert!(!signals.has_flag(FLAG_FINISHED));
    }

    #[test]
    fn test_missing_keys() {
        let signals = WorldSignals::default();
        assert_eq!(signals.get_integer(SIGNAL_COINS), None);
        assert_eq!(signals.get_scalar(SIGNAL_DIFFICULTY), None);
    }
}
