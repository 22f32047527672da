//! Sanitary fixture components.
//!
//! Toilets, urinals and sinks are all [`Fixture`]s. Each carries a [`Dirty`]
//! level that grows as visitors use it; toilets additionally remember their
//! bowl entity and can be [`Clogged`].

use bevy_ecs::prelude::*;

use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    Toilet,
    Urinal,
    Sink,
}

impl FixtureKind {
    /// Percentage chance that one use makes the fixture dirtier.
    pub fn escalation_chance(self) -> u32 {
        match self {
            FixtureKind::Toilet => rules::PERCENTAGE_CHANCE_OF_TOILET_DIRTY_ESCALATION,
            FixtureKind::Urinal => rules::PERCENTAGE_CHANCE_OF_URINAL_DIRTY_ESCALATION,
            FixtureKind::Sink => rules::PERCENTAGE_CHANCE_OF_SINK_DIRTY_ESCALATION,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FixtureKind::Toilet => "toilet",
            FixtureKind::Urinal => "urinal",
            FixtureKind::Sink => "sink",
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Fixture {
    pub kind: FixtureKind,
}

impl Fixture {
    pub fn new(kind: FixtureKind) -> Self {
        Fixture { kind }
    }
}

/// Link from a toilet's door entity to its bowl.
#[derive(Component, Debug, Clone, Copy)]
pub struct Toilet {
    pub bowl: Entity,
}

/// Griminess, from 0 (spotless) to [`rules::MAX_DIRTY_LEVEL`].
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dirty {
    pub level: u8,
}

impl Dirty {
    pub fn new(level: u8) -> Self {
        Dirty {
            level: level.min(rules::MAX_DIRTY_LEVEL),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.level == 0
    }

    pub fn is_filthy(&self) -> bool {
        self.level >= rules::MAX_DIRTY_LEVEL
    }

    /// Raise the level by one. Returns `false` if already filthy.
    pub fn escalate(&mut self) -> bool {
        if self.is_filthy() {
            return false;
        }
        self.level += 1;
        true
    }

    pub fn clean(&mut self) {
        self.level = 0;
    }
}

/// A toilet that refuses service until plunged.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Clogged;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_new_clamps_level() {
        assert_eq!(Dirty::new(200).level, rules::MAX_DIRTY_LEVEL);
    }

    #[test]
    fn test_escalate_stops_at_max() {
        let mut d = Dirty::default();
        for _ in 0..rules::MAX_DIRTY_LEVEL {
            assert!(d.escalate());
        }
        assert!(d.is_filthy());
        assert!(!d.escalate());
        assert_eq!(d.level, rules::MAX_DIRTY_LEVEL);
    }

    #[test]
    fn test_clean_resets() {
        let mut d = Dirty::new(2);
        assert!(!d.is_clean());
        d.clean();
        assert!(d.is_clean());
    }

    #[test]
    fn test_toilets_escalate_most_often() {
        assert!(
            FixtureKind::Toilet.escalation_chance() > FixtureKind::Urinal.escalation_chance()
        );
        assert_eq!(
            FixtureKind::Sink.escalation_chance(),
            FixtureKind::Urinal.escalation_chance()
        );
    }
}
