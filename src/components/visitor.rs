//! Visitor components.
//!
//! A visitor enters through the main door with one or more [`Desire`]s and
//! works through them in order, walking to a matching fixture, using it and
//! finally leaving through the exit. The state machine lives in
//! [`crate::systems::visitor`].

use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;

use crate::components::fixture::FixtureKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Desire {
    Poop,
    Pee,
    Wash,
}

impl Desire {
    /// Whether a fixture of `kind` satisfies this desire.
    pub fn accepts(self, kind: FixtureKind) -> bool {
        matches!(
            (self, kind),
            (Desire::Poop, FixtureKind::Toilet)
                | (Desire::Pee, FixtureKind::Toilet)
                | (Desire::Pee, FixtureKind::Urinal)
                | (Desire::Wash, FixtureKind::Sink)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisitorState {
    /// Looking for a free fixture for the current desire.
    Seeking,
    /// Walking to a reserved fixture.
    Walking,
    /// Using the reserved fixture.
    Using { remaining: f32 },
    /// Walking out.
    Leaving,
}

#[derive(Component, Debug, Clone)]
pub struct Visitor {
    pub state: VisitorState,
    /// Pending desires, current first.
    pub desires: ArrayVec<Desire, 3>,
    /// Fixture reserved by this visitor.
    pub target: Option<Entity>,
    /// Seconds left to wait for a free fixture.
    pub patience: f32,
    /// Where the exit door is.
    pub exit_x: f32,
    pub angry: bool,
}

impl Visitor {
    pub fn new(desires: &[Desire], patience: f32, exit_x: f32) -> Self {
        let mut pending = ArrayVec::new();
        for desire in desires.iter().take(pending.capacity()) {
            pending.push(*desire);
        }
        Visitor {
            state: VisitorState::Seeking,
            desires: pending,
            target: None,
            patience,
            exit_x,
            angry: false,
        }
    }

    pub fn current_desire(&self) -> Option<Desire> {
        self.desires.first().copied()
    }

    /// Drop the satisfied desire and decide what comes next.
    pub fn satisfy_current(&mut self) {
        if !self.desires.is_empty() {
            self.desires.remove(0);
        }
        self.target = None;
        self.state = if self.desires.is_empty() {
            VisitorState::Leaving
        } else {
            VisitorState::Seeking
        };
    }

    /// Give up on everything and walk out angry.
    pub fn storm_out(&mut self) {
        self.desires.clear();
        self.target = None;
        self.angry = true;
        self.state = VisitorState::Leaving;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desire_accepts() {
        assert!(Desire::Poop.accepts(FixtureKind::Toilet));
        assert!(!Desire::Poop.accepts(FixtureKind::Urinal));
        assert!(Desire::Pee.accepts(FixtureKind::Urinal));
        assert!(Desire::Pee.accepts(FixtureKind::Toilet));
        assert!(Desire::Wash.accepts(FixtureKind::Sink));
        assert!(!Desire::Wash.accepts(FixtureKind::Toilet));
    }

    #[test]
    fn test_satisfy_walks_through_desires() {
        let mut v = Visitor::new(&[Desire::Pee, Desire::Wash], 10.0, 0.0);
        assert_eq!(v.current_desire(), Some(Desire::Pee));
        v.satisfy_current();
        assert_eq!(v.state, VisitorState::Seeking);
        assert_eq!(v.current_desire(), Some(Desire::Wash));
        v.satisfy_current();
        assert_eq!(v.state, VisitorState::Leaving);
        assert_eq!(v.current_desire(), None);
    }

    #[test]
    fn test_new_truncates_to_capacity() {
        let v = Visitor::new(
            &[Desire::Pee, Desire::Wash, Desire::Poop, Desire::Wash],
            1.0,
            0.0,
        );
        assert_eq!(v.desires.len(), 3);
    }

    #[test]
    fn test_storm_out() {
        let mut v = Visitor::new(&[Desire::Poop], 1.0, 0.0);
        v.storm_out();
        assert!(v.angry);
        assert!(v.desires.is_empty());
        assert_eq!(v.state, VisitorState::Leaving);
    }
}
