//! Victory and defeat.
//!
//! [`outcome_system`] ends the shift: it is lost as soon as a tip bowl holds
//! as much anger as the level tolerates, and won when the clock reaches the
//! end of the shift. Either way a state change is requested and the
//! [`GameStateChangedEvent`](crate::events::gamestate::GameStateChangedEvent)
//! observer runs the finish hook.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::tipbowl::TipBowl;
use crate::resources::clock::Clock;
use crate::resources::gamestate::{GameStates, NextGameState};

/// Outcome for the current tick, if the shift is decided.
pub fn decide_outcome<'a>(
    bowls: impl IntoIterator<Item = &'a TipBowl>,
    clock: &Clock,
) -> Option<GameStates> {
    if bowls.into_iter().any(TipBowl::is_overflowing_with_anger) {
        Some(GameStates::Defeat)
    } else if clock.shift_over() {
        Some(GameStates::Victory)
    } else {
        None
    }
}

pub fn outcome_system(
    clock: Res<Clock>,
    mut next_state: ResMut<NextGameState>,
    tip_bowls: Query<&TipBowl>,
) {
    if next_state.is_pending() {
        return;
    }
    if let Some(outcome) = decide_outcome(tip_bowls.iter(), &clock) {
        info!("Shift over at {}: {:?}", clock.display(), outcome);
        next_state.set(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MINUTES_IN_SHIFT;

    fn bowl(anger: u32, max_anger: u32) -> TipBowl {
        let mut world = World::new();
        let mut bowl = TipBowl::new(world.spawn_empty().id(), max_anger);
        bowl.anger = anger;
        bowl
    }

    #[test]
    fn test_undecided() {
        let clock = Clock::new(10.0);
        assert_eq!(decide_outcome(&[bowl(2, 3)], &clock), None);
    }

    #[test]
    fn test_defeat_on_anger() {
        let clock = Clock::new(10.0);
        assert_eq!(
            decide_outcome(&[bowl(3, 3)], &clock),
            Some(GameStates::Defeat)
        );
    }

    #[test]
    fn test_victory_at_end_of_shift() {
        let mut clock = Clock::new(10.0);
        clock.minutes_passed = MINUTES_IN_SHIFT;
        assert_eq!(
            decide_outcome(&[bowl(0, 3)], &clock),
            Some(GameStates::Victory)
        );
    }

    #[test]
    fn test_defeat_wins_a_tie() {
        let mut clock = Clock::new(10.0);
        clock.minutes_passed = MINUTES_IN_SHIFT;
        assert_eq!(
            decide_outcome(&[bowl(1, 1)], &clock),
            Some(GameStates::Defeat)
        );
    }
}
