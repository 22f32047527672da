//! HUD status publishing.
//!
//! [`status_system`] copies the state of the shift into
//! [`WorldSignals`] every tick so a front end (or the headless report) can
//! read it without knowing about entities.
use bevy_ecs::prelude::*;

use crate::components::tipbowl::TipBowl;
use crate::components::visitor::Visitor;
use crate::resources::clock::Clock;
use crate::resources::score::Score;
use crate::resources::tutorial::Tutorial;
use crate::resources::worldsignals::{
    SIGNAL_ANGER, SIGNAL_CLOCK, SIGNAL_COINS, SIGNAL_DIFFICULTY, SIGNAL_MAX_ANGER, SIGNAL_SCORE,
    SIGNAL_TUTORIAL_HINT, SIGNAL_VISITORS, WorldSignals,
};

pub fn status_system(
    clock: Res<Clock>,
    score: Res<Score>,
    tutorial: Res<Tutorial>,
    mut signals: ResMut<WorldSignals>,
    tip_bowls: Query<&TipBowl>,
    visitors: Query<(), With<Visitor>>,
) {
    signals.set_string(SIGNAL_CLOCK, &clock.display());
    signals.set_scalar(SIGNAL_DIFFICULTY, clock.difficulty());
    signals.set_string(SIGNAL_TUTORIAL_HINT, tutorial.step().hint());
    signals.set_integer(SIGNAL_SCORE, score.tips_collected as i32);
    signals.set_integer(SIGNAL_VISITORS, visitors.iter().count() as i32);

    let (coins, anger, max_anger) = tip_bowls
        .iter()
        .fold((0, 0, 0), |(c, a, m), b| (c + b.coins, a + b.anger, m + b.max_anger));
    signals.set_integer(SIGNAL_COINS, coins as i32);
    signals.set_integer(SIGNAL_ANGER, anger as i32);
    signals.set_integer(SIGNAL_MAX_ANGER, max_anger as i32);
}
