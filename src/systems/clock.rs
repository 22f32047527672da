//! Shift clock.
use bevy_ecs::prelude::*;

use crate::resources::clock::Clock;
use crate::resources::tutorial::Tutorial;
use crate::resources::worldtime::WorldTime;

/// Advance the in-game clock. It stands still during the tutorial.
pub fn clock_system(time: Res<WorldTime>, tutorial: Res<Tutorial>, mut clock: ResMut<Clock>) {
    if !tutorial.is_done() {
        return;
    }
    clock.advance(time.delta);
}
