//! In-game wall clock.
//!
//! The shift runs from 08:00 for ten hours. The clock advances
//! `clock_speed` in-game minutes per real second, and entrance difficulty is
//! scaled off [`Clock::minutes_passed`].

use bevy_ecs::prelude::Resource;

use crate::rules;

#[derive(Resource, Debug, Clone, Copy)]
pub struct Clock {
    pub minutes_passed: f32,
    /// In-game minutes per real second.
    pub speed: f32,
}

impl Default for Clock {
    fn default() -> Self {
        Clock {
            minutes_passed: 0.0,
            speed: 10.0,
        }
    }
}

impl Clock {
    pub fn new(speed: f32) -> Self {
        Clock {
            minutes_passed: 0.0,
            speed,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.minutes_passed = (self.minutes_passed + dt * self.speed).min(rules::MINUTES_IN_SHIFT);
    }

    pub fn shift_over(&self) -> bool {
        self.minutes_passed >= rules::MINUTES_IN_SHIFT
    }

    /// 0.0 at the start of the shift, 1.0 one hour before the end.
    pub fn difficulty(&self) -> f32 {
        (self.minutes_passed / rules::MINUTES_TILL_VICTORY_MINUS_ONE_HOUR).clamp(0.0, 1.0)
    }

    /// Wall-clock time as `HH:MM`.
    pub fn display(&self) -> String {
        let total = self.minutes_passed as u32;
        format!(
            "{:02}:{:02}",
            rules::SHIFT_START_HOUR + total / 60,
            total % 60
        )
    }
}
