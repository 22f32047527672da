//! Entrance door components.
//!
//! The main door of the facility carries an [`Entrance`], which throttles how
//! often visitors arrive, and an [`Exit`] tag. Visitors spawn at this door
//! and record its position in `Visitor::exit_x`, which is where they walk
//! when leaving. See [`crate::systems::entrance`].

use bevy_ecs::prelude::Component;

/// Spawn throttling state for an entrance door.
#[derive(Component, Debug, Clone)]
pub struct Entrance {
    /// Seconds until the next group of visitors is queued.
    pub cooldown: f32,
    /// Current delay between groups, scaled with the clock.
    pub time_between_spawns: f32,
    /// Delay at the start of the shift.
    pub time_between_spawns_easiest: f32,
    /// Delay reached one hour before the end of the shift.
    pub time_between_spawns_hardest: f32,
    /// Smallest group size.
    pub min_count: u32,
    /// Largest group size (inclusive).
    pub max_count: u32,
}

impl Entrance {
    pub fn new(easiest: f32, hardest: f32, min_count: u32, max_count: u32) -> Self {
        Entrance {
            cooldown: 0.0,
            time_between_spawns: easiest,
            time_between_spawns_easiest: easiest,
            time_between_spawns_hardest: hardest,
            min_count,
            max_count: max_count.max(min_count),
        }
    }
}

/// Tags the main door as the way out. Nothing moves towards it; each
/// visitor carries its own `exit_x`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Exit;
