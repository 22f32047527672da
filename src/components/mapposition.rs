//! World-space position component.
//!
//! Every spawned part of the facility, visitors and the player carry a
//! [`MapPosition`]. Coordinates are in pixels with y growing upwards from the
//! floor of the restroom, which is how module offsets are expressed.

use bevy_ecs::prelude::Component;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    /// Create a MapPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal distance to another position.
    pub fn distance_x(&self, other: &MapPosition) -> f32 {
        (self.x - other.x).abs()
    }

    /// Move `x` towards `target_x` by at most `step` pixels.
    ///
    /// Returns `true` once the target has been reached.
    pub fn step_towards_x(&mut self, target_x: f32, step: f32) -> bool {
        let dx = target_x - self.x;
        if dx.abs() <= step {
            self.x = target_x;
            true
        } else {
            self.x += step * dx.signum();
            false
        }
    }
}
