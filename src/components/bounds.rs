use bevy_ecs::prelude::Component;

/// Axis-aligned bounds relative to the entity's [`MapPosition`].
///
/// [`MapPosition`]: super::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Bounds {
    pub minx: f32,
    pub miny: f32,
    pub maxx: f32,
    pub maxy: f32,
}

impl Bounds {
    pub fn new(minx: f32, miny: f32, maxx: f32, maxy: f32) -> Self {
        Self {
            minx,
            miny,
            maxx,
            maxy,
        }
    }

    pub fn width(&self) -> f32 {
        self.maxx - self.minx
    }

    pub fn height(&self) -> f32 {
        self.maxy - self.miny
    }

    /// Horizontal centre in world space for an entity at `x`.
    pub fn center_x(&self, x: f32) -> f32 {
        x + (self.minx + self.maxx) * 0.5
    }

    /// Point containment in world space.
    pub fn contains_point(&self, x: f32, y: f32, px: f32, py: f32) -> bool {
        px >= x + self.minx && px <= x + self.maxx && py >= y + self.miny && py <= y + self.maxy
    }
}
