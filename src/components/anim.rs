//! Animation id component.
//!
//! Nothing in the crate draws sprites, but which sprite an entity shows is
//! part of the game state: door open/closed, the coin pile in the tip bowl,
//! the janitor's held tool, the random poster picked at level load.

use bevy_ecs::prelude::Component;

/// Key of the animation currently assigned to the entity.
#[derive(Component, Clone, Debug, PartialEq, Eq, Default)]
pub struct Anim {
    pub id: String,
}

impl Anim {
    pub fn new(id: impl Into<String>) -> Self {
        Anim { id: id.into() }
    }

    /// Replace the animation key.
    pub fn set(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn is(&self, id: &str) -> bool {
        self.id == id
    }
}
