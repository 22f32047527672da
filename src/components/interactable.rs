//! Interaction component for anything a visitor or the janitor can use.
//!
//! An [`Interactable`] knows how long one use takes, which animation it
//! switches between while in use, who currently occupies it, and how long it
//! must rest before the next use.

use bevy_ecs::prelude::*;

#[derive(Component, Debug, Clone, Default)]
pub struct Interactable {
    /// Seconds one use takes.
    pub duration: f32,
    /// Vertical offset at which a user stands.
    pub use_offset_y: f32,
    /// Animation shown while in use.
    pub start_anim: Option<String>,
    /// Animation shown once it is free again.
    pub end_anim: Option<String>,
    /// Seconds left before it can be used again.
    pub cooldown: f32,
    /// Entity reserving or using it.
    pub occupant: Option<Entity>,
}

impl Interactable {
    pub fn new(duration: f32) -> Self {
        Interactable {
            duration,
            ..Default::default()
        }
    }

    pub fn with_anims(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_anim = Some(start.into());
        self.end_anim = Some(end.into());
        self
    }

    pub fn with_use_offset_y(mut self, offset: f32) -> Self {
        self.use_offset_y = offset;
        self
    }

    /// Nobody holds it and it is not resting.
    pub fn is_free(&self) -> bool {
        self.occupant.is_none() && self.cooldown <= 0.0
    }

    /// Release the occupant and start resting for `cooldown` seconds.
    pub fn release(&mut self, cooldown: f32) {
        self.occupant = None;
        self.cooldown = cooldown;
    }
}
