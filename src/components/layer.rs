//! Render layer component.
//!
//! The [`Layer`] component records the drawing order an entity was assigned
//! at spawn time. Higher values sit on top.

use bevy_ecs::prelude::Component;

pub const LAYER_BACKGROUND: i32 = 1;
pub const LAYER_BEHIND_ACTORS: i32 = 10;
pub const LAYER_ACTORS: i32 = 20;
pub const LAYER_TOILET_DOOR: i32 = 30;
pub const LAYER_PLAYER: i32 = 40;
pub const LAYER_ICONS: i32 = 100;

/// Rendering order hint for 2D drawing.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Layer(pub i32);
