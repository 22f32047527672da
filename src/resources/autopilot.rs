use bevy_ecs::prelude::Resource;

/// Present when the built-in janitor bot should play.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Autopilot;
