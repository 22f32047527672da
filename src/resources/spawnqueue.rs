use bevy_ecs::prelude::Resource;

/// Visitors waiting to walk through the entrance, released one at a time.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SpawnQueue {
    pub pending: u32,
    pub cooldown: f32,
}
