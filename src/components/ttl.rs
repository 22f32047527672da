//! Time-to-live component for automatic entity despawning.
//!
//! The [`Ttl`] component counts down time each frame. When the remaining time
//! reaches zero, the entity is despawned by
//! [`ttl_system`](crate::systems::ttl::ttl_system). Emotes and coin pops use
//! it.

use bevy_ecs::prelude::Component;

/// Time-to-live component that automatically despawns entities after a duration.
#[derive(Component)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    /// Create a new Ttl with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
