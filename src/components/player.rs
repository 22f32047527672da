//! Janitor component.
//!
//! The janitor receives [`PlayerAction`](crate::events::player::PlayerAction)s,
//! turns each into a [`PlayerTask`], walks to the task's target and carries
//! it out on arrival. See [`crate::systems::player`].

use bevy_ecs::prelude::*;

use crate::components::tool::ToolKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Fetch a tool from the closet.
    Equip(ToolKind),
    /// Clean or unclog a fixture with the tool in hand.
    Service,
    /// Empty the tip bowl.
    CollectTips,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTask {
    pub kind: TaskKind,
    pub target: Entity,
    pub target_x: f32,
}

#[derive(Component, Debug, Clone, Default)]
pub struct Player {
    pub tool: Option<ToolKind>,
    pub task: Option<PlayerTask>,
}

impl Player {
    pub fn is_idle(&self) -> bool {
        self.task.is_none()
    }
}
