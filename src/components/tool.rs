//! Janitor tools stored in the supply closet.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Mop and bucket: resets dirt.
    Clean,
    /// Plunger: clears a clog.
    Unclog,
}

impl ToolKind {
    /// Animation of the janitor holding this tool.
    pub fn player_anim(self) -> &'static str {
        match self {
            ToolKind::Clean => "player_mop",
            ToolKind::Unclog => "player_plunger",
        }
    }
}

/// A tool lying in the closet.
#[derive(Component, Debug, Clone, Copy)]
pub struct Tool {
    pub kind: ToolKind,
}

/// Marks the supply closet the tools are fetched from.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Inventory;
