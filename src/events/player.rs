//! Janitor commands.
//!
//! A [`PlayerAction`] tells the janitor what to do next. It can be triggered
//! by the autopilot or by any front end. [`player_action_observer`] resolves
//! where the janitor has to walk and stores the resulting
//! [`PlayerTask`]; an idle janitor takes the new task, a busy one drops the
//! old task for it.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::bounds::Bounds;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerTask, TaskKind};
use crate::components::tipbowl::TipBowl;
use crate::components::tool::{Inventory, ToolKind};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Walk to the supply closet and pick up a tool.
    Equip(ToolKind),
    /// Walk to a fixture and use the tool in hand on it.
    Service(Entity),
    /// Walk to the tip bowl and empty it.
    CollectTips,
}

fn center_x(pos: &MapPosition, bounds: Option<&Bounds>) -> f32 {
    bounds.map_or(pos.x, |b| b.center_x(pos.x))
}

pub fn player_action_observer(
    trigger: On<PlayerAction>,
    mut players: Query<&mut Player>,
    closets: Query<(Entity, &MapPosition, Option<&Bounds>), With<Inventory>>,
    tip_bowls: Query<(Entity, &MapPosition, Option<&Bounds>), With<TipBowl>>,
    targets: Query<(&MapPosition, Option<&Bounds>), Without<Player>>,
) {
    let action = *trigger.event();

    let task = match action {
        PlayerAction::Equip(tool) => closets
            .iter()
            .next()
            .map(|(entity, pos, bounds)| PlayerTask {
                kind: TaskKind::Equip(tool),
                target: entity,
                target_x: center_x(pos, bounds),
            }),
        PlayerAction::Service(target) => {
            targets.get(target).ok().map(|(pos, bounds)| PlayerTask {
                kind: TaskKind::Service,
                target,
                target_x: center_x(pos, bounds),
            })
        }
        PlayerAction::CollectTips => {
            tip_bowls
                .iter()
                .next()
                .map(|(entity, pos, bounds)| PlayerTask {
                    kind: TaskKind::CollectTips,
                    target: entity,
                    target_x: center_x(pos, bounds),
                })
        }
    };

    let Some(task) = task else {
        warn!("No target for {:?}", action);
        return;
    };

    for mut player in players.iter_mut() {
        debug!("Janitor task: {:?}", task);
        player.task = Some(task);
    }
}
