//! Janitor movement and task completion.
//!
//! The janitor walks towards the target of its current
//! [`PlayerTask`](crate::components::player::PlayerTask) and carries the task
//! out once it stands in front of it. Completed tasks feed the [`Score`] and
//! the [`Tutorial`].
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::anim::Anim;
use crate::components::fixture::{Clogged, Dirty, Fixture};
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, TaskKind};
use crate::components::tipbowl::TipBowl;
use crate::components::tool::{Inventory, ToolKind};
use crate::resources::score::Score;
use crate::resources::tutorial::{Tutorial, TutorialStep};
use crate::resources::worldtime::WorldTime;
use crate::rules::{PLAYER_WIDTH, WALKING_SPEED_PLAYER};

pub fn player_system(
    time: Res<WorldTime>,
    mut commands: Commands,
    mut score: ResMut<Score>,
    mut tutorial: ResMut<Tutorial>,
    mut players: Query<(&mut Player, &mut MapPosition, Option<&mut Anim>)>,
    closets: Query<(), With<Inventory>>,
    mut fixtures: Query<(&Fixture, &mut Dirty, Has<Clogged>), Without<Player>>,
    mut tip_bowls: Query<&mut TipBowl>,
) {
    let step = WALKING_SPEED_PLAYER * time.delta;

    for (mut player, mut pos, anim) in players.iter_mut() {
        let Some(task) = player.task else {
            continue;
        };
        if !pos.step_towards_x(task.target_x - PLAYER_WIDTH * 0.5, step) {
            continue;
        }
        player.task = None;

        match task.kind {
            TaskKind::Equip(tool) => {
                if !closets.contains(task.target) {
                    warn!("Equip target {:?} is not a supply closet", task.target);
                    continue;
                }
                player.tool = Some(tool);
                if let Some(mut anim) = anim {
                    anim.set(tool.player_anim());
                }
                debug!("Janitor picked up {:?}", tool);
            }
            TaskKind::Service => {
                let Ok((fixture, mut dirty, clogged)) = fixtures.get_mut(task.target) else {
                    warn!("Service target {:?} is not a fixture", task.target);
                    continue;
                };
                match player.tool {
                    Some(ToolKind::Unclog) if clogged => {
                        commands.entity(task.target).remove::<Clogged>();
                        score.toilets_unclogged += 1;
                        tutorial.complete(TutorialStep::Unclog);
                        info!("Janitor unclogged a {}", fixture.kind.name());
                    }
                    Some(ToolKind::Clean) if !dirty.is_clean() => {
                        dirty.clean();
                        score.fixtures_cleaned += 1;
                        tutorial.complete(TutorialStep::Clean);
                        info!("Janitor cleaned a {}", fixture.kind.name());
                    }
                    tool => {
                        debug!(
                            "Nothing to do on {} with {:?} (dirt {}, clogged {})",
                            fixture.kind.name(),
                            tool,
                            dirty.level,
                            clogged
                        );
                    }
                }
            }
            TaskKind::CollectTips => {
                let Ok(mut bowl) = tip_bowls.get_mut(task.target) else {
                    warn!("Tip target {:?} has no bowl", task.target);
                    continue;
                };
                let coins = bowl.take_coins();
                score.tips_collected += coins;
                info!(
                    "Janitor collected {} coins ({} total)",
                    coins, score.tips_collected
                );
            }
        }
    }
}
