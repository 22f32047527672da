//! Built-in janitor bot.
//!
//! When the [`Autopilot`](crate::resources::autopilot::Autopilot) resource is
//! present, [`autopilot_system`] picks the next job for an idle janitor and
//! triggers the matching [`PlayerAction`]. Jobs, most urgent first:
//!
//! 1. unclog a clogged toilet,
//! 2. clean the dirtiest fixture at dirt level 2 or more,
//! 3. empty the tip bowl once enough coins wait,
//! 4. clean anything that is not spotless.
//!
//! A job that needs a different tool starts with a trip to the closet.
use bevy_ecs::prelude::*;

use crate::components::fixture::{Clogged, Dirty, Fixture};
use crate::components::player::Player;
use crate::components::tipbowl::TipBowl;
use crate::components::tool::ToolKind;
use crate::events::player::PlayerAction;
use crate::rules::AUTOPILOT_COLLECT_THRESHOLD;

/// What the bot wants done, before tools are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Fix(ToolKind, Entity),
    CollectTips,
}

/// Pick the most urgent job.
///
/// `fixtures` yields `(entity, dirt level, clogged)`. Ties go to the lowest
/// entity so runs are reproducible.
pub fn choose_job(
    fixtures: impl IntoIterator<Item = (Entity, u8, bool)>,
    coins_waiting: u32,
) -> Option<Job> {
    let mut clogged: Option<Entity> = None;
    let mut dirtiest: Option<(u8, Entity)> = None;
    for (entity, level, is_clogged) in fixtures {
        if is_clogged && clogged.is_none_or(|c| entity < c) {
            clogged = Some(entity);
        }
        if level == 0 {
            continue;
        }
        let better = match dirtiest {
            None => true,
            Some((best, e)) => level > best || (level == best && entity < e),
        };
        if better {
            dirtiest = Some((level, entity));
        }
    }

    if let Some(entity) = clogged {
        return Some(Job::Fix(ToolKind::Unclog, entity));
    }
    if let Some((level, entity)) = dirtiest {
        if level >= 2 {
            return Some(Job::Fix(ToolKind::Clean, entity));
        }
    }
    if coins_waiting >= AUTOPILOT_COLLECT_THRESHOLD {
        return Some(Job::CollectTips);
    }
    dirtiest.map(|(_, entity)| Job::Fix(ToolKind::Clean, entity))
}

/// Turn a job into the next action for a janitor holding `tool`.
pub fn next_action(job: Job, tool: Option<ToolKind>) -> PlayerAction {
    match job {
        Job::Fix(needed, _) if tool != Some(needed) => PlayerAction::Equip(needed),
        Job::Fix(_, entity) => PlayerAction::Service(entity),
        Job::CollectTips => PlayerAction::CollectTips,
    }
}

pub fn autopilot_system(
    mut commands: Commands,
    players: Query<&Player>,
    fixtures: Query<(Entity, &Dirty, Has<Clogged>), With<Fixture>>,
    tip_bowls: Query<&TipBowl>,
) {
    let Some(player) = players.iter().next() else {
        return;
    };
    if !player.is_idle() {
        return;
    }
    let coins: u32 = tip_bowls.iter().map(|b| b.coins).sum();
    let job = choose_job(
        fixtures.iter().map(|(e, dirty, clogged)| (e, dirty.level, clogged)),
        coins,
    );
    if let Some(job) = job {
        commands.trigger(next_action(job, player.tool));
    }
}
