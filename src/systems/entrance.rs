//! Visitor arrival.
//!
//! Each tick, for every entity with an [`Entrance`] and a [`MapPosition`]:
//!
//! 1. The delay between visitor groups is interpolated from the level's
//!    easiest to hardest value as the clock approaches one hour before the
//!    end of the shift.
//! 2. Once the tutorial is done, the entrance cooldown runs down. When it
//!    expires the door swings open and a random group size is added to the
//!    [`SpawnQueue`].
//! 3. Queued visitors walk in one at a time, 0.2 to 0.3 seconds apart.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::anim::Anim;
use crate::components::bathroomlevel::ModuleType;
use crate::components::bounds::Bounds;
use crate::components::entrance::Entrance;
use crate::components::interactable::Interactable;
use crate::components::layer::{LAYER_ACTORS, Layer};
use crate::components::mapposition::MapPosition;
use crate::components::visitor::{Desire, Visitor};
use crate::resources::clock::Clock;
use crate::resources::gamerng::GameRng;
use crate::resources::levelcatalog::ActiveLevel;
use crate::resources::spawnqueue::SpawnQueue;
use crate::resources::tutorial::Tutorial;
use crate::resources::worldtime::WorldTime;
use crate::rules::*;

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Delay between visitor groups for the current time of day.
pub fn scale_difficulty_with_time(entrance: &mut Entrance, clock: &Clock) {
    entrance.time_between_spawns = lerp(
        entrance.time_between_spawns_easiest,
        entrance.time_between_spawns_hardest,
        clock.difficulty(),
    );
}

pub fn entrance_system(
    time: Res<WorldTime>,
    clock: Res<Clock>,
    tutorial: Res<Tutorial>,
    active: Option<Res<ActiveLevel>>,
    mut queue: ResMut<SpawnQueue>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
    mut entrances: Query<(
        &MapPosition,
        &mut Entrance,
        Option<&Bounds>,
        Option<&mut Interactable>,
        Option<&mut Anim>,
    )>,
) {
    let dt = time.delta;
    let (extra_poops, has_sink) = active.as_ref().map_or((false, false), |a| {
        (a.def.extra_poops, a.def.has_module(ModuleType::Sink))
    });

    for (pos, mut entrance, bounds, interactable, anim) in entrances.iter_mut() {
        scale_difficulty_with_time(&mut entrance, &clock);

        if !tutorial.is_done() {
            continue;
        }

        entrance.cooldown -= dt;
        if entrance.cooldown <= 0.0 {
            entrance.cooldown = entrance.time_between_spawns;
            if let Some(mut interactable) = interactable {
                if let (Some(mut anim), Some(open)) = (anim, interactable.start_anim.as_ref()) {
                    anim.set(open.clone());
                }
                interactable.cooldown = interactable.duration;
            }
            let count = rng.range_u32(entrance.min_count, entrance.max_count);
            queue.pending = queue.pending.saturating_add(count);
            debug!(
                "Entrance opened: {} visitors queued ({} pending), next group in {:.2}s",
                count, queue.pending, entrance.time_between_spawns
            );
        }

        queue.cooldown -= dt;
        if queue.pending > 0 && queue.cooldown <= 0.0 {
            queue.cooldown = rng.range_f32(0.2, 0.3);
            queue.pending -= 1;
            let (minx, miny) = bounds.map_or((0.0, 0.0), |b| (b.minx, b.miny));
            spawn_visitor(
                &mut commands,
                &mut rng,
                pos.x + minx,
                pos.y - miny,
                extra_poops,
                has_sink,
            );
        }
    }
}

/// Spawn one visitor at (`x`, `y`) who wants to poop or pee, and wash up
/// afterwards if the facility has a sink. They leave the way they came.
pub fn spawn_visitor(
    commands: &mut Commands,
    rng: &mut GameRng,
    x: f32,
    y: f32,
    extra_poops: bool,
    has_sink: bool,
) -> Entity {
    let wants_poop = if extra_poops {
        rng.percent(EXTRA_POOPS_CHANCE)
    } else {
        rng.coin_flip()
    };
    let need = if wants_poop { Desire::Poop } else { Desire::Pee };
    let visitor = if has_sink {
        Visitor::new(&[need, Desire::Wash], VISITOR_PATIENCE, x)
    } else {
        Visitor::new(&[need], VISITOR_PATIENCE, x)
    };

    let id = commands
        .spawn((
            MapPosition::new(x, y),
            Bounds::new(0.0, 0.0, VISITOR_WIDTH, DEFAULT_MODULE_HEIGHT),
            Layer(LAYER_ACTORS),
            Anim::new("visitor"),
            visitor,
        ))
        .id();
    debug!("Visitor {:?} arrived wanting {:?}", id, need);
    id
}
