//! Visitor behaviour.
//!
//! [`visitor_system`] advances every [`Visitor`] through its state machine:
//!
//! - **Seeking** – reserve the nearest free fixture that satisfies the current
//!   desire. While nothing is free, patience runs down; when it runs out the
//!   visitor storms out.
//! - **Walking** – walk to the reserved fixture. A clogged toilet or a
//!   fixture at maximum dirt is refused, which angers the visitor.
//! - **Using** – occupy the fixture for its interaction duration. Afterwards
//!   the fixture rests, may get dirtier, and the visitor tips a coin if it was
//!   spotless.
//! - **Leaving** – walk back to the entrance and despawn.
//!
//! Angry visitors add to the tip bowl's anger; see
//! [`crate::systems::outcome`] for when that ends the shift.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::anim::Anim;
use crate::components::bounds::Bounds;
use crate::components::emote::{Emote, EmoteKind};
use crate::components::fixture::{Clogged, Dirty, Fixture};
use crate::components::interactable::Interactable;
use crate::components::layer::{LAYER_ICONS, Layer};
use crate::components::mapposition::MapPosition;
use crate::components::tipbowl::TipBowl;
use crate::components::ttl::Ttl;
use crate::components::visitor::{Visitor, VisitorState};
use crate::resources::gamerng::GameRng;
use crate::resources::score::Score;
use crate::resources::worldtime::WorldTime;
use crate::rules::*;
use crate::systems::fixture::{Escalation, escalate_dirt};

/// Where a visitor stands to use a fixture.
fn use_spot_x(pos: &MapPosition, bounds: Option<&Bounds>) -> f32 {
    bounds.map_or(pos.x, |b| b.center_x(pos.x)) - VISITOR_WIDTH * 0.5
}

/// Spawn a short-lived bubble above `at`.
pub fn spawn_emote(commands: &mut Commands, kind: EmoteKind, at: &MapPosition) {
    commands.spawn((
        MapPosition::new(at.x, at.y + DEFAULT_MODULE_HEIGHT * 0.5),
        Layer(LAYER_ICONS),
        Anim::new(kind.anim()),
        Emote { kind },
        Ttl::new(EMOTE_TTL),
    ));
}

fn anger(
    commands: &mut Commands,
    tip_bowls: &mut Query<&mut TipBowl>,
    score: &mut Score,
    at: &MapPosition,
) {
    if let Some(mut bowl) = tip_bowls.iter_mut().next() {
        bowl.anger += 1;
        info!("A visitor leaves angry ({}/{})", bowl.anger, bowl.max_anger);
    }
    score.visitors_angered += 1;
    spawn_emote(commands, EmoteKind::Angry, at);
}

pub fn visitor_system(
    time: Res<WorldTime>,
    mut commands: Commands,
    mut rng: ResMut<GameRng>,
    mut score: ResMut<Score>,
    mut visitors: Query<(Entity, &mut Visitor, &mut MapPosition)>,
    mut fixtures: Query<
        (
            Entity,
            &MapPosition,
            Option<&Bounds>,
            &Fixture,
            &mut Interactable,
            &mut Dirty,
            Has<Clogged>,
            Option<&mut Anim>,
        ),
        Without<Visitor>,
    >,
    mut tip_bowls: Query<&mut TipBowl>,
) {
    let dt = time.delta;
    let step = WALKING_SPEED_VISITORS * dt;

    for (entity, mut visitor, mut pos) in visitors.iter_mut() {
        let state = visitor.state;
        match state {
            VisitorState::Seeking => {
                let Some(desire) = visitor.current_desire() else {
                    visitor.state = VisitorState::Leaving;
                    continue;
                };

                let here = *pos;
                let nearest = fixtures
                    .iter()
                    .filter(|(_, _, _, fixture, interactable, ..)| {
                        desire.accepts(fixture.kind) && interactable.is_free()
                    })
                    .map(|(fixture, fpos, bounds, ..)| {
                        (fixture, (use_spot_x(fpos, bounds) - here.x).abs())
                    })
                    .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
                    .map(|(fixture, _)| fixture);

                match nearest {
                    Some(target) => {
                        if let Ok((_, _, _, _, mut interactable, ..)) = fixtures.get_mut(target) {
                            interactable.occupant = Some(entity);
                        }
                        visitor.target = Some(target);
                        visitor.patience = VISITOR_PATIENCE;
                        visitor.state = VisitorState::Walking;
                    }
                    None => {
                        visitor.patience -= dt;
                        if visitor.patience <= 0.0 {
                            debug!("Visitor {:?} ran out of patience", entity);
                            anger(&mut commands, &mut tip_bowls, &mut score, &pos);
                            visitor.storm_out();
                        }
                    }
                }
            }
            VisitorState::Walking => {
                let Some(target) = visitor.target else {
                    visitor.state = VisitorState::Seeking;
                    continue;
                };
                let Ok((_, fpos, bounds, _, mut interactable, dirty, clogged, anim)) =
                    fixtures.get_mut(target)
                else {
                    visitor.target = None;
                    visitor.state = VisitorState::Seeking;
                    continue;
                };

                if !pos.step_towards_x(use_spot_x(fpos, bounds), step) {
                    continue;
                }

                if clogged || dirty.is_filthy() {
                    debug!("Visitor {:?} refuses {:?}", entity, target);
                    interactable.occupant = None;
                    anger(&mut commands, &mut tip_bowls, &mut score, &pos);
                    visitor.storm_out();
                    continue;
                }

                if let (Some(mut anim), Some(busy)) = (anim, interactable.start_anim.as_ref()) {
                    anim.set(busy.clone());
                }
                visitor.state = VisitorState::Using {
                    remaining: interactable.duration,
                };
            }
            VisitorState::Using { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    visitor.state = VisitorState::Using { remaining };
                    continue;
                }

                if let Some(target) = visitor.target {
                    if let Ok((_, _, _, fixture, mut interactable, mut dirty, _, _)) =
                        fixtures.get_mut(target)
                    {
                        let was_clean = dirty.is_clean();
                        interactable.release(INTERACTION_COOLDOWN);
                        if escalate_dirt(&mut rng, fixture.kind, &mut dirty) == Escalation::Clogged
                        {
                            info!("A {} clogged up", fixture.kind.name());
                            commands.entity(target).insert(Clogged);
                        }
                        if was_clean {
                            if let Some(mut bowl) = tip_bowls.iter_mut().next() {
                                bowl.coins += 1;
                            }
                            spawn_emote(&mut commands, EmoteKind::Coin, &pos);
                        }
                    }
                }
                visitor.satisfy_current();
            }
            VisitorState::Leaving => {
                let exit_x = visitor.exit_x;
                if pos.step_towards_x(exit_x, step) {
                    if visitor.angry {
                        debug!("Visitor {:?} left angry", entity);
                    } else {
                        score.visitors_served += 1;
                        spawn_emote(&mut commands, EmoteKind::Happy, &pos);
                        debug!("Visitor {:?} left happy", entity);
                    }
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}
