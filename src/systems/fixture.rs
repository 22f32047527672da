//! Dirt escalation and interaction cooldowns.
//!
//! Every use of a toilet, urinal or sink has a chance to make it dirtier
//! (toilets 75%, urinals and sinks 50%). Dirt tops out at
//! [`MAX_DIRTY_LEVEL`](crate::rules::MAX_DIRTY_LEVEL); a toilet that gets that filthy clogs.
//!
//! [`interactable_cooldown_system`] lets fixtures rest after a use and swings
//! doors back to their idle animation once they are free again.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::anim::Anim;
use crate::components::fixture::{Dirty, FixtureKind};
use crate::components::interactable::Interactable;
use crate::resources::gamerng::GameRng;
use crate::resources::worldtime::WorldTime;

/// What one use did to a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    Unchanged,
    Dirtier,
    Clogged,
}

/// Roll the fixture's escalation chance.
pub fn roll_escalation(rng: &mut GameRng, kind: FixtureKind) -> bool {
    rng.percent(kind.escalation_chance())
}

/// Apply a successful escalation roll to `dirty`.
pub fn apply_escalation(kind: FixtureKind, dirty: &mut Dirty) -> Escalation {
    let raised = dirty.escalate();
    if kind == FixtureKind::Toilet && dirty.is_filthy() {
        Escalation::Clogged
    } else if raised {
        Escalation::Dirtier
    } else {
        Escalation::Unchanged
    }
}

/// Roll and apply escalation for one use.
pub fn escalate_dirt(rng: &mut GameRng, kind: FixtureKind, dirty: &mut Dirty) -> Escalation {
    if !roll_escalation(rng, kind) {
        return Escalation::Unchanged;
    }
    let result = apply_escalation(kind, dirty);
    debug!("{} escalation: {:?} (level {})", kind.name(), result, dirty.level);
    result
}

/// Count down interaction cooldowns and close doors of idle fixtures.
pub fn interactable_cooldown_system(
    time: Res<WorldTime>,
    mut query: Query<(&mut Interactable, Option<&mut Anim>)>,
) {
    let dt = time.delta;
    for (mut interactable, anim) in query.iter_mut() {
        if interactable.cooldown <= 0.0 {
            continue;
        }
        interactable.cooldown = (interactable.cooldown - dt).max(0.0);
        if interactable.cooldown > 0.0 || interactable.occupant.is_some() {
            continue;
        }
        if let (Some(mut anim), Some(idle)) = (anim, interactable.end_anim.as_ref()) {
            if !anim.is(idle) {
                anim.set(idle.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MAX_DIRTY_LEVEL;

    #[test]
    fn test_apply_escalation_raises_level() {
        let mut dirty = Dirty::default();
        assert_eq!(
            apply_escalation(FixtureKind::Sink, &mut dirty),
            Escalation::Dirtier
        );
        assert_eq!(dirty.level, 1);
    }

    #[test]
    fn test_filthy_toilet_clogs() {
        let mut dirty = Dirty::new(MAX_DIRTY_LEVEL);
        assert_eq!(
            apply_escalation(FixtureKind::Toilet, &mut dirty),
            Escalation::Clogged
        );
        assert_eq!(dirty.level, MAX_DIRTY_LEVEL);
    }

    #[test]
    fn test_toilet_reaching_max_dirt_clogs() {
        let mut dirty = Dirty::new(MAX_DIRTY_LEVEL - 1);
        assert_eq!(
            apply_escalation(FixtureKind::Toilet, &mut dirty),
            Escalation::Clogged
        );
        assert!(dirty.is_filthy());
    }

    #[test]
    fn test_filthy_urinal_stays_filthy() {
        let mut dirty = Dirty::new(MAX_DIRTY_LEVEL);
        assert_eq!(
            apply_escalation(FixtureKind::Urinal, &mut dirty),
            Escalation::Unchanged
        );
    }

    #[test]
    fn test_escalation_rate_roughly_matches_chance() {
        let mut rng = GameRng::with_seed(1234);
        let rolls = 4000;
        let hits = (0..rolls)
            .filter(|_| roll_escalation(&mut rng, FixtureKind::Toilet))
            .count();
        let rate = hits as f32 / rolls as f32;
        assert!((0.70..0.80).contains(&rate), "rate was {}", rate);
    }

    #[test]
    fn test_cooldown_closes_door() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.3,
            ..Default::default()
        });
        let mut interactable = Interactable::new(0.25).with_anims("open", "closed");
        interactable.cooldown = 0.25;
        let door = world.spawn((interactable, Anim::new("open"))).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(interactable_cooldown_system);
        schedule.run(&mut world);

        assert_eq!(world.get::<Interactable>(door).unwrap().cooldown, 0.0);
        assert!(world.get::<Anim>(door).unwrap().is("closed"));
    }

    #[test]
    fn test_cooldown_keeps_occupied_door() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 1.0,
            ..Default::default()
        });
        let visitor = world.spawn_empty().id();
        let mut interactable = Interactable::new(1.0).with_anims("closed", "open");
        interactable.cooldown = 0.5;
        interactable.occupant = Some(visitor);
        let toilet = world.spawn((interactable, Anim::new("closed"))).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(interactable_cooldown_system);
        schedule.run(&mut world);

        assert!(world.get::<Anim>(toilet).unwrap().is("closed"));
    }
}
