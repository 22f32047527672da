//! Gameplay tick integration tests.
//!
//! Small hand-built worlds run the entrance, visitor, janitor and cooldown
//! systems for a number of ticks and check the resulting state.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use restroomrush::components::anim::Anim;
use restroomrush::components::bathroomlevel::ModuleType;
use restroomrush::components::bounds::Bounds;
use restroomrush::components::emote::Emote;
use restroomrush::components::entrance::Entrance;
use restroomrush::components::fixture::{Clogged, Dirty, Fixture, FixtureKind};
use restroomrush::components::interactable::Interactable;
use restroomrush::components::mapposition::MapPosition;
use restroomrush::components::player::Player;
use restroomrush::components::tipbowl::TipBowl;
use restroomrush::components::tool::{Inventory, ToolKind};
use restroomrush::components::visitor::{Desire, Visitor, VisitorState};
use restroomrush::events::player::{PlayerAction, player_action_observer};
use restroomrush::resources::clock::Clock;
use restroomrush::resources::gamerng::GameRng;
use restroomrush::resources::levelcatalog::{ActiveLevel, LevelDef};
use restroomrush::resources::score::Score;
use restroomrush::resources::spawnqueue::SpawnQueue;
use restroomrush::resources::tutorial::{Tutorial, TutorialStep};
use restroomrush::resources::worldtime::WorldTime;
use restroomrush::rules::*;
use restroomrush::systems::entrance::entrance_system;
use restroomrush::systems::fixture::interactable_cooldown_system;
use restroomrush::systems::player::player_system;
use restroomrush::systems::time::update_world_time;
use restroomrush::systems::visitor::visitor_system;

fn make_world(seed: u64) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameRng::with_seed(seed));
    world.insert_resource(Score::default());
    world.insert_resource(Clock::new(10.0));
    world.insert_resource(Tutorial::finished());
    world.insert_resource(SpawnQueue::default());
    world
}

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32, ticks: usize) {
    for _ in 0..ticks {
        update_world_time(world, dt);
        schedule.run(world);
    }
}

fn visitor_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((visitor_system, interactable_cooldown_system).chain());
    schedule
}

fn spawn_tip_bowl(world: &mut World, max_anger: u32) -> Entity {
    let pile = world.spawn(Anim::new("coin_0")).id();
    world.spawn(TipBowl::new(pile, max_anger)).id()
}

fn spawn_toilet(world: &mut World, x: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(x, Y_OFFSET + TOILET_Y - 11.0),
            Bounds::new(2.0, 0.0, TOILET_WIDTH, DEFAULT_MODULE_HEIGHT),
            Anim::new("module_part_door_open"),
            Interactable::new(TOILET_USE_DURATION)
                .with_anims("module_part_door_closed", "module_part_door_open"),
            Fixture::new(FixtureKind::Toilet),
            Dirty::new(0),
        ))
        .id()
}

fn count<C: Component>(world: &mut World) -> usize {
    world.query_filtered::<(), With<C>>().iter(world).count()
}

// ---------------------------------------------------------------------------
// Entrance
// ---------------------------------------------------------------------------

fn spawn_entrance(world: &mut World, delay: f32, group: u32) -> Entity {
    world
        .spawn((
            MapPosition::new(36.0, Y_OFFSET + 34.0),
            Bounds::new(16.0, 16.0, MAIN_DOOR_WIDTH, 72.0),
            Anim::new("module_part_main_door_closed"),
            Interactable::new(ENTRANCE_USE_DURATION)
                .with_anims("module_part_main_door_open", "module_part_main_door_closed"),
            Entrance::new(delay, delay, group, group),
        ))
        .id()
}

#[test]
fn entrance_releases_group_one_at_a_time() {
    let mut world = make_world(1);
    spawn_entrance(&mut world, 5.0, 2);
    let mut schedule = Schedule::default();
    schedule.add_systems(entrance_system);

    tick(&mut world, &mut schedule, 0.1, 1);
    assert_eq!(count::<Visitor>(&mut world), 1);
    assert_eq!(world.resource::<SpawnQueue>().pending, 1);

    tick(&mut world, &mut schedule, 0.1, 5);
    assert_eq!(count::<Visitor>(&mut world), 2);
    assert_eq!(world.resource::<SpawnQueue>().pending, 0);

    // Nothing more until the next group is due.
    tick(&mut world, &mut schedule, 0.1, 30);
    assert_eq!(count::<Visitor>(&mut world), 2);
}

#[test]
fn entrance_opens_door_and_spawns_at_threshold() {
    let mut world = make_world(2);
    let door = spawn_entrance(&mut world, 5.0, 1);
    let mut schedule = Schedule::default();
    schedule.add_systems(entrance_system);
    tick(&mut world, &mut schedule, 0.1, 1);

    assert!(world.get::<Anim>(door).unwrap().is("module_part_main_door_open"));
    let mut visitors = world.query::<(&Visitor, &MapPosition)>();
    let (visitor, pos) = visitors.single(&world).unwrap();
    assert_eq!(pos.x, 36.0 + 16.0);
    assert_eq!(pos.y, Y_OFFSET + 34.0 - 16.0);
    assert_eq!(visitor.exit_x, pos.x);
    assert_eq!(visitor.state, VisitorState::Seeking);
}

#[test]
fn entrance_waits_for_tutorial() {
    let mut world = make_world(3);
    world.insert_resource(Tutorial::started());
    spawn_entrance(&mut world, 1.0, 3);
    let mut schedule = Schedule::default();
    schedule.add_systems(entrance_system);
    tick(&mut world, &mut schedule, 0.1, 50);
    assert_eq!(count::<Visitor>(&mut world), 0);
}

fn spawn_one_from(world: &mut World, level: LevelDef) -> Visitor {
    world.insert_resource(ActiveLevel {
        number: 1,
        def: level,
    });
    spawn_entrance(world, 5.0, 1);
    let mut schedule = Schedule::default();
    schedule.add_systems(entrance_system);
    tick(world, &mut schedule, 0.1, 1);
    let mut visitors = world.query::<&Visitor>();
    visitors.single(world).unwrap().clone()
}

#[test]
fn visitors_wash_up_when_the_level_has_a_sink() {
    let mut world = make_world(4);
    let level = LevelDef::new(
        "With sink",
        &[
            ModuleType::Entrance,
            ModuleType::Tips,
            ModuleType::Toilet,
            ModuleType::Sink,
            ModuleType::SupplyCloset,
        ],
    );
    let visitor = spawn_one_from(&mut world, level);
    assert_eq!(visitor.desires.len(), 2);
    assert_eq!(visitor.desires.last(), Some(&Desire::Wash));
}

#[test]
fn visitors_skip_washing_without_a_sink() {
    let mut world = make_world(5);
    let level = LevelDef::new(
        "No sink",
        &[
            ModuleType::Entrance,
            ModuleType::Tips,
            ModuleType::Toilet,
            ModuleType::SupplyCloset,
        ],
    );
    let visitor = spawn_one_from(&mut world, level);
    assert_eq!(visitor.desires.len(), 1);
    assert!(!visitor.desires.contains(&Desire::Wash));
}

#[test]
fn extra_poops_level_sends_mostly_poopers() {
    let mut world = make_world(6);
    world.insert_resource(ActiveLevel {
        number: 5,
        def: LevelDef::new("Chili", &[ModuleType::Entrance, ModuleType::Toilet]).extra_poops(),
    });
    spawn_entrance(&mut world, 0.5, 1);
    let mut schedule = Schedule::default();
    schedule.add_systems(entrance_system);

    // Roughly one visitor every 0.5 s for 200 s.
    tick(&mut world, &mut schedule, 0.1, 2000);
    let mut visitors = world.query::<&Visitor>();
    let total = visitors.iter(&world).count();
    let poops = visitors
        .iter(&world)
        .filter(|v| v.current_desire() == Some(Desire::Poop))
        .count();
    assert!(total >= 300, "only {} visitors", total);
    let share = poops as f32 / total as f32;
    assert!((0.7..=0.9).contains(&share), "poop share {}", share);
}

// ---------------------------------------------------------------------------
// Visitors
// ---------------------------------------------------------------------------

#[test]
fn visitor_uses_clean_toilet_tips_and_leaves() {
    let mut world = make_world(4);
    let bowl = spawn_tip_bowl(&mut world, 3);
    let toilet = spawn_toilet(&mut world, 100.0);
    let visitor = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Visitor::new(&[Desire::Poop], VISITOR_PATIENCE, 0.0),
        ))
        .id();
    let mut schedule = visitor_schedule();

    // Reserve, walk 109 px, then sit down.
    tick(&mut world, &mut schedule, 0.1, 25);
    assert_eq!(
        world.get::<Interactable>(toilet).unwrap().occupant,
        Some(visitor)
    );
    assert!(matches!(
        world.get::<Visitor>(visitor).unwrap().state,
        VisitorState::Using { .. }
    ));
    assert!(world.get::<Anim>(toilet).unwrap().is("module_part_door_closed"));

    // Finish, walk back out.
    tick(&mut world, &mut schedule, 0.1, 80);
    assert!(world.get_entity(visitor).is_err());
    assert_eq!(world.get::<TipBowl>(bowl).unwrap().coins, 1);
    assert_eq!(world.get::<TipBowl>(bowl).unwrap().anger, 0);
    assert_eq!(world.resource::<Score>().visitors_served, 1);
    let interactable = world.get::<Interactable>(toilet).unwrap();
    assert!(interactable.is_free());
    assert!(world.get::<Anim>(toilet).unwrap().is("module_part_door_open"));
    assert!(world.get::<Dirty>(toilet).unwrap().level <= 1);
}

#[test]
fn visitor_refuses_clogged_toilet() {
    let mut world = make_world(5);
    let bowl = spawn_tip_bowl(&mut world, 3);
    let toilet = spawn_toilet(&mut world, 40.0);
    world.entity_mut(toilet).insert(Clogged);
    let visitor = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Visitor::new(&[Desire::Pee], VISITOR_PATIENCE, 0.0),
        ))
        .id();
    let mut schedule = visitor_schedule();

    tick(&mut world, &mut schedule, 0.1, 15);
    let v = world.get::<Visitor>(visitor).unwrap();
    assert!(v.angry);
    assert_eq!(v.state, VisitorState::Leaving);
    assert_eq!(world.get::<TipBowl>(bowl).unwrap().anger, 1);
    assert!(world.get::<Interactable>(toilet).unwrap().occupant.is_none());
    assert!(count::<Emote>(&mut world) >= 1);

    tick(&mut world, &mut schedule, 0.1, 30);
    assert!(world.get_entity(visitor).is_err());
    let score = world.resource::<Score>();
    assert_eq!(score.visitors_served, 0);
    assert_eq!(score.visitors_angered, 1);
}

#[test]
fn visitor_refuses_filthy_fixture() {
    let mut world = make_world(6);
    let bowl = spawn_tip_bowl(&mut world, 3);
    let toilet = spawn_toilet(&mut world, 40.0);
    *world.get_mut::<Dirty>(toilet).unwrap() = Dirty::new(MAX_DIRTY_LEVEL);
    world.spawn((
        MapPosition::new(0.0, 0.0),
        Visitor::new(&[Desire::Poop], VISITOR_PATIENCE, 0.0),
    ));
    let mut schedule = visitor_schedule();
    tick(&mut world, &mut schedule, 0.1, 15);
    assert_eq!(world.get::<TipBowl>(bowl).unwrap().anger, 1);
}

#[test]
fn visitor_loses_patience_without_a_fixture() {
    let mut world = make_world(7);
    let bowl = spawn_tip_bowl(&mut world, 3);
    // Only a sink: nowhere to poop.
    world.spawn((
        MapPosition::new(200.0, 0.0),
        Bounds::new(2.0, 0.0, SINK_WIDTH, DEFAULT_MODULE_HEIGHT),
        Interactable::new(SINK_USE_DURATION),
        Fixture::new(FixtureKind::Sink),
        Dirty::new(0),
    ));
    let visitor = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Visitor::new(&[Desire::Poop], VISITOR_PATIENCE, 0.0),
        ))
        .id();
    let mut schedule = visitor_schedule();

    tick(&mut world, &mut schedule, 0.5, 29);
    assert_eq!(world.get::<TipBowl>(bowl).unwrap().anger, 0);
    assert!(!world.get::<Visitor>(visitor).unwrap().angry);

    tick(&mut world, &mut schedule, 0.5, 2);
    assert_eq!(world.get::<TipBowl>(bowl).unwrap().anger, 1);
}

#[test]
fn two_visitors_never_share_a_toilet() {
    let mut world = make_world(8);
    spawn_tip_bowl(&mut world, 3);
    let near = spawn_toilet(&mut world, 60.0);
    let far = spawn_toilet(&mut world, 100.0);
    let first = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Visitor::new(&[Desire::Poop], VISITOR_PATIENCE, 0.0),
        ))
        .id();
    let second = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Visitor::new(&[Desire::Poop], VISITOR_PATIENCE, 0.0),
        ))
        .id();
    let mut schedule = visitor_schedule();
    tick(&mut world, &mut schedule, 0.1, 1);

    let a = world.get::<Visitor>(first).unwrap().target;
    let b = world.get::<Visitor>(second).unwrap().target;
    assert!(a.is_some() && b.is_some());
    assert_ne!(a, b);
    let mut targets = vec![a.unwrap(), b.unwrap()];
    targets.sort();
    let mut expected = vec![near, far];
    expected.sort();
    assert_eq!(targets, expected);
}

#[test]
fn visitor_washes_after_the_toilet() {
    let mut world = make_world(9);
    let bowl = spawn_tip_bowl(&mut world, 3);
    spawn_toilet(&mut world, 40.0);
    let sink = world
        .spawn((
            MapPosition::new(120.0, 0.0),
            Bounds::new(2.0, 0.0, SINK_WIDTH, DEFAULT_MODULE_HEIGHT),
            Interactable::new(SINK_USE_DURATION),
            Fixture::new(FixtureKind::Sink),
            Dirty::new(0),
        ))
        .id();
    let visitor = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Visitor::new(&[Desire::Pee, Desire::Wash], VISITOR_PATIENCE, 0.0),
        ))
        .id();
    let mut schedule = visitor_schedule();

    // Walk 49 px, use for 4 s, then head for the sink.
    tick(&mut world, &mut schedule, 0.1, 60);
    assert_eq!(world.get::<Visitor>(visitor).unwrap().target, Some(sink));

    tick(&mut world, &mut schedule, 0.1, 100);
    assert!(world.get_entity(visitor).is_err());
    assert_eq!(world.get::<TipBowl>(bowl).unwrap().coins, 2);
}

// ---------------------------------------------------------------------------
// Janitor
// ---------------------------------------------------------------------------

fn janitor_world() -> (World, Entity, Entity) {
    let mut world = make_world(10);
    world.insert_resource(Tutorial::started());
    world.spawn(Observer::new(player_action_observer));
    world.flush();
    let closet = world
        .spawn((
            MapPosition::new(200.0, Y_OFFSET),
            Bounds::new(0.0, 0.0, SUPPLY_CLOSET_WIDTH, DEFAULT_MODULE_HEIGHT),
            Inventory,
        ))
        .id();
    let player = world
        .spawn((
            Player::default(),
            MapPosition::new(0.0, Y_OFFSET),
            Anim::new("player_idle"),
        ))
        .id();
    (world, closet, player)
}

#[test]
fn equip_action_walks_to_the_closet() {
    let (mut world, closet, player) = janitor_world();
    world.trigger(PlayerAction::Equip(ToolKind::Unclog));
    world.flush();

    let task = world.get::<Player>(player).unwrap().task.unwrap();
    assert_eq!(task.target, closet);
    assert_eq!(task.target_x, 200.0 + SUPPLY_CLOSET_WIDTH * 0.5);

    let mut schedule = Schedule::default();
    schedule.add_systems(player_system);
    // 212 px at 80 px/s.
    tick(&mut world, &mut schedule, 0.1, 30);
    let p = world.get::<Player>(player).unwrap();
    assert!(p.is_idle());
    assert_eq!(p.tool, Some(ToolKind::Unclog));
    assert!(world.get::<Anim>(player).unwrap().is("player_plunger"));
}

#[test]
fn janitor_unclogs_then_cleans_through_tutorial() {
    let (mut world, _, player) = janitor_world();
    let toilet = spawn_toilet(&mut world, 60.0);
    world.entity_mut(toilet).insert((Clogged, Dirty::new(1)));
    let mut schedule = Schedule::default();
    schedule.add_systems(player_system);

    for (tool, step) in [
        (ToolKind::Unclog, TutorialStep::Clean),
        (ToolKind::Clean, TutorialStep::Done),
    ] {
        world.trigger(PlayerAction::Equip(tool));
        world.flush();
        tick(&mut world, &mut schedule, 0.1, 40);
        world.trigger(PlayerAction::Service(toilet));
        world.flush();
        tick(&mut world, &mut schedule, 0.1, 40);
        assert!(world.get::<Player>(player).unwrap().is_idle());
        assert_eq!(world.resource::<Tutorial>().step(), step);
    }

    assert!(!world.entity(toilet).contains::<Clogged>());
    assert!(world.get::<Dirty>(toilet).unwrap().is_clean());
}

#[test]
fn collect_tips_moves_coins_to_score() {
    let (mut world, _, player) = janitor_world();
    let tips = world.spawn_empty().id();
    let pile = world.spawn(Anim::new("coin_0")).id();
    let mut bowl = TipBowl::new(pile, 3);
    bowl.coins = 5;
    world.entity_mut(tips).insert((
        bowl,
        MapPosition::new(96.0, Y_OFFSET),
        Bounds::new(0.0, 0.0, TIPS_WIDTH, DEFAULT_MODULE_HEIGHT),
    ));

    world.trigger(PlayerAction::CollectTips);
    world.flush();
    let mut schedule = Schedule::default();
    schedule.add_systems(player_system);
    tick(&mut world, &mut schedule, 0.1, 20);

    assert!(world.get::<Player>(player).unwrap().is_idle());
    assert_eq!(world.get::<TipBowl>(tips).unwrap().coins, 0);
    assert_eq!(world.resource::<Score>().tips_collected, 5);
}
