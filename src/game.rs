//! Game assembly and the headless driver.
//!
//! [`build_world`] inserts every resource, registers the state-entry hooks in
//! the [`SystemsStore`] and spawns the observers. [`build_schedule`] lists the
//! per-tick systems in the order they must run. [`run_headless`] puts both
//! together and plays one shift with a fixed delta.

use std::fmt;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{error, info, warn};

use crate::components::bathroomlevel::BathroomLevel;
use crate::components::label::Label;
use crate::components::layer::{LAYER_ICONS, Layer};
use crate::components::mapposition::MapPosition;
use crate::components::tipbowl::TipBowl;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::player::player_action_observer;
use crate::resources::autopilot::Autopilot;
use crate::resources::clock::Clock;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamerng::GameRng;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::levelcatalog::{ActiveLevel, LevelCatalog};
use crate::resources::score::Score;
use crate::resources::spawnqueue::SpawnQueue;
use crate::resources::systemsstore::{Hook, SystemsStore};
use crate::resources::tutorial::Tutorial;
use crate::resources::worldsignals::{
    FLAG_FINISHED, FLAG_QUIT, SIGNAL_CLOCK, SIGNAL_LEVEL_NAME, SIGNAL_OUTCOME,
    SIGNAL_TUTORIAL_HINT, WorldSignals,
};
use crate::resources::worldtime::WorldTime;
use crate::systems::autopilot::autopilot_system;
use crate::systems::clock::clock_system;
use crate::systems::entrance::entrance_system;
use crate::systems::fixture::interactable_cooldown_system;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::levelsetup::level_setup_system;
use crate::systems::outcome::outcome_system;
use crate::systems::player::player_system;
use crate::systems::status::status_system;
use crate::systems::time::update_world_time;
use crate::systems::tips::coin_system;
use crate::systems::ttl::ttl_system;
use crate::systems::visitor::visitor_system;

/// Setup hook: pick the level, reset the shift and spawn the facility.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    catalog: Res<LevelCatalog>,
    mut next_state: ResMut<NextGameState>,
    mut signals: ResMut<WorldSignals>,
) {
    let Some(def) = catalog.select(config.level) else {
        error!("Level catalog is empty, nothing to play");
        next_state.set(GameStates::Quitting);
        return;
    };
    let number = config.level.clamp(1, catalog.len() as i64) as usize;
    info!("Loading level {}: {}", number, def.name);

    commands.insert_resource(Clock::new(def.clock_speed));
    commands.insert_resource(if def.tutorial {
        Tutorial::started()
    } else {
        Tutorial::finished()
    });
    commands.insert_resource(SpawnQueue::default());
    commands.insert_resource(Score::default());
    commands.insert_resource(ActiveLevel {
        number,
        def: def.clone(),
    });

    commands.spawn(BathroomLevel::new(def.name.clone(), def.modules.clone()));
    commands.spawn((
        MapPosition::new(32.0, 20.0),
        Layer(LAYER_ICONS),
        Label::new(def.name.clone())
            .with_scale(1.5)
            .with_tint(0.3, 0.3, 0.3, 1.0),
    ));

    signals.set_string(SIGNAL_LEVEL_NAME, &def.name);
    signals.clear_flag(FLAG_FINISHED);
    signals.strings.remove(SIGNAL_OUTCOME);

    next_state.set(GameStates::Playing);
}

/// Playing hook: the doors open.
pub fn enter_play(
    active: Option<Res<ActiveLevel>>,
    tutorial: Res<Tutorial>,
    clock: Res<Clock>,
    mut signals: ResMut<WorldSignals>,
) {
    match active {
        Some(active) => info!(
            "Shift starts on level {} ({}), {} angry visitors allowed",
            active.number, active.def.name, active.def.loss_count
        ),
        None => warn!("Entered play without an active level"),
    }
    if !tutorial.is_done() {
        info!("Tutorial: {}", tutorial.step().hint());
    }
    signals.set_string(SIGNAL_CLOCK, &clock.display());
    signals.set_string(SIGNAL_TUTORIAL_HINT, tutorial.step().hint());
}

/// Victory/defeat hook: record the outcome.
pub fn finish_game(
    state: Res<GameState>,
    clock: Res<Clock>,
    score: Res<Score>,
    mut signals: ResMut<WorldSignals>,
) {
    let outcome = match state.get() {
        GameStates::Victory => "victory",
        GameStates::Defeat => "defeat",
        other => {
            warn!("finish_game ran in state {:?}", other);
            return;
        }
    };
    signals.set_string(SIGNAL_OUTCOME, outcome);
    signals.set_flag(FLAG_FINISHED);
    info!(
        "Shift ended in {} at {}: {} tips, {} served, {} angered, {} cleaned, {} unclogged",
        outcome,
        clock.display(),
        score.tips_collected,
        score.visitors_served,
        score.visitors_angered,
        score.fixtures_cleaned,
        score.toilets_unclogged
    );
}

/// Quitting hook.
pub fn quit_game(mut signals: ResMut<WorldSignals>) {
    info!("Quitting");
    signals.set_flag(FLAG_QUIT);
}

/// Create a world ready to enter [`GameStates::Setup`].
pub fn build_world(config: GameConfig, catalog: LevelCatalog) -> World {
    let mut world = World::new();

    let rng = config.seed.map_or_else(GameRng::default, GameRng::with_seed);
    if config.autopilot {
        world.insert_resource(Autopilot);
    }
    world.insert_resource(rng);
    world.insert_resource(config);
    world.insert_resource(catalog);
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(Clock::default());
    world.insert_resource(Tutorial::default());
    world.insert_resource(SpawnQueue::default());
    world.insert_resource(Score::default());

    let mut systems_store = SystemsStore::new();
    systems_store.insert(Hook::Setup, world.register_system(setup));
    systems_store.insert(Hook::EnterPlay, world.register_system(enter_play));
    systems_store.insert(Hook::Finish, world.register_system(finish_game));
    systems_store.insert(Hook::Quit, world.register_system(quit_game));
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(player_action_observer));
    world.flush();

    world
}

/// Per-tick systems, in order.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            level_setup_system,
            clock_system.run_if(state_is_playing),
            entrance_system.run_if(state_is_playing),
            visitor_system.run_if(state_is_playing),
            interactable_cooldown_system,
            player_system.run_if(state_is_playing),
            autopilot_system
                .run_if(state_is_playing)
                .run_if(resource_exists::<Autopilot>),
            coin_system,
            ttl_system,
            status_system,
            outcome_system.run_if(state_is_playing),
            check_pending_state,
        )
            .chain(),
    );
    update
}

/// Summary of a headless run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub level_number: usize,
    pub level_name: String,
    pub final_state: GameStates,
    /// Wall clock of the shift when the run stopped.
    pub clock: String,
    pub elapsed: f32,
    pub ticks: u64,
    pub score: Score,
    pub anger: u32,
    pub coins_left: u32,
}

impl RunReport {
    fn collect(world: &mut World) -> Self {
        let (level_number, level_name) = world
            .get_resource::<ActiveLevel>()
            .map_or((0, String::new()), |a| (a.number, a.def.name.clone()));
        let (anger, coins_left) = world
            .query::<&TipBowl>()
            .iter(world)
            .fold((0, 0), |(a, c), b| (a + b.anger, c + b.coins));
        let time = world.resource::<WorldTime>();
        RunReport {
            level_number,
            level_name,
            final_state: world.resource::<GameState>().get().clone(),
            clock: world.resource::<Clock>().display(),
            elapsed: time.elapsed,
            ticks: time.frame_count,
            score: *world.resource::<Score>(),
            anger,
            coins_left,
        }
    }

    pub fn is_victory(&self) -> bool {
        self.final_state == GameStates::Victory
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Level {}: {}", self.level_number, self.level_name)?;
        writeln!(
            f,
            "Result: {:?} at {} after {:.1}s ({} ticks)",
            self.final_state, self.clock, self.elapsed, self.ticks
        )?;
        writeln!(
            f,
            "Tips: {} collected, {} left in the bowl",
            self.score.tips_collected, self.coins_left
        )?;
        writeln!(
            f,
            "Visitors: {} served, {} angered (anger {})",
            self.score.visitors_served, self.score.visitors_angered, self.anger
        )?;
        write!(
            f,
            "Janitor: {} cleaned, {} unclogged",
            self.score.fixtures_cleaned, self.score.toilets_unclogged
        )
    }
}

fn run_is_over(world: &World) -> bool {
    let state = world.resource::<GameState>().get();
    state.is_finished()
        || *state == GameStates::Quitting
        || world.resource::<WorldSignals>().has_flag(FLAG_QUIT)
}

/// Play one shift without a window until it is won, lost, or
/// `max_seconds` of simulated time have passed.
pub fn run_headless(config: GameConfig, catalog: LevelCatalog) -> RunReport {
    let dt = config.frame_delta();
    let max_seconds = config.max_seconds;
    let mut world = build_world(config, catalog);
    let mut update = build_schedule();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    while !run_is_over(&world) {
        if world.resource::<WorldTime>().elapsed >= max_seconds {
            warn!("Stopped after {:.1}s without an outcome", max_seconds);
            break;
        }
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
    }

    RunReport::collect(&mut world)
}
