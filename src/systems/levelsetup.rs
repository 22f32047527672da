//! Procedural facility assembly.
//!
//! [`level_setup_system`] picks up every [`BathroomLevel`] that has not been
//! initialized yet and spawns its modules left to right along the floor,
//! starting at x = 0 and advancing by each module's width. A module is made
//! of several entities (backdrop, fixture, door, props); the one that
//! represents the module is recorded in
//! [`BathroomLevel::module_entities`].
//!
//! Tuning that varies per stage (spawn delays, group sizes, loss count,
//! whether fixtures start dirty) comes from the [`ActiveLevel`] resource. If
//! none is present the [`LevelDef`] defaults are used.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::anim::Anim;
use crate::components::bathroomlevel::{BathroomLevel, ModuleType};
use crate::components::bounds::Bounds;
use crate::components::entrance::{Entrance, Exit};
use crate::components::fixture::{Clogged, Dirty, Fixture, FixtureKind, Toilet};
use crate::components::interactable::Interactable;
use crate::components::layer::{
    LAYER_BACKGROUND, LAYER_BEHIND_ACTORS, LAYER_PLAYER, LAYER_TOILET_DOOR, Layer,
};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::tipbowl::TipBowl;
use crate::components::tool::{Inventory, Tool, ToolKind};
use crate::resources::gamerng::GameRng;
use crate::resources::levelcatalog::{ActiveLevel, LevelDef};
use crate::rules::*;

/// Spawns the modules of uninitialized [`BathroomLevel`]s.
pub fn level_setup_system(
    mut commands: Commands,
    mut levels: Query<&mut BathroomLevel>,
    active: Option<Res<ActiveLevel>>,
    mut rng: ResMut<GameRng>,
) {
    for mut level in levels.iter_mut() {
        if level.initialized {
            continue;
        }
        level.initialized = true;

        let def = active
            .as_ref()
            .map(|a| a.def.clone())
            .unwrap_or_else(|| LevelDef::new(level.name.clone(), &level.modules));

        let modules = level.modules.clone();
        let mut builder = FacilityBuilder {
            commands: &mut commands,
            rng: &mut *rng,
            def: &def,
            module_count: modules.len(),
            x: 0.0,
        };
        for (index, module) in modules.iter().enumerate() {
            let id = builder.spawn_module(*module, index);
            level.module_entities.push(id);
        }

        info!(
            "Assembled '{}' with {} modules ({} px wide)",
            level.name,
            modules.len(),
            builder.x
        );
    }
}

/// Backdrop variant for the module at `index`: the west wall sits behind the
/// first stall, the east wall behind the last one before the closet.
pub fn background_anim(index: usize, module_count: usize) -> &'static str {
    if index == 2 {
        "module_part_backgroundW"
    } else if module_count >= 2 && index == module_count - 2 {
        "module_part_backgroundE"
    } else {
        "module_part_background"
    }
}

struct FacilityBuilder<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    rng: &'a mut GameRng,
    def: &'a LevelDef,
    module_count: usize,
    x: f32,
}

impl FacilityBuilder<'_, '_, '_> {
    fn spawn_module(&mut self, module: ModuleType, index: usize) -> Entity {
        let (x, y) = (self.x, Y_OFFSET);
        let id = match module {
            ModuleType::Entrance => self.spawn_entrance(x, y),
            ModuleType::Tips => self.spawn_tips(x, y),
            ModuleType::Toilet => self.spawn_toilet(x, y, index),
            ModuleType::Poster => self.spawn_poster(x, y, index),
            ModuleType::Urinal => self.spawn_urinal(x, y, index),
            ModuleType::Sink => self.spawn_sink(x, y, index),
            ModuleType::SupplyCloset => self.spawn_closet(x, y),
        };
        debug!("Spawned {:?} at x={} as {:?}", module, x, id);
        self.x += module.width();
        id
    }

    fn random_poster(&mut self) -> String {
        format!("poster_{}", self.rng.range_u32(1, POSTER_VARIANTS))
    }

    fn spawn_background(&mut self, x: f32, y: f32, index: usize) {
        self.commands.spawn((
            MapPosition::new(x, y),
            Layer(LAYER_BACKGROUND),
            Anim::new(background_anim(index, self.module_count)),
        ));
    }

    fn spawn_entrance(&mut self, x: f32, y: f32) -> Entity {
        self.commands.spawn((
            MapPosition::new(x, y),
            Layer::default(),
            Bounds::new(32.0, 0.0, ENTRANCE_WIDTH, DEFAULT_MODULE_HEIGHT),
            Anim::new("module_entrance"),
        ));

        if self.rng.range_u32(1, 4) <= 3 {
            let poster = self.random_poster();
            self.commands.spawn((
                MapPosition::new(x + 64.0 + 3.0, y + 59.0),
                Layer::default(),
                Bounds::new(0.0, 0.0, POSTER_WIDTH, DEFAULT_MODULE_HEIGHT),
                Anim::new(poster),
            ));
        }

        self.commands
            .spawn((
                MapPosition::new(x + 32.0 + 4.0, y + 34.0),
                Bounds::new(16.0, 16.0, MAIN_DOOR_WIDTH, 72.0),
                Layer(LAYER_TOILET_DOOR),
                Anim::new("module_part_main_door_closed"),
                Interactable::new(ENTRANCE_USE_DURATION)
                    .with_anims("module_part_main_door_open", "module_part_main_door_closed"),
                Entrance::new(
                    self.def.time_between_spawns_easiest,
                    self.def.time_between_spawns_hardest,
                    self.def.min_count,
                    self.def.max_count,
                ),
                Exit,
            ))
            .id()
    }

    fn spawn_tips(&mut self, x: f32, y: f32) -> Entity {
        self.commands.spawn((
            MapPosition::new(x, y + TOILET_Y - 20.0),
            Bounds::new(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT),
            Layer(LAYER_PLAYER),
            Player::default(),
            Anim::new("player_idle"),
        ));

        let bowl = self
            .commands
            .spawn((
                MapPosition::new(x + 2.0, y + TOILET_Y + 2.0),
                Layer(LAYER_BEHIND_ACTORS),
                Anim::new("coin_0"),
            ))
            .id();

        self.commands
            .spawn((
                MapPosition::new(x, y),
                Layer::default(),
                Bounds::new(0.0, 0.0, TIPS_WIDTH, DEFAULT_MODULE_HEIGHT),
                Anim::new("module_tips"),
                TipBowl::new(bowl, self.def.loss_count),
                Interactable::new(0.0),
            ))
            .id()
    }

    fn spawn_toilet(&mut self, x: f32, y: f32, index: usize) -> Entity {
        self.spawn_background(x, y, index);

        let bowl = self
            .commands
            .spawn((
                MapPosition::new(x, y + TOILET_Y),
                Layer(LAYER_BEHIND_ACTORS),
                Anim::new("module_part_toilet"),
            ))
            .id();

        let (door_closed, door_open) = if self.rng.range_u32(1, 100) < 20 {
            (
                "module_part_handicap_door_closed",
                "module_part_handicap_door_open",
            )
        } else {
            ("module_part_door_closed", "module_part_door_open")
        };
        let initial = if self.rng.coin_flip() {
            door_closed
        } else {
            door_open
        };

        let start_dirty = self.def.start_dirty;
        let mut toilet = self.commands.spawn((
            MapPosition::new(x + 4.0, y + TOILET_Y - 11.0),
            Bounds::new(2.0, 0.0, TOILET_WIDTH, DEFAULT_MODULE_HEIGHT),
            Layer(LAYER_TOILET_DOOR),
            Anim::new(initial),
            Interactable::new(TOILET_USE_DURATION)
                .with_anims(door_closed, door_open)
                .with_use_offset_y(38.0),
            Fixture::new(FixtureKind::Toilet),
            Toilet { bowl },
            Dirty::new(u8::from(start_dirty)),
        ));
        if start_dirty {
            toilet.insert(Clogged);
        }
        toilet.id()
    }

    fn spawn_urinal(&mut self, x: f32, y: f32, index: usize) -> Entity {
        self.spawn_background(x, y, index);

        self.commands
            .spawn((
                MapPosition::new(x, y + TOILET_Y + 30.0),
                Bounds::new(2.0, 0.0, URINAL_WIDTH, DEFAULT_MODULE_HEIGHT),
                Layer(LAYER_BEHIND_ACTORS),
                Anim::new("module_part_urinal"),
                Interactable::new(URINAL_USE_DURATION).with_use_offset_y(44.0),
                Fixture::new(FixtureKind::Urinal),
                Dirty::new(u8::from(self.def.start_dirty)),
            ))
            .id()
    }

    fn spawn_poster(&mut self, x: f32, y: f32, index: usize) -> Entity {
        self.spawn_background(x, y, index);

        let poster = self.random_poster();
        self.commands
            .spawn((
                MapPosition::new(x + 3.0, y + 92.0),
                Layer(LAYER_BACKGROUND + 1),
                Bounds::new(0.0, 0.0, POSTER_WIDTH, DEFAULT_MODULE_HEIGHT),
                Anim::new(poster),
            ))
            .id()
    }

    fn spawn_sink(&mut self, x: f32, y: f32, index: usize) -> Entity {
        self.spawn_background(x, y, index);

        let dirt = if self.def.start_dirty {
            self.rng.range_u32(0, 2) as u8
        } else {
            0
        };
        self.commands
            .spawn((
                MapPosition::new(x, y + TOILET_Y + 32.0),
                Bounds::new(2.0, 0.0, SINK_WIDTH, DEFAULT_MODULE_HEIGHT),
                Layer(LAYER_BEHIND_ACTORS),
                Anim::new("module_part_sink"),
                Interactable::new(SINK_USE_DURATION).with_use_offset_y(44.0),
                Fixture::new(FixtureKind::Sink),
                Dirty::new(dirt),
            ))
            .id()
    }

    fn spawn_closet(&mut self, x: f32, y: f32) -> Entity {
        let closet = self
            .commands
            .spawn((
                MapPosition::new(x, y),
                Layer::default(),
                Bounds::new(0.0, 0.0, SUPPLY_CLOSET_WIDTH, DEFAULT_MODULE_HEIGHT),
                Anim::new("module_storage"),
                Interactable::new(0.0),
                Inventory,
            ))
            .id();

        self.commands.spawn((
            MapPosition::new(x, y),
            Layer::default(),
            Anim::new("tool_mop_and_bucket"),
            Tool {
                kind: ToolKind::Clean,
            },
        ));
        self.commands.spawn((
            MapPosition::new(x, y),
            Layer::default(),
            Anim::new("tool_plunger"),
            Tool {
                kind: ToolKind::Unclog,
            },
        ));

        closet
    }
}
