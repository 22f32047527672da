//! Gameplay tuning constants and module dimensions.

pub const PERCENTAGE_CHANCE_OF_SINK_DIRTY_ESCALATION: u32 = 50;
pub const PERCENTAGE_CHANCE_OF_URINAL_DIRTY_ESCALATION: u32 = 50;
pub const PERCENTAGE_CHANCE_OF_TOILET_DIRTY_ESCALATION: u32 = 75;
/// Pixels per second.
pub const WALKING_SPEED_VISITORS: f32 = 50.0;
pub const WALKING_SPEED_PLAYER: f32 = 80.0;

pub const MAX_DIRTY_LEVEL: u8 = 3;
pub const MAX_COIN_ANIM: u32 = 5;

/// Seconds a fixture rests after a use.
pub const INTERACTION_COOLDOWN: f32 = 0.5;
/// Seconds a visitor waits for a free fixture before storming out.
pub const VISITOR_PATIENCE: f32 = 15.0;
/// Chance (percent) a visitor wants to poop when the level has extra poops.
pub const EXTRA_POOPS_CHANCE: u32 = 80;
/// Largest group a level may send through the door at once.
pub const MAX_GROUP_SIZE: u32 = 16;
pub const EMOTE_TTL: f32 = 1.0;

/// The shift starts at 08:00 and lasts ten hours.
pub const SHIFT_START_HOUR: u32 = 8;
pub const MINUTES_IN_SHIFT: f32 = 600.0;
/// Difficulty peaks one hour before the shift ends.
pub const MINUTES_TILL_VICTORY_MINUS_ONE_HOUR: f32 = 540.0;

// Facility layout.
pub const Y_OFFSET: f32 = 25.0;
pub const TOILET_Y: f32 = 48.0;
pub const DEFAULT_MODULE_HEIGHT: f32 = 128.0;
pub const ENTRANCE_WIDTH: f32 = 96.0;
pub const MAIN_DOOR_WIDTH: f32 = 32.0;
pub const TIPS_WIDTH: f32 = 32.0;
pub const TOILET_WIDTH: f32 = 40.0;
pub const URINAL_WIDTH: f32 = 40.0;
pub const POSTER_WIDTH: f32 = 40.0;
pub const SINK_WIDTH: f32 = 40.0;
pub const SUPPLY_CLOSET_WIDTH: f32 = 48.0;
pub const VISITOR_WIDTH: f32 = 24.0;
pub const PLAYER_WIDTH: f32 = 24.0;
pub const PLAYER_HEIGHT: f32 = 48.0;

pub const POSTER_VARIANTS: u32 = 8;

// Seconds one use takes.
pub const ENTRANCE_USE_DURATION: f32 = 0.25;
pub const TOILET_USE_DURATION: f32 = 4.0;
pub const URINAL_USE_DURATION: f32 = 1.5;
pub const SINK_USE_DURATION: f32 = 1.0;

/// Coins in the bowl before the autopilot bothers collecting.
pub const AUTOPILOT_COLLECT_THRESHOLD: u32 = 3;
