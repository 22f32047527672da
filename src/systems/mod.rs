//! Gameplay systems.
//!
//! This module groups all ECS systems that advance the shift. They run once
//! per tick in the order set up by [`crate::game::build_schedule`].
//!
//! Submodules overview
//! - [`autopilot`] – built-in janitor bot issuing player actions
//! - [`clock`] – advance the shift clock
//! - [`entrance`] – difficulty scaling and visitor arrival
//! - [`fixture`] – dirt escalation and interaction cooldowns
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`levelsetup`] – spawn the modules of a freshly loaded level
//! - [`outcome`] – decide victory or defeat
//! - [`player`] – janitor movement and task completion
//! - [`status`] – publish HUD values to world signals
//! - [`time`] – update simulation time and delta
//! - [`tips`] – keep the coin pile in step with the tip bowl
//! - [`ttl`] – despawn expired emotes
//! - [`visitor`] – visitor needs, fixture use, tips and anger

pub mod autopilot;
pub mod clock;
pub mod entrance;
pub mod fixture;
pub mod gamestate;
pub mod levelsetup;
pub mod outcome;
pub mod player;
pub mod status;
pub mod time;
pub mod tips;
pub mod ttl;
pub mod visitor;
