//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, the level being played,
//! shift-wide counters, randomness and configuration. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `autopilot` – presence lets the janitor bot play
//! - `clock` – in-game wall clock driving difficulty and victory
//! - `gameconfig` – INI-backed run configuration
//! - `gamerng` – seeded random source
//! - `gamestate` – authoritative and pending high-level game state
//! - `levelcatalog` – stage definitions and the active stage
//! - `score` – shift totals
//! - `spawnqueue` – visitors waiting at the entrance
//! - `systemsstore` – state-entry hooks by name
//! - `tutorial` – tutorial progress
//! - `worldsignals` – HUD values and outcome
//! - `worldtime` – simulation time and delta
pub mod autopilot;
pub mod clock;
pub mod gameconfig;
pub mod gamerng;
pub mod gamestate;
pub mod levelcatalog;
pub mod score;
pub mod spawnqueue;
pub mod systemsstore;
pub mod tutorial;
pub mod worldsignals;
pub mod worldtime;
