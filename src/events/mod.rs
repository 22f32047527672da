//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`player`] – commands for the janitor
pub mod gamestate;
pub mod player;
