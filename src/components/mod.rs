//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the restroom. Components are plain data; the systems in
//! [`crate::systems`] select entities by the combination of components they
//! carry.
//!
//! Submodules overview:
//! - [`anim`] – key of the sprite/animation an entity shows
//! - [`bathroomlevel`] – facility definition consumed by level setup
//! - [`bounds`] – axis-aligned bounds relative to the position
//! - [`emote`] – short-lived reaction bubbles
//! - [`entrance`] – visitor spawn throttling on the main door, exit marker
//! - [`fixture`] – toilets, urinals, sinks, dirt and clogs
//! - [`interactable`] – use duration, occupancy and cooldown
//! - [`label`] – HUD text
//! - [`layer`] – drawing order hint
//! - [`mapposition`] – world-space position
//! - [`player`] – the janitor and their current task
//! - [`tipbowl`] – collected coins and visitor anger
//! - [`tool`] – closet tools and the closet itself
//! - [`ttl`] – despawn after a delay
//! - [`visitor`] – visitor desires and state

pub mod anim;
pub mod bathroomlevel;
pub mod bounds;
pub mod emote;
pub mod entrance;
pub mod fixture;
pub mod interactable;
pub mod label;
pub mod layer;
pub mod mapposition;
pub mod player;
pub mod tipbowl;
pub mod tool;
pub mod ttl;
pub mod visitor;
