//! Short-lived speech bubbles above visitors.
//!
//! Emotes are spawned together with a [`Ttl`](super::ttl::Ttl) and vanish on
//! their own.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmoteKind {
    Angry,
    Happy,
    Coin,
}

impl EmoteKind {
    pub fn anim(self) -> &'static str {
        match self {
            EmoteKind::Angry => "emote_angry",
            EmoteKind::Happy => "emote_happy",
            EmoteKind::Coin => "emote_coin",
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Emote {
    pub kind: EmoteKind,
}
