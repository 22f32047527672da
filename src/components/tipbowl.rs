//! Tip bowl component.
//!
//! The tip module collects coins from satisfied visitors and keeps the tally
//! of angry ones. When `anger` reaches `max_anger` the shift is lost.

use bevy_ecs::prelude::*;

use crate::rules;

#[derive(Component, Debug, Clone)]
pub struct TipBowl {
    /// Entity showing the coin pile.
    pub bowl: Entity,
    /// Coins waiting to be collected.
    pub coins: u32,
    /// Visitors that left angry.
    pub anger: u32,
    /// Anger that ends the shift.
    pub max_anger: u32,
}

impl TipBowl {
    pub fn new(bowl: Entity, max_anger: u32) -> Self {
        TipBowl {
            bowl,
            coins: 0,
            anger: 0,
            max_anger,
        }
    }

    pub fn is_overflowing_with_anger(&self) -> bool {
        self.anger >= self.max_anger
    }

    /// Animation key of the coin pile for the current amount.
    pub fn coin_anim(&self) -> String {
        format!("coin_{}", self.coins.min(rules::MAX_COIN_ANIM))
    }

    /// Empty the bowl, returning what was in it.
    pub fn take_coins(&mut self) -> u32 {
        std::mem::take(&mut self.coins)
    }
}
