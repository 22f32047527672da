//! Coin pile display.
use bevy_ecs::prelude::*;

use crate::components::anim::Anim;
use crate::components::tipbowl::TipBowl;

/// Keep the coin pile animation in step with the coins in each bowl.
pub fn coin_system(tip_bowls: Query<&TipBowl, Changed<TipBowl>>, mut anims: Query<&mut Anim>) {
    for bowl in tip_bowls.iter() {
        if let Ok(mut anim) = anims.get_mut(bowl.bowl) {
            let key = bowl.coin_anim();
            if !anim.is(&key) {
                anim.set(key);
            }
        }
    }
}
