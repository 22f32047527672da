use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use bevy_ecs::prelude::*;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    // A pending change is applied by the GameStateChangedEvent observer.
    if next_state.is_pending() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}
