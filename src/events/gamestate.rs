//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the hook registered for the new state in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown systems and avoids borrowing conflicts.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::{Hook, SystemsStore};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs the enter hook, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state), Some(systems_store)) = (
        next_game_state.as_deref_mut(),
        game_state.as_deref_mut(),
        systems_store.as_deref(),
    ) else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    // Clone the next state value first so we don't keep an immutable borrow while mutating.
    let next_state_value = next_game_state.get().clone();
    match next_state_value {
        Pending(new_state) => {
            if game_state.get().is_finished() && !matches!(new_state, GameStates::Quitting) {
                debug!("Shift already over, ignoring transition to {:?}", new_state);
                next_game_state.reset();
                return;
            }
            info!(
                "Transitioning from {:?} to {:?}",
                game_state.get(),
                new_state
            );
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_enter(&new_state, &mut commands, systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Internal: run the enter hook for the given state.
fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let hook = match state {
        GameStates::None => {
            debug!("Entered None state");
            return;
        }
        GameStates::Setup => Hook::Setup,
        GameStates::Playing => Hook::EnterPlay,
        GameStates::Victory | GameStates::Defeat => Hook::Finish,
        GameStates::Quitting => Hook::Quit,
    };
    match systems_store.get(hook) {
        Some(id) => commands.run_system(id),
        None => warn!("No system registered for {:?}", hook),
    }
}
