//! Pure lifecycle reducer.
//!
//! Transitions are total: the reducer never rejects an action. Keeping
//! combinations sensible is the orchestrator's job.

use std::sync::Arc;

use crate::store::Reducer;
use crate::types::{Action, Status};
use crate::world::GameState;

/// Owns the lifecycle actions and the controls description.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusReducer;

impl Reducer for StatusReducer {
    fn reduce(&self, state: &Arc<GameState>, action: &Action) -> Arc<GameState> {
        match action {
            Action::StartGame => GameState::update(state, |next| {
                next.status = Status::Playing;
                next.game_stopped = false;
            }),
            Action::StopGame => GameState::update(state, |next| {
                next.game_stopped = true;
            }),
            Action::ContinueGame => GameState::update(state, |next| {
                next.status = Status::Playing;
                next.game_stopped = false;
                next.menu_visible = false;
                next.controls_visible = false;
            }),
            // A concluded match is always stopped in the same snapshot.
            Action::GameWon => GameState::update(state, |next| {
                next.status = Status::Won;
                next.game_stopped = true;
            }),
            Action::GameLost => GameState::update(state, |next| {
                next.status = Status::Lost;
                next.game_stopped = true;
            }),
            Action::SetControlsDescription(description) => GameState::update(state, |next| {
                next.controls_description = Some(description.clone());
            }),
            _ => Arc::clone(state),
        }
    }
}
