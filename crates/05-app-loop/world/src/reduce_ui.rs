//! Pure reducer for menu and controls visibility.

use std::sync::Arc;

use crate::store::Reducer;
use crate::types::{Action, Status};
use crate::world::GameState;

/// Owns the menu and controls visibility actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiReducer;

impl Reducer for UiReducer {
    fn reduce(&self, state: &Arc<GameState>, action: &Action) -> Arc<GameState> {
        match action {
            Action::ShowMenu => GameState::update(state, |next| {
                next.menu_visible = true;
                next.status = Status::Menu;
            }),
            Action::HideMenu => GameState::update(state, |next| next.menu_visible = false),
            Action::ShowControls => GameState::update(state, |next| next.controls_visible = true),
            Action::HideControls => GameState::update(state, |next| next.controls_visible = false),
            _ => Arc::clone(state),
        }
    }
}
