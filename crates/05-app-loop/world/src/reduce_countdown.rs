use std::sync::Arc;

use crate::store::Reducer;
use crate::types::Action;
use crate::world::GameState;

/// Mirrors the countdown's remaining time into the snapshot for display.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountdownReducer;

impl Reducer for CountdownReducer {
    fn reduce(&self, state: &Arc<GameState>, action: &Action) -> Arc<GameState> {
        match action {
            Action::SetTimeLeft(units) => GameState::update(state, |next| {
                next.time_left = Some(*units);
            }),
            _ => Arc::clone(state),
        }
    }
}
