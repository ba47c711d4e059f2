//! Pure reducer for the catchable counter.

use std::sync::Arc;

use log::warn;

use crate::store::Reducer;
use crate::types::Action;
use crate::world::GameState;

/// Owns `SetNumberCatchables` and `DecrementNumberCatchables`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatchablesReducer;

impl Reducer for CatchablesReducer {
    fn reduce(&self, state: &Arc<GameState>, action: &Action) -> Arc<GameState> {
        match action {
            Action::SetNumberCatchables(number) => match catchable_count(*number) {
                Some(count) => GameState::update(state, |next| {
                    next.number_of_catchables = Some(count);
                }),
                None => {
                    warn!("set_number_catchables expects a non-negative whole number, got {number}");
                    Arc::clone(state)
                }
            },
            Action::DecrementNumberCatchables => match state.number_of_catchables {
                Some(0) => {
                    warn!("number_of_catchables is already zero");
                    Arc::clone(state)
                }
                None => {
                    warn!("number_of_catchables must be set before decrementing");
                    Arc::clone(state)
                }
                Some(count) => GameState::update(state, |next| {
                    next.number_of_catchables = Some(count - 1);
                }),
            },
            _ => Arc::clone(state),
        }
    }
}

fn catchable_count(number: f64) -> Option<u32> {
    let in_range = number.is_finite() && number >= 0.0 && number <= f64::from(u32::MAX);
    if in_range && number.fract() == 0.0 {
        Some(number as u32)
    } else {
        None
    }
}
