use std::sync::Arc;

use world::{Action, Store, StoreError};

/// Catchable counter handle given to the playable game.
///
/// Validation and the exhausted/unset cases live in the reducer; this type
/// only turns calls into dispatches against the shared store.
#[derive(Clone)]
pub struct Catchables {
    store: Arc<Store>,
}

impl Catchables {
    /// Creates a handle dispatching into `store`.
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Sets the number of targets in play.
    pub fn set_number(&self, number: impl Into<f64>) -> Result<(), StoreError> {
        self.store.dispatch(Action::set_number_catchables(number))
    }

    /// Records that one target was caught.
    pub fn decrement(&self) -> Result<(), StoreError> {
        self.store.dispatch(Action::DecrementNumberCatchables)
    }

    /// Remaining targets, `None` until a count was set.
    pub fn remaining(&self) -> Option<u32> {
        self.store.state().number_of_catchables
    }
}
