//! Snapshot store with serialized, non-reentrant dispatch.
//!
//! Readers get the current [`GameState`] as an `Arc` that stays valid no
//! matter how many transitions happen afterwards. Writers go through
//! [`Store::dispatch`], which runs the reducer under a lock and swaps the
//! snapshot in one step.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;
use log::debug;
use parking_lot::ReentrantMutex;
use thiserror::Error;

use crate::reduce_catchables::CatchablesReducer;
use crate::reduce_countdown::CountdownReducer;
use crate::reduce_status::StatusReducer;
use crate::reduce_ui::UiReducer;
use crate::types::Action;
use crate::world::GameState;

/// Pure `(state, action) -> state` function.
///
/// Implementations must return `Arc::clone(state)` for actions they do not
/// handle, and should return it for handled actions that change nothing.
pub trait Reducer: Send + Sync {
    /// Computes the snapshot following `action`.
    fn reduce(&self, state: &Arc<GameState>, action: &Action) -> Arc<GameState>;
}

/// Composes the slice reducers in a fixed order.
#[derive(Debug, Default, Clone, Copy)]
pub struct RootReducer;

impl Reducer for RootReducer {
    fn reduce(&self, state: &Arc<GameState>, action: &Action) -> Arc<GameState> {
        let state = CatchablesReducer.reduce(state, action);
        let state = StatusReducer.reduce(&state, action);
        let state = UiReducer.reduce(&state, action);
        CountdownReducer.reduce(&state, action)
    }
}

/// Errors raised by [`Store::dispatch`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("dispatch of {action} while another dispatch is being reduced")]
    ReentrantDispatch { action: String },
}

/// Process-local state container shared by the orchestrator and collaborators.
pub struct Store {
    state: ArcSwap<GameState>,
    reducer: Box<dyn Reducer>,
    // Reentrant so a nested dispatch on the same thread is detected instead
    // of deadlocking; other threads simply wait their turn.
    dispatching: ReentrantMutex<Cell<bool>>,
    version: AtomicU64,
}

impl Store {
    /// Creates a store holding the default snapshot and the root reducer.
    pub fn new() -> Self {
        Self::with_reducer(GameState::default(), RootReducer)
    }

    /// Creates a store with a custom initial snapshot and reducer.
    pub fn with_reducer(initial: GameState, reducer: impl Reducer + 'static) -> Self {
        Self {
            state: ArcSwap::from_pointee(initial),
            reducer: Box::new(reducer),
            dispatching: ReentrantMutex::new(Cell::new(false)),
            version: AtomicU64::new(0),
        }
    }

    /// Returns the current snapshot.
    pub fn state(&self) -> Arc<GameState> {
        self.state.load_full()
    }

    /// Number of dispatches that produced a new snapshot.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Reduces `action` against the current snapshot and publishes the result.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        let in_progress = self.dispatching.lock();
        if in_progress.replace(true) {
            return Err(StoreError::ReentrantDispatch {
                action: format!("{action:?}"),
            });
        }
        let _reset = ResetOnDrop(&in_progress);

        let current = self.state.load_full();
        let next = self.reducer.reduce(&current, &action);
        if Arc::ptr_eq(&current, &next) {
            debug!("dispatch {action:?}: unchanged");
            return Ok(());
        }

        self.state.store(next);
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        debug!("dispatch {action:?}: version {version}");
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

struct ResetOnDrop<'a>(&'a Cell<bool>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
