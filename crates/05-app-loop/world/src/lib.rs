//! Canonical game state, actions, and the store that reduces them.
//!
//! The `world` crate intentionally stays small. It defines the immutable
//! [`GameState`] snapshot, the [`Action`] union that is the only way to change
//! it, the pure slice reducers, and the [`Store`] that serializes dispatch.

/// Pure reducer for the catchable counter.
pub mod reduce_catchables;
/// Pure reducer for the countdown display value.
pub mod reduce_countdown;
/// Pure reducer for the game lifecycle.
pub mod reduce_status;
/// Pure reducer for menu and controls visibility.
pub mod reduce_ui;
/// Snapshot store with serialized dispatch.
pub mod store;
/// Action and status types.
pub mod types;
/// Immutable game state snapshot.
pub mod world;

pub use crate::reduce_catchables::CatchablesReducer;
pub use crate::reduce_countdown::CountdownReducer;
pub use crate::reduce_status::StatusReducer;
pub use crate::reduce_ui::UiReducer;
pub use crate::store::{Reducer, RootReducer, Store, StoreError};
pub use crate::types::{Action, Status};
pub use crate::world::GameState;
