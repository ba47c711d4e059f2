//! Immutable game state snapshot replaced wholesale on every transition.

use std::sync::Arc;

use serde::Serialize;

use crate::types::Status;

/// Snapshot of everything the presentation layer and orchestrator read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Remaining targets; `None` until the playable game sets a count.
    pub number_of_catchables: Option<u32>,
    /// Whether gameplay is paused or inactive.
    pub game_stopped: bool,
    /// Coarse lifecycle phase.
    pub status: Status,
    /// Human-readable control scheme published by the playable game.
    pub controls_description: Option<String>,
    /// Whether the menu should be displayed.
    pub menu_visible: bool,
    /// Whether the controls overlay should be displayed.
    pub controls_visible: bool,
    /// Remaining countdown time as last published by the timer.
    pub time_left: Option<u32>,
}

impl GameState {
    /// Creates the state a freshly constructed orchestrator starts from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a match is running and not paused.
    pub fn is_running(&self) -> bool {
        self.status == Status::Playing && !self.game_stopped
    }

    /// Produces the next snapshot by applying `edit` to a copy of `state`.
    ///
    /// Returns the original `Arc` when the edit leaves every field unchanged,
    /// so callers can detect no-op transitions with [`Arc::ptr_eq`].
    pub fn update(state: &Arc<GameState>, edit: impl FnOnce(&mut GameState)) -> Arc<GameState> {
        let mut next = GameState::clone(state);
        edit(&mut next);
        if next == **state {
            Arc::clone(state)
        } else {
            Arc::new(next)
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            number_of_catchables: None,
            game_stopped: true,
            status: Status::Menu,
            controls_description: None,
            menu_visible: true,
            controls_visible: false,
            time_left: None,
        }
    }
}
