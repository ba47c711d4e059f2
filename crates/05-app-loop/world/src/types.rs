//! Action and lifecycle types shared by reducers, the orchestrator, and
//! collaborators.

use serde::Serialize;

/// Coarse lifecycle phase of a game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// Menu is up and no match is in progress.
    #[default]
    Menu,
    /// A match is in progress (possibly paused, see `game_stopped`).
    Playing,
    /// The last match ended with a win.
    Won,
    /// The last match ended with a loss.
    Lost,
}

impl Status {
    /// Returns `true` once the match has concluded either way.
    pub fn is_finished(self) -> bool {
        matches!(self, Status::Won | Status::Lost)
    }
}

/// Transition request consumed by the store's reducers.
///
/// Every reducer owns a slice of these variants and treats the rest as
/// identity.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Set the catchable counter. The payload is untrusted and validated by
    /// the reducer.
    SetNumberCatchables(f64),
    /// Remove one catchable from the counter.
    DecrementNumberCatchables,
    /// Begin a fresh match.
    StartGame,
    /// Pause the current match without changing its status.
    StopGame,
    /// Resume a paused match.
    ContinueGame,
    /// The match was won.
    GameWon,
    /// The match was lost.
    GameLost,
    /// Replace the human-readable control scheme.
    SetControlsDescription(String),
    /// Bring up the menu.
    ShowMenu,
    /// Dismiss the menu.
    HideMenu,
    /// Bring up the controls overlay.
    ShowControls,
    /// Dismiss the controls overlay.
    HideControls,
    /// Publish the countdown's remaining time.
    SetTimeLeft(u32),
}

impl Action {
    /// Builds a [`Action::SetNumberCatchables`] from any numeric count.
    pub fn set_number_catchables(number: impl Into<f64>) -> Self {
        Action::SetNumberCatchables(number.into())
    }

    /// Builds a [`Action::SetControlsDescription`].
    pub fn set_controls_description(description: impl Into<String>) -> Self {
        Action::SetControlsDescription(description.into())
    }
}
