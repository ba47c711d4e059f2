//! Collaborator contracts and the wiring shared between the orchestrator and
//! the services it drives.

use std::sync::Arc;

pub use world::{Action, GameState, Status, Store, StoreError};

mod catchables;
mod input;
mod signal;

pub use crate::catchables::Catchables;
pub use crate::input::{Key, PressedKeys};
pub use crate::signal::{signal_channel, Signal, SignalReceiver, SignalSender};

/// Time budget armed on every fresh start.
pub const DEFAULT_INITIAL_TIME: u32 = 300;
/// Default number of signals drained per orchestrator pump.
pub const DEFAULT_SIGNAL_BUDGET: usize = 32;

/// Countdown collaborator. Expiry is reported as `Signal::EndOfGame(false)`.
pub trait Timer {
    /// Arms the remaining time without starting.
    fn set_time(&mut self, units: u32);
    /// Starts counting down from the armed time.
    fn start(&mut self);
    /// Pauses the countdown.
    fn stop(&mut self);
    /// Continues from where [`Timer::stop`] paused.
    fn resume(&mut self);
}

/// The object that renders and simulates the actual match.
pub trait PlayableGame {
    /// Binds the game to a surface; called once before the first render.
    fn render_on(&mut self, surface: RenderSurface);
    /// Starts or resumes the render loop.
    fn render(&mut self);
    /// Halts the render loop.
    fn stop_render(&mut self);
    /// Resizes the game container.
    fn set_size(&mut self, width: u32, height: u32);
}

/// Hosting environment (page, window, process).
pub trait Host {
    /// Unconditionally reloads the environment. Nothing is preserved.
    fn reload(&mut self);
}

/// Opaque handle to the surface a playable game draws on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSurface {
    /// Host-assigned identifier (element id, window title, ...).
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl RenderSurface {
    /// Creates a surface descriptor.
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Everything a playable game is constructed with.
#[derive(Clone)]
pub struct GameContext {
    /// Live view of the keys currently held down.
    pub keys: PressedKeys,
    /// Channel back into the orchestrator.
    pub signals: SignalSender,
    /// Catchable counter bound to the shared store.
    pub catchables: Catchables,
}

impl GameContext {
    /// Creates a context whose catchables dispatch into `store`.
    pub fn new(keys: PressedKeys, signals: SignalSender, store: Arc<Store>) -> Self {
        Self {
            keys,
            signals,
            catchables: Catchables::new(store),
        }
    }

    /// Reports the outcome of a finished match.
    pub fn end_of_game(&self, won: bool) {
        self.signals.end_of_game(won);
    }

    /// Publishes the game's control scheme.
    pub fn set_controls_description(&self, description: impl Into<String>) {
        self.signals.set_controls_description(description);
    }
}
