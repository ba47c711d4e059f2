//! Tunables for a [`Kit`](crate::Kit) instance.

use hub::{DEFAULT_INITIAL_TIME, DEFAULT_SIGNAL_BUDGET};
use serde::Deserialize;
use services_keyboard::KeyBindings;

/// Kit configuration. Missing fields fall back to [`KitConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Countdown budget armed on every `start()`. Must be non-zero.
    pub initial_time: u32,
    /// Upper bound on signals handled per `run_once()`.
    pub signal_budget: usize,
    /// Lifecycle keys.
    pub bindings: KeyBindings,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            initial_time: DEFAULT_INITIAL_TIME,
            signal_budget: DEFAULT_SIGNAL_BUDGET,
            bindings: KeyBindings::default(),
        }
    }
}
