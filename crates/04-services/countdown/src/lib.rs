//! Countdown timer service.
//!
//! The host drives time by calling [`Countdown::tick`]; the orchestrator only
//! sees the [`Timer`] contract. Every change of the remaining time is mirrored
//! into the store, and running out raises `Signal::EndOfGame(false)` once.

use hub::{Action, SignalSender, Store, Timer};
use log::{debug, trace, warn};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CountdownState {
    remaining: u32,
    running: bool,
}

/// Cloneable countdown handle; all clones share one clock.
#[derive(Clone)]
pub struct Countdown {
    state: Arc<Mutex<CountdownState>>,
    store: Arc<Store>,
    signals: SignalSender,
}

impl Countdown {
    /// Creates a stopped countdown with no time armed.
    pub fn new(store: Arc<Store>, signals: SignalSender) -> Self {
        Self {
            state: Arc::new(Mutex::new(CountdownState::default())),
            store,
            signals,
        }
    }

    /// Advances the clock by `elapsed` time-units while running.
    ///
    /// Returns `true` when this tick made the countdown expire.
    pub fn tick(&self, elapsed: u32) -> bool {
        let (remaining, expired) = {
            let mut state = self.state.lock();
            if !state.running || elapsed == 0 {
                return false;
            }
            state.remaining = state.remaining.saturating_sub(elapsed);
            let expired = state.remaining == 0;
            if expired {
                state.running = false;
            }
            (state.remaining, expired)
        };

        trace!("countdown tick elapsed={elapsed} remaining={remaining}");
        self.publish(remaining);
        if expired {
            debug!("countdown expired");
            self.signals.end_of_game(false);
        }
        expired
    }

    /// Time-units left on the clock.
    pub fn remaining(&self) -> u32 {
        self.state.lock().remaining
    }

    /// Returns `true` while ticks consume time.
    pub fn is_running(&self) -> bool {
        self.state.lock().running
    }

    fn publish(&self, remaining: u32) {
        if let Err(err) = self.store.dispatch(Action::SetTimeLeft(remaining)) {
            warn!("countdown could not publish remaining time: {err}");
        }
    }
}

impl Timer for Countdown {
    fn set_time(&mut self, units: u32) {
        self.state.lock().remaining = units;
        self.publish(units);
    }

    fn start(&mut self) {
        let mut state = self.state.lock();
        if state.remaining == 0 {
            warn!("countdown started without time armed");
            return;
        }
        state.running = true;
        debug!("countdown started at {}", state.remaining);
    }

    fn stop(&mut self) {
        self.state.lock().running = false;
    }

    fn resume(&mut self) {
        let mut state = self.state.lock();
        if state.remaining > 0 {
            state.running = true;
        }
    }
}
