//! Game-kit orchestrator.
//!
//! [`Kit`] owns the store and the collaborators, and is the only place that
//! decides which lifecycle actions to dispatch. Collaborators report back
//! through signals which [`Kit::run_once`] drains one at a time, so two
//! triggers never interleave inside a transition.

mod builder;
mod config;
mod error;

use std::sync::Arc;

use hub::{
    Action, GameState, Host, PlayableGame, RenderSurface, Signal, SignalReceiver, SignalSender,
    Store, Timer,
};
use log::{debug, info};
use services_countdown::Countdown;
use services_keyboard::Keyboard;

pub use crate::builder::KitBuilder;
pub use crate::config::KitConfig;
pub use crate::error::{KitError, KitResult};
pub use services_keyboard::KeyBindings;

/// Notification hook passed to [`Kit::toggle_start_game`].
pub type Callback<'a> = Box<dyn FnMut() + 'a>;

/// Orchestrator owning the store and every collaborator of one game.
pub struct Kit {
    store: Arc<Store>,
    timer: Box<dyn Timer>,
    countdown: Option<Countdown>,
    keyboard: Keyboard,
    game: Box<dyn PlayableGame>,
    host: Box<dyn Host>,
    signals: SignalReceiver,
    sender: SignalSender,
    config: KitConfig,
    loaded: bool,
}

impl Kit {
    /// Creates a new builder for assembling a kit.
    pub fn builder() -> KitBuilder {
        KitBuilder::new()
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<GameState> {
        self.store.state()
    }

    /// Shared store, for collaborators built outside the builder.
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Configuration the kit was built with.
    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    /// Input source fed by the host's raw key events.
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Built-in countdown, when the kit was built with one.
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    /// Sender for hosts that raise signals themselves (resize, UI buttons).
    pub fn signal_sender(&self) -> SignalSender {
        self.sender.clone()
    }

    /// Binds the game to `surface` and starts the first match.
    pub fn load(&mut self, surface: RenderSurface) -> KitResult<()> {
        if self.loaded {
            return Err(KitError::AlreadyLoaded);
        }
        info!("loading kit on surface {:?}", surface.id);
        self.game.render_on(surface);
        self.loaded = true;
        self.start()
    }

    /// Starts a fresh match with a full countdown.
    pub fn start(&mut self) -> KitResult<()> {
        self.store.dispatch(Action::HideMenu)?;
        self.store.dispatch(Action::StartGame)?;
        self.game.render();
        self.timer.set_time(self.config.initial_time);
        self.timer.start();
        debug!("match started with {} time-units", self.config.initial_time);
        Ok(())
    }

    /// Pauses the match. Calling it while stopped only repeats the dispatch.
    pub fn stop(&mut self) -> KitResult<()> {
        self.store.dispatch(Action::StopGame)?;
        self.game.stop_render();
        self.timer.stop();
        Ok(())
    }

    /// Resumes a paused match where it left off.
    pub fn resume(&mut self) -> KitResult<()> {
        self.store.dispatch(Action::HideMenu)?;
        self.store.dispatch(Action::HideControls)?;
        self.store.dispatch(Action::ContinueGame)?;
        self.game.render();
        self.timer.resume();
        Ok(())
    }

    /// Resumes when stopped, pauses when running.
    ///
    /// `on_continue` runs on both branches; `on_stop` only when pausing, after
    /// `on_continue`.
    pub fn toggle_start_game(
        &mut self,
        on_continue: &mut [Callback<'_>],
        on_stop: &mut [Callback<'_>],
    ) -> KitResult<()> {
        if self.store.state().game_stopped {
            self.resume()?;
            on_continue.iter_mut().for_each(|cb| cb());
        } else {
            self.stop()?;
            on_continue.iter_mut().for_each(|cb| cb());
            on_stop.iter_mut().for_each(|cb| cb());
        }
        Ok(())
    }

    /// Pauses the match and opens the menu.
    pub fn show_menu(&mut self) -> KitResult<()> {
        self.stop()?;
        self.store.dispatch(Action::ShowMenu)?;
        Ok(())
    }

    /// Pauses the match and opens the controls overlay.
    pub fn show_controls(&mut self) -> KitResult<()> {
        self.stop()?;
        self.store.dispatch(Action::ShowControls)?;
        Ok(())
    }

    /// Marks the match won and pauses it.
    pub fn won(&mut self) -> KitResult<()> {
        info!("match won");
        self.store.dispatch(Action::GameWon)?;
        self.stop()
    }

    /// Marks the match lost and pauses it.
    pub fn lost(&mut self) -> KitResult<()> {
        info!("match lost");
        self.store.dispatch(Action::GameLost)?;
        self.stop()
    }

    /// Publishes the game's controls text.
    pub fn set_controls_description(&mut self, description: impl Into<String>) -> KitResult<()> {
        self.store
            .dispatch(Action::set_controls_description(description))?;
        Ok(())
    }

    /// Forwards a container resize to the game. Nothing is dispatched.
    pub fn set_game_container_size(&mut self, width: u32, height: u32) {
        self.game.set_size(width, height);
    }

    /// Routes a finished match to [`Kit::won`] or [`Kit::lost`].
    ///
    /// Once a match is won or lost, later outcomes are ignored until the next
    /// `start()`.
    pub fn end_of_game(&mut self, won: bool) -> KitResult<()> {
        let status = self.store.state().status;
        if status.is_finished() {
            debug!("ignoring end of game (won: {won}), match already {status:?}");
            return Ok(());
        }
        if won {
            self.won()
        } else {
            self.lost()
        }
    }

    /// Reloads the hosting environment. Nothing is preserved.
    pub fn reload(&mut self) {
        info!("reloading host");
        self.host.reload();
    }

    /// Handles at most `budget` pending signals in arrival order.
    ///
    /// Signals are taken off the queue one at a time, so on error everything
    /// after the failing signal stays queued for the next pump.
    pub fn pump_signals(&mut self, budget: usize) -> KitResult<usize> {
        let mut handled = 0;
        while handled < budget {
            let Some(signal) = self.signals.try_next() else {
                break;
            };
            handled += 1;
            self.handle_signal(signal)?;
        }
        Ok(handled)
    }

    /// Number of signals waiting for the next pump.
    pub fn pending_signals(&self) -> usize {
        self.signals.pending()
    }

    /// Pumps signals with the configured budget.
    pub fn run_once(&mut self) -> KitResult<usize> {
        self.pump_signals(self.config.signal_budget)
    }

    fn handle_signal(&mut self, signal: Signal) -> KitResult<()> {
        debug!("handling {signal:?}");
        match signal {
            Signal::EndOfGame(won) => self.end_of_game(won),
            Signal::ToggleStartGame => self.toggle_start_game(&mut [], &mut []),
            Signal::ShowMenu => self.show_menu(),
            Signal::ShowControls => self.show_controls(),
            Signal::SetControlsDescription(description) => {
                self.set_controls_description(description)
            }
            Signal::Resize { width, height } => {
                self.set_game_container_size(width, height);
                Ok(())
            }
        }
    }
}
