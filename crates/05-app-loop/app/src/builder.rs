use std::sync::Arc;

use anyhow::{anyhow, Result};
use hub::{signal_channel, GameContext, Host, PlayableGame, SignalSender, Store, Timer};
use services_countdown::Countdown;
use services_keyboard::{KeyBindings, Keyboard};

use crate::config::KitConfig;
use crate::Kit;

type TimerFactory = Box<dyn FnOnce(Arc<Store>, SignalSender) -> Box<dyn Timer>>;
type GameFactory = Box<dyn FnOnce(GameContext) -> Box<dyn PlayableGame>>;

enum TimerChoice {
    Countdown,
    Custom(TimerFactory),
}

/// Builder for assembling a [`Kit`] from its collaborators.
///
/// The store and signal channel are created at build time and handed to the
/// timer and game factories, so collaborators can never outlive or bypass
/// the kit they belong to.
pub struct KitBuilder {
    config: KitConfig,
    timer: Option<TimerChoice>,
    game: Option<GameFactory>,
    host: Option<Box<dyn Host>>,
}

impl KitBuilder {
    /// Creates an empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: KitConfig::default(),
            timer: None,
            game: None,
            host: None,
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: KitConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the countdown budget armed on every `start()`.
    pub fn initial_time(mut self, units: u32) -> Self {
        self.config.initial_time = units;
        self
    }

    /// Overrides how many signals one `run_once()` handles.
    pub fn signal_budget(mut self, budget: usize) -> Self {
        self.config.signal_budget = budget;
        self
    }

    /// Overrides the lifecycle keys.
    pub fn bindings(mut self, bindings: KeyBindings) -> Self {
        self.config.bindings = bindings;
        self
    }

    /// Uses the built-in [`Countdown`], reachable later via [`Kit::countdown`].
    pub fn countdown(mut self) -> Self {
        self.timer = Some(TimerChoice::Countdown);
        self
    }

    /// Uses a custom timer built from the kit's store and signal sender.
    pub fn timer<F, T>(mut self, factory: F) -> Self
    where
        F: FnOnce(Arc<Store>, SignalSender) -> T + 'static,
        T: Timer + 'static,
    {
        self.timer = Some(TimerChoice::Custom(Box::new(move |store, signals| {
            Box::new(factory(store, signals)) as Box<dyn Timer>
        })));
        self
    }

    /// Sets the playable game factory.
    pub fn game<F, G>(mut self, factory: F) -> Self
    where
        F: FnOnce(GameContext) -> G + 'static,
        G: PlayableGame + 'static,
    {
        self.game = Some(Box::new(move |ctx| {
            Box::new(factory(ctx)) as Box<dyn PlayableGame>
        }));
        self
    }

    /// Sets the hosting environment.
    pub fn host(mut self, host: impl Host + 'static) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    /// Builds a [`Kit`], returning an error if any collaborator is missing
    /// or the initial time is zero.
    pub fn build(self) -> Result<Kit> {
        if self.config.initial_time == 0 {
            return Err(anyhow!("initial time must be at least one time-unit"));
        }
        let timer = self.timer.ok_or_else(|| anyhow!("missing timer"))?;
        let game = self.game.ok_or_else(|| anyhow!("missing playable game"))?;
        let host = self.host.ok_or_else(|| anyhow!("missing host"))?;

        let store = Arc::new(Store::new());
        let (sender, receiver) = signal_channel();
        let keyboard = Keyboard::new(sender.clone(), self.config.bindings);

        let (timer, countdown): (Box<dyn Timer>, Option<Countdown>) = match timer {
            TimerChoice::Countdown => {
                let countdown = Countdown::new(Arc::clone(&store), sender.clone());
                (Box::new(countdown.clone()) as Box<dyn Timer>, Some(countdown))
            }
            TimerChoice::Custom(factory) => (factory(Arc::clone(&store), sender.clone()), None),
        };

        let ctx = GameContext::new(keyboard.keys_pressed(), sender.clone(), Arc::clone(&store));
        let game = game(ctx);

        Ok(Kit {
            store,
            timer,
            countdown,
            keyboard,
            game,
            host,
            signals: receiver,
            sender,
            config: self.config,
            loaded: false,
        })
    }
}

impl Default for KitBuilder {
    fn default() -> Self {
        Self::new()
    }
}
