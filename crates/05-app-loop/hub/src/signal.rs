//! Signals raised by collaborators and drained by the orchestrator.
//!
//! Collaborators never touch the lifecycle directly. They push a [`Signal`]
//! and the orchestrator handles it on its next pump, one signal at a time.

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::warn;

/// Named trigger routed to a single orchestrator method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    /// A match concluded; `true` means won.
    EndOfGame(bool),
    /// Pause when running, resume when stopped.
    ToggleStartGame,
    ShowMenu,
    ShowControls,
    SetControlsDescription(String),
    /// The host resized the game container.
    Resize { width: u32, height: u32 },
}

/// Creates a connected sender/receiver pair.
pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    let (tx, rx) = unbounded();
    (SignalSender { tx }, SignalReceiver { rx })
}

/// Cloneable sending half handed to every collaborator.
#[derive(Clone, Debug)]
pub struct SignalSender {
    tx: Sender<Signal>,
}

impl SignalSender {
    /// Queues `signal`. A dropped orchestrator is logged and otherwise ignored.
    pub fn send(&self, signal: Signal) {
        if let Err(err) = self.tx.send(signal) {
            warn!("orchestrator is gone, dropping {:?}", err.into_inner());
        }
    }

    /// Queues [`Signal::EndOfGame`].
    pub fn end_of_game(&self, won: bool) {
        self.send(Signal::EndOfGame(won));
    }

    /// Queues [`Signal::ToggleStartGame`].
    pub fn toggle_start_game(&self) {
        self.send(Signal::ToggleStartGame);
    }

    /// Queues [`Signal::ShowMenu`].
    pub fn show_menu(&self) {
        self.send(Signal::ShowMenu);
    }

    /// Queues [`Signal::ShowControls`].
    pub fn show_controls(&self) {
        self.send(Signal::ShowControls);
    }

    /// Queues [`Signal::SetControlsDescription`].
    pub fn set_controls_description(&self, description: impl Into<String>) {
        self.send(Signal::SetControlsDescription(description.into()));
    }

    /// Queues [`Signal::Resize`].
    pub fn resize(&self, width: u32, height: u32) {
        self.send(Signal::Resize { width, height });
    }
}

/// Receiving half owned by the orchestrator.
#[derive(Debug)]
pub struct SignalReceiver {
    rx: Receiver<Signal>,
}

impl SignalReceiver {
    /// Pops the oldest pending signal, if any.
    pub fn try_next(&self) -> Option<Signal> {
        match self.rx.try_recv() {
            Ok(signal) => Some(signal),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drains up to `budget` signals in arrival order.
    pub fn drain(&self, budget: usize) -> Vec<Signal> {
        self.rx.try_iter().take(budget).collect()
    }

    /// Number of signals waiting.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}
