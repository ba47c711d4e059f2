//! Keyboard service: maintains the pressed-keys set and turns the two trigger
//! keys into orchestrator signals.

use hub::{Key, PressedKeys, SignalSender};
use log::debug;
use serde::Deserialize;

/// Keys that drive the lifecycle rather than gameplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Pauses a running match or resumes a stopped one.
    pub toggle: Key,
    /// Pauses and brings up the menu.
    pub menu: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle: Key::Space,
            menu: Key::Escape,
        }
    }
}

/// Cloneable keyboard handle fed by the host's raw key events.
#[derive(Clone, Debug)]
pub struct Keyboard {
    keys: PressedKeys,
    signals: SignalSender,
    bindings: KeyBindings,
}

impl Keyboard {
    /// Creates a keyboard raising lifecycle signals on `signals`.
    pub fn new(signals: SignalSender, bindings: KeyBindings) -> Self {
        Self {
            keys: PressedKeys::new(),
            signals,
            bindings,
        }
    }

    /// Records a key press. Auto-repeat while held does not re-trigger.
    pub fn press(&self, key: Key) {
        if !self.keys.press(key) {
            return;
        }
        if key == self.bindings.toggle {
            debug!("toggle key {key:?} pressed");
            self.signals.toggle_start_game();
        } else if key == self.bindings.menu {
            debug!("menu key {key:?} pressed");
            self.signals.show_menu();
        }
    }

    /// Records a key release.
    pub fn release(&self, key: Key) {
        self.keys.release(key);
    }

    /// Live view handed to the playable game.
    pub fn keys_pressed(&self) -> PressedKeys {
        self.keys.clone()
    }

    /// Active lifecycle keys.
    pub fn bindings(&self) -> KeyBindings {
        self.bindings
    }
}
