use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Keys the kit distinguishes. Anything printable arrives as `Char`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

/// Shared, live set of keys currently held down.
///
/// The keyboard service writes through [`PressedKeys::press`] and
/// [`PressedKeys::release`]; the playable game only reads.
#[derive(Clone, Debug, Default)]
pub struct PressedKeys {
    keys: Arc<RwLock<SmallVec<[Key; 8]>>>,
}

impl PressedKeys {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as held. Returns `false` if it already was.
    pub fn press(&self, key: Key) -> bool {
        let mut keys = self.keys.write();
        if keys.contains(&key) {
            return false;
        }
        keys.push(key);
        true
    }

    /// Marks `key` as released. Returns `false` if it was not held.
    pub fn release(&self, key: Key) -> bool {
        let mut keys = self.keys.write();
        match keys.iter().position(|held| *held == key) {
            Some(idx) => {
                keys.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Returns `true` while `key` is held.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys.read().contains(&key)
    }

    /// Copies the held keys in press order.
    pub fn snapshot(&self) -> SmallVec<[Key; 8]> {
        self.keys.read().clone()
    }

    /// Returns `true` when no key is held.
    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }

    /// Forgets every held key.
    pub fn clear(&self) {
        self.keys.write().clear();
    }
}
