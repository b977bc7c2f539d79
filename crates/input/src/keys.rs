use lumen_camera::CameraMovement;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Keys the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    LeftControl,
    Tab,
    Escape,
}

/// Keys currently held down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: BTreeSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press; returns `true` only on the transition from released.
    pub fn press(&mut self, key: Key) -> bool {
        self.held.insert(key)
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        self.held.iter().copied()
    }

    /// Forget all held keys, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Key-to-action mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub movement: BTreeMap<Key, CameraMovement>,
    pub toggle_cursor: Key,
    pub quit: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let movement = BTreeMap::from([
            (Key::W, CameraMovement::Forward),
            (Key::S, CameraMovement::Backward),
            (Key::A, CameraMovement::Left),
            (Key::D, CameraMovement::Right),
            (Key::Space, CameraMovement::Up),
            (Key::LeftControl, CameraMovement::Down),
        ]);
        Self {
            movement,
            toggle_cursor: Key::Tab,
            quit: Key::Escape,
        }
    }
}

impl KeyBindings {
    pub fn movement_for(&self, key: Key) -> Option<CameraMovement> {
        self.movement.get(&key).copied()
    }
}
