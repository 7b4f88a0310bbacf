//! Held-key state read by the simulation
//!
//! The front end writes this from key-down/key-up events; the simulation only
//! reads it.

use std::collections::HashSet;

/// Keys the simulation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    A,
    D,
    Space,
}

#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn left(&self) -> bool {
        self.is_held(Key::ArrowLeft) || self.is_held(Key::A)
    }

    pub fn right(&self) -> bool {
        self.is_held(Key::ArrowRight) || self.is_held(Key::D)
    }

    pub fn jump(&self) -> bool {
        self.is_held(Key::Space) || self.is_held(Key::ArrowUp)
    }
}

impl FromIterator<Key> for KeyState {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        KeyState {
            held: iter.into_iter().collect(),
        }
    }
}
