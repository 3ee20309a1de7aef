//! Keyboard input state.
//!
//! The window event handler adds keys on press and removes them on release;
//! scenes only read the held set once per tick.

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Logical directions currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Input state tracking
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.keys_held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    /// Drop every held key (focus loss would otherwise leave keys stuck)
    pub fn clear(&mut self) {
        self.keys_held.clear();
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.keys_held.contains(key))
    }

    /// Arrow keys and WASD
    pub fn directions(&self) -> HeldDirections {
        HeldDirections {
            up: self.any_held(&[KeyCode::ArrowUp, KeyCode::KeyW]),
            down: self.any_held(&[KeyCode::ArrowDown, KeyCode::KeyS]),
            left: self.any_held(&[KeyCode::ArrowLeft, KeyCode::KeyA]),
            right: self.any_held(&[KeyCode::ArrowRight, KeyCode::KeyD]),
        }
    }

    /// Up, W or Space
    pub fn jump_held(&self) -> bool {
        self.any_held(&[KeyCode::ArrowUp, KeyCode::KeyW, KeyCode::Space])
    }
}
