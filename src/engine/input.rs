// Input state tracking for the keyboard
// Abstracts winit key events into a queryable per-frame snapshot

use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

pub struct InputState {
    // Keyboard. Physical key codes, so "W" and "w" are the same entry.
    keys_held: HashSet<KeyCode>,

    // Flashlight toggle, flipped by "f". Starts on.
    pub flashlight_on: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_held: HashSet::new(),
            flashlight_on: true,
        }
    }

    /// Feed a winit WindowEvent into the input state.
    /// Call this once per event before the frame step runs.
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(key) = event.physical_key {
                match event.state {
                    ElementState::Pressed => self.key_pressed(key, event.repeat),
                    ElementState::Released => self.key_released(key),
                }
            }
        }
    }

    /// KeyF is special: instead of recording a held key it flips the
    /// flashlight flag on each press. OS auto-repeat is ignored so one
    /// physical press is exactly one toggle. The caller applies the flag to
    /// the spotlight inside the same event handler, not in the frame loop.
    pub fn key_pressed(&mut self, key: KeyCode, repeat: bool) {
        if key == KeyCode::KeyF {
            if !repeat {
                self.flashlight_on = !self.flashlight_on;
            }
        } else {
            self.keys_held.insert(key);
        }
    }

    pub fn key_released(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_key_reflects_most_recent_event() {
        let mut input = InputState::new();
        assert!(!input.is_key_held(KeyCode::KeyW));

        input.key_pressed(KeyCode::KeyW, false);
        assert!(input.is_key_held(KeyCode::KeyW));

        // Auto-repeat keeps the key held
        input.key_pressed(KeyCode::KeyW, true);
        assert!(input.is_key_held(KeyCode::KeyW));

        input.key_released(KeyCode::KeyW);
        assert!(!input.is_key_held(KeyCode::KeyW));
    }

    #[test]
    fn flashlight_toggle_parity() {
        let mut input = InputState::new();
        assert!(input.flashlight_on);

        // Odd number of presses inverts the initial state
        input.key_pressed(KeyCode::KeyF, false);
        assert!(!input.flashlight_on);

        // Even number restores it
        input.key_pressed(KeyCode::KeyF, false);
        assert!(input.flashlight_on);

        for _ in 0..6 {
            input.key_pressed(KeyCode::KeyF, false);
        }
        assert!(input.flashlight_on);
    }

    #[test]
    fn flashlight_ignores_auto_repeat() {
        let mut input = InputState::new();
        input.key_pressed(KeyCode::KeyF, false);
        input.key_pressed(KeyCode::KeyF, true);
        input.key_pressed(KeyCode::KeyF, true);
        assert!(!input.flashlight_on);
    }

    #[test]
    fn f_is_not_tracked_as_held() {
        let mut input = InputState::new();
        input.key_pressed(KeyCode::KeyF, false);
        assert!(!input.is_key_held(KeyCode::KeyF));
    }

    #[test]
    fn unrecognized_keys_are_stored_without_effect() {
        let mut input = InputState::new();
        input.key_pressed(KeyCode::KeyQ, false);
        assert!(input.is_key_held(KeyCode::KeyQ));
    }
}
