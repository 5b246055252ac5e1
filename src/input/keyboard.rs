//! Keyboard Input Module
//!
//! Key state tracking with held and just-pressed queries, decoupled from
//! winit so the camera controller can be driven from any windowing system
//! (or directly from tests).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Generic key codes, independent of windowing system.
///
/// Only the keys the camera controller can be bound to are listed; the host
/// maps its native key codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Q,
    E,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    // Mode / binding candidates
    F,
    V,
    Tab,
    Escape,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which keys are held and which were pressed this tick.
///
/// "Just pressed" is edge-triggered: it is set on the released-to-pressed
/// transition and cleared by [`end_tick`](Self::end_tick), so a held key
/// reports it for exactly one tick.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
}

impl KeyState {
    /// Create a key state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release event.
    ///
    /// Repeated press events for an already-held key (OS key repeat) do not
    /// re-trigger the just-pressed edge.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.held.insert(key) {
                self.just_pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Check if a key is currently held down.
    #[inline]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Check if a key transitioned to pressed this tick.
    #[inline]
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Digital axis from a pair of keys: +1 for positive held, -1 for
    /// negative held, 0 for both or neither.
    pub fn axis(&self, positive: KeyCode, negative: KeyCode) -> f32 {
        (self.is_held(positive) as i32 - self.is_held(negative) as i32) as f32
    }

    /// Clear the just-pressed edges. Call once per tick after consumption.
    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        self.held.clear();
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let keys = KeyState::new();
        assert!(!keys.is_held(KeyCode::W));
        assert!(!keys.just_pressed(KeyCode::W));
        assert_eq!(keys.axis(KeyCode::E, KeyCode::Q), 0.0);
    }

    #[test]
    fn test_press_sets_held_and_edge() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::V, true);
        assert!(keys.is_held(KeyCode::V));
        assert!(keys.just_pressed(KeyCode::V));
    }

    #[test]
    fn test_edge_cleared_by_end_tick() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::V, true);
        keys.end_tick();

        assert!(keys.is_held(KeyCode::V));
        assert!(!keys.just_pressed(KeyCode::V));
    }

    #[test]
    fn test_key_repeat_does_not_retrigger_edge() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::V, true);
        keys.end_tick();
        keys.handle_key(KeyCode::V, true); // OS key repeat

        assert!(!keys.just_pressed(KeyCode::V));
    }

    #[test]
    fn test_release_then_press_retriggers_edge() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::V, true);
        keys.end_tick();
        keys.handle_key(KeyCode::V, false);
        keys.handle_key(KeyCode::V, true);

        assert!(keys.just_pressed(KeyCode::V));
    }

    #[test]
    fn test_axis() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::E, true);
        assert_eq!(keys.axis(KeyCode::E, KeyCode::Q), 1.0);

        keys.handle_key(KeyCode::Q, true);
        assert_eq!(keys.axis(KeyCode::E, KeyCode::Q), 0.0);

        keys.handle_key(KeyCode::E, false);
        assert_eq!(keys.axis(KeyCode::E, KeyCode::Q), -1.0);
    }
}
