//! Input Module
//!
//! Platform-agnostic per-tick input snapshot for the camera controller.
//! The host translates its windowing events (winit or otherwise) into this
//! representation; the controller only ever reads the snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use viewcam::input::{InputSnapshot, KeyCode, MouseButton};
//!
//! let mut input = InputSnapshot::new();
//!
//! // Event loop: record raw events
//! input.keys.handle_key(KeyCode::ShiftLeft, true);
//! input.mouse.set_button(MouseButton::Right, true);
//! input.mouse.accumulate_delta(12.0, -3.0);
//!
//! // Update loop: hand the snapshot to the controller, then close the tick
//! camera.tick(dt, &input, &mut transform, raycast);
//! input.end_tick();
//! ```

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyState};
pub use mouse::{MouseButton, MouseButtons, MouseSnapshot};

/// Generalized movement axes, as produced by an input-axis abstraction.
///
/// Values are typically in [-1, 1] from digital keys but may exceed that
/// range for analog sticks; the controller scales them as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveAxes {
    /// Strafe axis: positive = right
    pub horizontal: f32,
    /// Forward axis: positive = forward
    pub vertical: f32,
}

impl MoveAxes {
    /// Create zeroed axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive digital axes from the WASD keys of a key state.
    pub fn from_keys(keys: &KeyState) -> Self {
        Self {
            horizontal: keys.axis(KeyCode::D, KeyCode::A),
            vertical: keys.axis(KeyCode::W, KeyCode::S),
        }
    }
}

/// Combined per-tick input state for keyboard, mouse and movement axes.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub keys: KeyState,
    pub mouse: MouseSnapshot,
    pub axes: MoveAxes,
}

impl InputSnapshot {
    /// Create a snapshot with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Close out the current tick.
    ///
    /// Clears edge-triggered state (just-pressed keys and buttons) and
    /// per-tick accumulators (mouse deltas, scroll). Held state survives.
    /// Call once per frame after the controller has consumed the snapshot.
    pub fn end_tick(&mut self) {
        self.keys.end_tick();
        self.mouse.end_tick();
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
