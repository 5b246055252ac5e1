//! Mouse Input Module
//!
//! Per-tick mouse state: movement deltas, scroll, button held/just-pressed
//! edges, and the normalized cursor position used for focus raycasts.
//! Decoupled from winit to use generic types.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// State of the three tracked mouse buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseButtons {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl MouseButtons {
    /// Create a button state with all buttons released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the state of a specific button.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Middle => self.middle = pressed,
            MouseButton::Right => self.right = pressed,
        }
    }

    /// Check the state of a specific button.
    pub fn get(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
        }
    }

    /// Check if any button is set.
    pub fn any(&self) -> bool {
        self.left || self.middle || self.right
    }
}

/// Per-tick mouse snapshot.
///
/// Deltas and scroll accumulate between ticks (multiple motion events per
/// frame are summed) and are cleared by [`end_tick`](Self::end_tick).
/// Button just-pressed edges behave like key edges: one tick only.
#[derive(Debug, Clone, Default)]
pub struct MouseSnapshot {
    /// Accumulated horizontal movement since the last tick
    pub delta_x: f32,
    /// Accumulated vertical movement since the last tick (positive = down,
    /// screen convention)
    pub delta_y: f32,
    /// Accumulated vertical scroll since the last tick (positive = forward)
    pub scroll: f32,
    /// Buttons currently held
    pub held: MouseButtons,
    /// Buttons that transitioned to pressed this tick
    pub pressed: MouseButtons,
    /// Cursor position in normalized UV coordinates (0-1, bottom-left
    /// origin), `None` while the cursor is outside the window
    pub cursor: Option<(f32, f32)>,
}

impl MouseSnapshot {
    /// Create a snapshot with no motion and all buttons released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion. Call for every motion event.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Accumulate scroll wheel motion. Call for every scroll event.
    #[inline]
    pub fn accumulate_scroll(&mut self, amount: f32) {
        self.scroll += amount;
    }

    /// Record a button press or release event.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed && !self.held.get(button) {
            self.pressed.set(button, true);
        }
        self.held.set(button, pressed);
    }

    /// Update the cursor position from raw pixel coordinates.
    ///
    /// Converts to normalized UV with a bottom-left origin (pixel Y grows
    /// downward, UV Y grows upward).
    pub fn set_cursor(&mut self, x: f32, y: f32, window_width: u32, window_height: u32) {
        if window_width == 0 || window_height == 0 {
            return;
        }
        let u = x / window_width as f32;
        let v = 1.0 - y / window_height as f32;
        self.cursor = Some((u, v));
    }

    /// Mark the cursor as outside the window.
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    /// Check if a button is currently held.
    #[inline]
    pub fn is_held(&self, button: MouseButton) -> bool {
        self.held.get(button)
    }

    /// Check if a button transitioned to pressed this tick.
    #[inline]
    pub fn just_pressed(&self, button: MouseButton) -> bool {
        self.pressed.get(button)
    }

    /// Clear per-tick accumulators and edges. Held buttons and the cursor
    /// position survive.
    pub fn end_tick(&mut self) {
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        self.scroll = 0.0;
        self.pressed = MouseButtons::default();
    }

    /// Reset all mouse state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let mouse = MouseSnapshot::new();
        assert!(!mouse.held.any());
        assert!(mouse.cursor.is_none());
        assert_eq!(mouse.scroll, 0.0);
    }

    #[test]
    fn test_delta_accumulation() {
        let mut mouse = MouseSnapshot::new();
        mouse.accumulate_delta(10.0, 5.0);
        mouse.accumulate_delta(3.0, -2.0);
        assert_eq!((mouse.delta_x, mouse.delta_y), (13.0, 3.0));

        mouse.end_tick();
        assert_eq!((mouse.delta_x, mouse.delta_y), (0.0, 0.0));
    }

    #[test]
    fn test_scroll_accumulation() {
        let mut mouse = MouseSnapshot::new();
        mouse.accumulate_scroll(1.0);
        mouse.accumulate_scroll(0.5);
        assert_eq!(mouse.scroll, 1.5);
    }

    #[test]
    fn test_button_edge() {
        let mut mouse = MouseSnapshot::new();
        mouse.set_button(MouseButton::Right, true);
        assert!(mouse.is_held(MouseButton::Right));
        assert!(mouse.just_pressed(MouseButton::Right));

        mouse.end_tick();
        assert!(mouse.is_held(MouseButton::Right));
        assert!(!mouse.just_pressed(MouseButton::Right));

        // Re-sending pressed while held does not retrigger the edge
        mouse.set_button(MouseButton::Right, true);
        assert!(!mouse.just_pressed(MouseButton::Right));
    }

    #[test]
    fn test_cursor_normalization_flips_y() {
        let mut mouse = MouseSnapshot::new();
        mouse.set_cursor(400.0, 150.0, 800, 600);

        let (u, v) = mouse.cursor.unwrap();
        assert!((u - 0.5).abs() < 1e-6);
        assert!((v - 0.75).abs() < 1e-6); // 150px from the top = 0.75 from the bottom
    }

    #[test]
    fn test_cursor_zero_window_ignored() {
        let mut mouse = MouseSnapshot::new();
        mouse.set_cursor(10.0, 10.0, 0, 0);
        assert!(mouse.cursor.is_none());
    }

    #[test]
    fn test_clear_cursor() {
        let mut mouse = MouseSnapshot::new();
        mouse.set_cursor(1.0, 1.0, 100, 100);
        mouse.clear_cursor();
        assert!(mouse.cursor.is_none());
    }
}
