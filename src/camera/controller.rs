//! Viewport Camera Controller
//!
//! Maps per-tick input onto the camera transform in one of two exclusive
//! modes:
//!
//! - **Free**: FPS-spectator fly-through. Mouse motion steers yaw/pitch
//!   directly (no button required), WASD-style axes plus up/down keys
//!   translate in the camera's local frame, shift sprints.
//! - **Focus**: CAD-style inspection of a focus point acquired by raycast.
//!   Right-drag orbits around the point, middle-drag pans camera and point
//!   together, scroll zooms along the view ray with an accelerating curve.
//!
//! The controller holds no reference to the host: input arrives as a
//! snapshot, the scene raycast is an injected closure, and the result is
//! written into the transform passed to [`CameraController::tick`].

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::config::CameraConfig;
use super::raycast::{LayerMask, Ray, ScreenConfig};
use super::transform::Transform;
use crate::input::{InputSnapshot, MouseButton};

/// Pitch limit: +/-90 degrees in radians
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;

/// Button that drives orbiting in Focus mode.
const ORBIT_BUTTON: MouseButton = MouseButton::Right;
/// Button that drives panning in Focus mode.
const PAN_BUTTON: MouseButton = MouseButton::Middle;

/// Camera control scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Unconstrained fly-through (FPS-spectator style)
    #[default]
    Free,
    /// Orbit/zoom/pan around a raycast-acquired focus point
    Focus,
}

/// The point the camera inspects in Focus mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Focus {
    /// World-space focus point, set by the last raycast hit
    pub point: Vec3,
    /// Camera distance from the point, kept within the configured bounds
    /// by zooming
    pub distance: f32,
}

/// Dual-mode camera controller state.
///
/// One instance per viewport camera. All mutation happens inside
/// [`tick`](Self::tick); between ticks the controller is inert.
#[derive(Debug, Clone)]
pub struct CameraController {
    mode: CameraMode,
    /// Horizontal look angle in radians, unrestricted
    yaw: f32,
    /// Vertical look angle in radians, clamped to +/-90 degrees
    pitch: f32,
    /// Focus state; `None` until a raycast hit acquires it
    focus: Option<Focus>,
    screen: ScreenConfig,
    config: CameraConfig,
}

impl CameraController {
    /// Create a controller, deriving yaw/pitch from the camera's initial
    /// orientation and taking the starting mode from the configuration.
    ///
    /// The configuration is stored as given; distance bounds are not
    /// validated.
    pub fn new(initial: &Transform, config: CameraConfig) -> Self {
        let (yaw, pitch) = initial.angles();
        Self {
            mode: config.default_mode,
            yaw,
            pitch,
            focus: None,
            screen: ScreenConfig::default(),
            config,
        }
    }

    /// Get the current control mode.
    #[inline]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Get the current yaw angle in radians.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Get the current pitch angle in radians.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Get the current focus state, if one has been acquired.
    #[inline]
    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Get the configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Get the screen projection parameters used for cursor rays.
    pub fn screen(&self) -> ScreenConfig {
        self.screen
    }

    /// Replace the screen projection parameters.
    pub fn set_screen(&mut self, screen: ScreenConfig) {
        self.screen = screen;
    }

    /// Update the cursor-ray aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen.resize(width, height);
    }

    /// Flip between Free and Focus mode.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            CameraMode::Free => CameraMode::Focus,
            CameraMode::Focus => CameraMode::Free,
        };
        log::debug!("camera mode toggled to {:?}", self.mode);
    }

    /// Advance the controller by one frame.
    ///
    /// Reads the input snapshot, updates internal state, and writes the
    /// resulting position and orientation into `transform`. The `raycast`
    /// closure is the host's scene query: given a ray, a maximum distance
    /// and a layer filter, it returns the nearest hit point, if any. It is
    /// only invoked in Focus mode when an acquisition trigger fires.
    ///
    /// Nothing here fails: a raycast miss leaves the focus untouched and
    /// the tick carries on.
    pub fn tick<F>(
        &mut self,
        delta_time: f32,
        input: &InputSnapshot,
        transform: &mut Transform,
        raycast: F,
    ) where
        F: FnMut(Ray, f32, LayerMask) -> Option<Vec3>,
    {
        if input.keys.just_pressed(self.config.toggle_key) {
            self.toggle_mode();
        }

        match self.mode {
            CameraMode::Free => self.update_free(delta_time, input, transform),
            CameraMode::Focus => self.update_focus(input, transform, raycast),
        }
    }

    // =========================================================================
    // FREE MODE
    // =========================================================================

    /// Free-mode update: mouse look plus local-frame fly movement.
    fn update_free(&mut self, delta_time: f32, input: &InputSnapshot, transform: &mut Transform) {
        // Mouse look, no button required. Screen Y grows downward, so
        // moving the mouse up (negative dy) raises the pitch.
        self.yaw += input.mouse.delta_x * self.config.look_sensitivity;
        self.pitch = (self.pitch - input.mouse.delta_y * self.config.look_sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Orientation is written absolutely from (pitch, yaw, 0) each tick,
        // not accumulated on the transform.
        transform.set_angles(self.yaw, self.pitch);

        let vertical = input.keys.axis(self.config.up_key, self.config.down_key);
        let speed = if input.keys.is_held(self.config.sprint_key) {
            self.config.movement_speed * self.config.sprint_multiplier
        } else {
            self.config.movement_speed
        };

        // (strafe, vertical, forward) in the camera's local frame. The
        // vertical component rides the local up axis, tilting with the
        // camera like the rest of the vector.
        let movement = Vec3::new(input.axes.horizontal, vertical, input.axes.vertical);
        transform.translate_local(movement * speed * delta_time);
    }

    // =========================================================================
    // FOCUS MODE
    // =========================================================================

    /// Focus-mode update: acquisition, then zoom, then orbit or pan.
    ///
    /// Orbiting returns early so pan input is ignored for the tick.
    fn update_focus<F>(&mut self, input: &InputSnapshot, transform: &mut Transform, mut raycast: F)
    where
        F: FnMut(Ray, f32, LayerMask) -> Option<Vec3>,
    {
        let orbit_held = input.mouse.is_held(ORBIT_BUTTON);
        let pan_held = input.mouse.is_held(PAN_BUTTON);
        let scroll = input.mouse.scroll;

        // (Re)acquire the focus point under the cursor when interaction
        // starts: orbit press, any scroll, or while the pan button is held.
        if input.mouse.just_pressed(ORBIT_BUTTON) || scroll != 0.0 || pan_held {
            self.acquire_focus(input, transform, &mut raycast);
        }

        if scroll != 0.0 {
            self.zoom(scroll, transform);
        }

        if orbit_held {
            self.orbit(input.mouse.delta_x, input.mouse.delta_y, transform);
            return;
        }

        if pan_held {
            self.pan(input.mouse.delta_x, input.mouse.delta_y, transform);
        }
    }

    /// Cast the cursor ray into the scene and adopt the hit as the new
    /// focus point. A miss (or a cursor outside the window) changes nothing.
    fn acquire_focus<F>(&mut self, input: &InputSnapshot, transform: &Transform, raycast: &mut F)
    where
        F: FnMut(Ray, f32, LayerMask) -> Option<Vec3>,
    {
        let Some(uv) = input.mouse.cursor else {
            return;
        };

        let ray = self.screen.cursor_ray(transform, uv);
        match raycast(ray, self.config.max_ray_distance, self.config.raycast_layers) {
            Some(point) => {
                let distance = transform.position.distance(point);
                log::debug!("focus acquired at {point} (distance {distance:.2})");
                self.focus = Some(Focus { point, distance });
            }
            None => log::trace!("focus raycast missed, keeping previous focus"),
        }
    }

    /// Scroll zoom with an accelerating curve.
    ///
    /// `new_dist = d - ((d + scroll)^2 - d^2)`: the step grows with both the
    /// scroll delta and the current distance, so large scrolls close in
    /// disproportionately fast. The camera is repositioned along the
    /// pre-zoom direction from the focus point.
    fn zoom(&mut self, scroll: f32, transform: &mut Transform) {
        let Some(focus) = self.focus.as_mut() else {
            return;
        };

        let d = focus.distance;
        let new_dist = (d - ((d + scroll) * (d + scroll) - d * d))
            .clamp(self.config.min_focus_distance, self.config.max_focus_distance);

        // Unguarded normalize: the minimum-distance clamp keeps the camera
        // off the focus point in normal use.
        let direction = (transform.position - focus.point).normalize();
        transform.position = focus.point + direction * new_dist;
        focus.distance = new_dist;
    }

    /// Orbit the camera around the focus point.
    ///
    /// Yaw orbit about world up runs first; the pitch orbit then reads the
    /// camera's right axis *after* that rotation, so the order is
    /// load-bearing. Afterwards yaw/pitch are resynchronized from the
    /// transform so a switch back to Free mode starts from the current look
    /// direction.
    fn orbit(&mut self, delta_x: f32, delta_y: f32, transform: &mut Transform) {
        let Some(focus) = self.focus else {
            return;
        };

        let yaw_turn =
            Quat::from_axis_angle(Vec3::Y, (delta_x * self.config.orbit_speed).to_radians());
        transform.rotate_around(focus.point, yaw_turn);

        let pitch_turn = Quat::from_axis_angle(
            transform.right(),
            (-delta_y * self.config.orbit_speed).to_radians(),
        );
        transform.rotate_around(focus.point, pitch_turn);

        let (yaw, pitch) = transform.angles();
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Pan camera and focus point together in the camera's screen plane.
    ///
    /// The identical translation on both sides preserves the camera-focus
    /// distance and orientation exactly. Pan speed scales with the focus
    /// distance so faraway targets pan proportionally faster.
    fn pan(&mut self, delta_x: f32, delta_y: f32, transform: &mut Transform) {
        let Some(focus) = self.focus.as_mut() else {
            return;
        };

        let amount = focus.distance * self.config.pan_speed_multiplier;
        let translation =
            transform.right() * (-delta_x * amount) + transform.up() * (-delta_y * amount);

        transform.position += translation;
        focus.point += translation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    fn no_hit(_: Ray, _: f32, _: LayerMask) -> Option<Vec3> {
        None
    }

    fn controller() -> (CameraController, Transform, InputSnapshot) {
        let transform = Transform::from_position(Vec3::new(0.0, 2.0, 8.0));
        let camera = CameraController::new(&transform, CameraConfig::default());
        (camera, transform, InputSnapshot::new())
    }

    #[test]
    fn test_initial_angles_from_transform() {
        let mut transform = Transform::default();
        transform.set_angles(1.2, -0.4);

        let camera = CameraController::new(&transform, CameraConfig::default());
        assert!((camera.yaw() - 1.2).abs() < 1e-4);
        assert!((camera.pitch() - (-0.4)).abs() < 1e-4);
    }

    #[test]
    fn test_starts_in_configured_mode() {
        let mut config = CameraConfig::default();
        config.default_mode = CameraMode::Focus;
        let camera = CameraController::new(&Transform::default(), config);
        assert_eq!(camera.mode(), CameraMode::Focus);
    }

    #[test]
    fn test_toggle_key_flips_mode() {
        let (mut camera, mut transform, mut input) = controller();
        assert_eq!(camera.mode(), CameraMode::Free);

        input.keys.handle_key(KeyCode::V, true);
        camera.tick(0.016, &input, &mut transform, no_hit);
        assert_eq!(camera.mode(), CameraMode::Focus);

        // Held key does not keep toggling
        input.end_tick();
        camera.tick(0.016, &input, &mut transform, no_hit);
        assert_eq!(camera.mode(), CameraMode::Focus);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let (mut camera, mut transform, mut input) = controller();
        let before_transform = transform;
        let (yaw, pitch) = (camera.yaw(), camera.pitch());

        for _ in 0..2 {
            input.keys.handle_key(KeyCode::V, true);
            camera.tick(0.016, &input, &mut transform, no_hit);
            input.end_tick();
            input.keys.handle_key(KeyCode::V, false);
        }

        assert_eq!(camera.mode(), CameraMode::Free);
        assert_eq!(camera.yaw(), yaw);
        assert_eq!(camera.pitch(), pitch);
        // One Free tick with no input: orientation rewritten from the same
        // angles, position untouched
        assert!((transform.position - before_transform.position).length() < 1e-6);
    }

    #[test]
    fn test_free_mouse_look() {
        let (mut camera, mut transform, mut input) = controller();
        input.mouse.accumulate_delta(100.0, -50.0);

        camera.tick(0.016, &input, &mut transform, no_hit);

        let sens = camera.config().look_sensitivity;
        assert!((camera.yaw() - 100.0 * sens).abs() < 1e-5);
        assert!((camera.pitch() - 50.0 * sens).abs() < 1e-5);
    }

    #[test]
    fn test_pitch_clamped_over_input_sequence() {
        let (mut camera, mut transform, mut input) = controller();

        for dy in [-4000.0, 9000.0, -200.0, -9000.0, 123.0_f32] {
            input.mouse.accumulate_delta(37.0, dy);
            camera.tick(0.016, &input, &mut transform, no_hit);
            input.end_tick();
            assert!(camera.pitch() <= PITCH_LIMIT);
            assert!(camera.pitch() >= -PITCH_LIMIT);
        }
    }

    #[test]
    fn test_free_forward_movement_scenario() {
        // speed 30, no sprint, forward axis 1, dt 0.1 => 3 units forward
        let mut config = CameraConfig::default();
        config.movement_speed = 30.0;
        let mut transform = Transform::from_position(Vec3::ZERO);
        let mut camera = CameraController::new(&transform, config);

        let mut input = InputSnapshot::new();
        input.axes.vertical = 1.0;
        camera.tick(0.1, &input, &mut transform, no_hit);

        let expected = transform.forward() * 3.0;
        assert!((transform.position - expected).length() < 1e-5);
    }

    #[test]
    fn test_sprint_scales_movement() {
        let (mut camera, mut transform, mut input) = controller();
        let start = transform.position;
        input.axes.vertical = 1.0;
        input.keys.handle_key(KeyCode::ShiftLeft, true);

        camera.tick(0.1, &input, &mut transform, no_hit);

        let expected = camera.config().movement_speed * camera.config().sprint_multiplier * 0.1;
        assert!((transform.position.distance(start) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_vertical_keys_drive_up_down() {
        let (mut camera, mut transform, mut input) = controller();
        let start_y = transform.position.y;
        input.keys.handle_key(KeyCode::E, true);

        camera.tick(0.1, &input, &mut transform, no_hit);
        assert!(transform.position.y > start_y);

        input.keys.handle_key(KeyCode::E, false);
        input.keys.handle_key(KeyCode::Q, true);
        camera.tick(0.3, &input, &mut transform, no_hit);
        assert!(transform.position.y < start_y);
    }

    #[test]
    fn test_focus_acquired_on_orbit_press() {
        let (mut camera, mut transform, mut input) = controller();
        camera.toggle_mode();
        input.mouse.set_cursor(400.0, 300.0, 800, 600);
        input.mouse.set_button(MouseButton::Right, true);

        let target = Vec3::new(0.0, 2.0, 0.0);
        camera.tick(0.016, &input, &mut transform, |_, _, _| Some(target));

        let focus = camera.focus().unwrap();
        assert_eq!(focus.point, target);
        assert!((focus.distance - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_focus_without_cursor() {
        let (mut camera, mut transform, mut input) = controller();
        camera.toggle_mode();
        input.mouse.set_button(MouseButton::Right, true);
        // cursor never set: raycast must not even run
        camera.tick(0.016, &input, &mut transform, |_, _, _| {
            panic!("raycast should not be called without a cursor")
        });

        assert!(camera.focus().is_none());
    }

    #[test]
    fn test_raycast_receives_configured_filter() {
        let mut config = CameraConfig::default();
        config.max_ray_distance = 123.0;
        config.raycast_layers = LayerMask::TERRAIN;
        config.default_mode = CameraMode::Focus;

        let mut transform = Transform::default();
        let mut camera = CameraController::new(&transform, config);
        let mut input = InputSnapshot::new();
        input.mouse.set_cursor(10.0, 10.0, 100, 100);
        input.mouse.set_button(MouseButton::Right, true);

        let mut seen = None;
        camera.tick(0.016, &input, &mut transform, |_, max_dist, layers| {
            seen = Some((max_dist, layers));
            None
        });

        assert_eq!(seen, Some((123.0, LayerMask::TERRAIN)));
    }

    #[test]
    fn test_orbit_without_focus_is_noop() {
        let (mut camera, mut transform, mut input) = controller();
        camera.toggle_mode();
        let before = transform;

        input.mouse.set_button(MouseButton::Right, true);
        input.mouse.accumulate_delta(50.0, 20.0);
        camera.tick(0.016, &input, &mut transform, no_hit);

        assert_eq!(transform, before);
    }
}
