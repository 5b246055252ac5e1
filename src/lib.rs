//! Viewcam
//!
//! A window-system agnostic camera controller for interactive 3D viewports.
//! It maps per-tick input state onto a camera transform and supports two
//! exclusive control schemes:
//!
//! - **Free mode** - unconstrained FPS-spectator fly-through
//! - **Focus mode** - CAD-style orbit/zoom/pan around a raycast-acquired
//!   focus point
//!
//! The host owns the render loop, the raw input events, the scene raycaster
//! and the final camera transform. This crate only performs the per-tick
//! mapping; it has no windowing, rendering or threading of its own.
//!
//! # Modules
//!
//! - [`camera`] - Controller state machine, configuration, transform math,
//!   and focus-ray construction
//! - [`input`] - Platform-agnostic per-tick input snapshot (keyboard, mouse,
//!   movement axes)
//!
//! # Example
//!
//! ```ignore
//! use viewcam::{CameraConfig, CameraController, InputSnapshot, Transform};
//! use glam::Vec3;
//!
//! let mut transform = Transform::from_position(Vec3::new(0.0, 2.0, 8.0));
//! let mut camera = CameraController::new(&transform, CameraConfig::default());
//! let mut input = InputSnapshot::new();
//!
//! // In the event loop: feed raw events into the snapshot.
//! input.mouse.accumulate_delta(dx, dy);
//! input.keys.handle_key(key, pressed);
//!
//! // Once per frame: tick the controller with an injected scene raycast.
//! camera.tick(delta_time, &input, &mut transform, |ray, max_dist, layers| {
//!     scene.raycast(ray.origin, ray.direction, max_dist, layers)
//! });
//! input.end_tick();
//! ```

pub mod camera;
pub mod input;

// Re-export the camera module contents at crate level for convenience
pub use camera::{
    CameraConfig, CameraController, CameraMode, Focus, LayerMask, Ray, ScreenConfig, Transform,
};
// Re-export commonly used input types
pub use input::{InputSnapshot, KeyCode, KeyState, MouseButton, MouseSnapshot, MoveAxes};
