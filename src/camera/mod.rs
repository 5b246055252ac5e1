//! Camera Module
//!
//! Provides the dual-mode camera controller, its configuration, the camera
//! transform it reads from and writes to, and the ray/layer types used for
//! focus-point acquisition. This module is window-system agnostic - it only
//! deals with camera state and math.

pub mod config;
pub mod controller;
pub mod raycast;
pub mod transform;

pub use config::CameraConfig;
pub use controller::{CameraController, CameraMode, Focus};
pub use raycast::{LayerMask, Ray, ScreenConfig};
pub use transform::Transform;
