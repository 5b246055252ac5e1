//! Camera Configuration
//!
//! Centralizes every tunable of the camera controller - key bindings,
//! speeds, sensitivities and focus-distance bounds - so hosts can tweak the
//! feel without touching controller code. Supplied at construction and
//! never mutated at runtime.

use serde::{Deserialize, Serialize};

use super::controller::CameraMode;
use super::raycast::LayerMask;
use crate::input::KeyCode;

/// Camera controller configuration.
///
/// Distance bounds are taken on trust: `min_focus_distance` is assumed to
/// be <= `max_focus_distance` and is not validated; a reversed pair makes
/// the zoom clamp order-dependent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Key that toggles between Free and Focus mode
    pub toggle_key: KeyCode,
    /// Key held to sprint in Free mode
    pub sprint_key: KeyCode,
    /// Key held to fly up in Free mode
    pub up_key: KeyCode,
    /// Key held to fly down in Free mode
    pub down_key: KeyCode,

    /// Free-mode movement speed in world units per second
    pub movement_speed: f32,
    /// Free-mode look sensitivity in radians per unit of mouse delta
    pub look_sensitivity: f32,
    /// Movement speed multiplier while the sprint key is held
    pub sprint_multiplier: f32,

    /// Orbit speed in degrees per unit of mouse delta
    pub orbit_speed: f32,
    /// Declared zoom multiplier; the quadratic zoom curve does not read it,
    /// the field is kept so existing config files stay valid
    pub zoom_speed_multiplier: f32,
    /// Pan speed factor, multiplied by the focus distance for
    /// depth-proportional panning
    pub pan_speed_multiplier: f32,

    /// Lower bound for the focus distance
    pub min_focus_distance: f32,
    /// Upper bound for the focus distance
    pub max_focus_distance: f32,
    /// Maximum length of the focus acquisition ray
    pub max_ray_distance: f32,
    /// Layers the focus ray may hit
    pub raycast_layers: LayerMask,

    /// Mode the controller starts in
    pub default_mode: CameraMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            toggle_key: KeyCode::V,
            sprint_key: KeyCode::ShiftLeft,
            up_key: KeyCode::E,
            down_key: KeyCode::Q,
            movement_speed: 10.0,    // 10 units/s cruising speed
            look_sensitivity: 0.002, // standard FPS feel, radians per pixel
            sprint_multiplier: 2.0,
            orbit_speed: 0.3, // degrees per pixel
            zoom_speed_multiplier: 1.0,
            pan_speed_multiplier: 0.005,
            min_focus_distance: 1.0,
            max_focus_distance: 100.0,
            max_ray_distance: 500.0,
            raycast_layers: LayerMask::ALL,
            default_mode: CameraMode::Free,
        }
    }
}

impl CameraConfig {
    /// Load a configuration from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
