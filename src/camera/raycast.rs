//! Focus Raycast Support
//!
//! Ray and layer types for focus-point acquisition, plus the screen-space
//! math that places the cursor in world space. The scene raycast itself is
//! not performed here - the host injects it as a closure into
//! [`CameraController::tick`](super::controller::CameraController::tick),
//! so the controller stays testable without a physics engine.

use bitflags::bitflags;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::transform::Transform;

bitflags! {
    /// Scene layers a focus raycast is allowed to hit.
    ///
    /// Each layer is a bit in a 32-bit mask. The configured filter is handed
    /// to the host raycast closure unchanged; what the bits mean is up to
    /// the host scene.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct LayerMask: u32 {
        /// Default layer for most objects
        const DEFAULT = 1 << 0;
        /// Terrain / ground geometry
        const TERRAIN = 1 << 1;
        /// Placed props and meshes
        const PROPS = 1 << 2;
        /// Editor-only helper geometry
        const GIZMOS = 1 << 3;
        /// All layers
        const ALL = 0xFFFF_FFFF;
    }
}

/// A world-space ray handed to the host raycast service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin in world space
    pub origin: Vec3,
    /// Ray direction (normalized by construction)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Viewport projection parameters needed to place the cursor in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Screen aspect ratio (width / height)
    pub aspect_ratio: f32,
    /// Vertical field of view in radians
    pub fov: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            fov: 1.2, // ~69 degrees
        }
    }
}

impl ScreenConfig {
    /// Create a screen config with the given aspect ratio.
    pub fn with_aspect(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Default::default()
        }
    }

    /// Update the aspect ratio after a window resize. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    /// World-space point under the cursor, one unit of view depth from the
    /// camera.
    ///
    /// `uv` is the normalized cursor position (0-1, 0-1) with (0,0) at the
    /// bottom-left of the viewport.
    pub fn cursor_point(&self, camera: &Transform, uv: (f32, f32)) -> Vec3 {
        // Convert UV to NDC (-1 to 1)
        let ndc = (uv.0 * 2.0 - 1.0, uv.1 * 2.0 - 1.0);
        let half_fov = (self.fov * 0.5).tan();

        camera.position
            + camera.right() * (ndc.0 * self.aspect_ratio * half_fov)
            + camera.up() * (ndc.1 * half_fov)
            + camera.forward()
    }

    /// Build the ray used for focus acquisition.
    ///
    /// The origin is the world-space point under the cursor and the
    /// direction is the camera's view axis - not the per-pixel direction
    /// through the cursor. Off-center picks therefore probe a view-aligned
    /// column of the scene offset toward the cursor.
    pub fn cursor_ray(&self, camera: &Transform, uv: (f32, f32)) -> Ray {
        Ray::new(self.cursor_point(camera, uv), camera.forward())
    }
}
