//! Camera Transform
//!
//! World-space position and orientation for the viewport camera, decoupled
//! from any scene graph. The controller reads direction vectors from it and
//! writes the result of each tick back into it.

use glam::{EulerRot, Quat, Vec3};

/// World-space camera transform.
///
/// # Coordinate System
/// - +X = right
/// - +Y = up
/// - -Z = forward (OpenGL/Vulkan convention)
///
/// At yaw=0 and pitch=0 the camera looks toward -Z. Yaw rotates about world
/// +Y, pitch about the camera's right axis, and the controller keeps roll at
/// zero whenever it writes the orientation from angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Orientation as a unit quaternion
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a transform from a position and orientation.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Create a transform at the given position, looking toward -Z.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Get the camera's forward direction vector.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Get the camera's right direction vector.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the camera's local up direction vector.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Translate in the camera's local frame.
    ///
    /// `delta.x` moves along the right axis, `delta.y` along the local up
    /// axis, `delta.z` along the forward axis. Note that local up follows
    /// the camera's tilt; it is only world up while pitch is zero.
    pub fn translate_local(&mut self, delta: Vec3) {
        self.position += self.right() * delta.x + self.up() * delta.y + self.forward() * delta.z;
    }

    /// Rotate both position and orientation around a world-space point.
    ///
    /// The position is swung on the arc around `point` and the orientation
    /// picks up the same rotation, so a camera facing the point keeps
    /// facing it.
    pub fn rotate_around(&mut self, point: Vec3, rotation: Quat) {
        self.position = point + rotation * (self.position - point);
        self.rotation = rotation * self.rotation;
    }

    /// Set the orientation absolutely from yaw and pitch with zero roll.
    ///
    /// Produces `forward = (sin yaw * cos pitch, sin pitch, -cos yaw * cos pitch)`,
    /// so yaw=0 looks toward -Z and positive yaw turns toward +X.
    pub fn set_angles(&mut self, yaw: f32, pitch: f32) {
        // glam's positive Y rotation turns -Z toward -X, so the yaw sign is
        // flipped to keep positive yaw = turn right.
        self.rotation = Quat::from_euler(EulerRot::YXZ, -yaw, pitch, 0.0);
    }

    /// Extract (yaw, pitch) in radians from the current orientation.
    ///
    /// Inverse of [`set_angles`](Self::set_angles) up to roll: only the
    /// forward vector is consulted, any roll component is discarded.
    pub fn angles(&self) -> (f32, f32) {
        let f = self.forward();
        let yaw = f.x.atan2(-f.z);
        let pitch = f.y.clamp(-1.0, 1.0).asin();
        (yaw, pitch)
    }
}
