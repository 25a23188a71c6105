//! Camera description shared with the web frontend.
//!
//! The engine never moves the camera. It only reads a [`CameraPose`] each
//! frame for the occlusion tunnel and the camera-relative carousel.

use glam::{Mat3, Mat4, Quat, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space pose of the camera.
    pub fn pose(&self) -> CameraPose {
        CameraPose::looking_at(self.eye, self.target, self.up)
    }
}

/// Read-only camera world transform. Local -Z is forward, +Y is up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation: rotation.normalize(),
        }
    }

    /// Pose at `eye` facing `target`. A degenerate direction keeps the
    /// identity orientation instead of producing NaNs.
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position: eye,
            rotation: safe_look_rotation(target - eye, up).unwrap_or(Quat::IDENTITY),
        }
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Map a camera-local point into world space.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

/// Rotation whose local -Z points along `dir` with +Y as close to `up` as
/// possible. `None` when `dir` is (near) zero; a parallel `up` falls back to
/// world Z as the reference.
pub fn safe_look_rotation(dir: Vec3, up: Vec3) -> Option<Quat> {
    let fwd = dir.try_normalize()?;
    let mut right = fwd.cross(up);
    if right.length_squared() < 1e-8 {
        right = fwd.cross(Vec3::Z);
        if right.length_squared() < 1e-8 {
            right = fwd.cross(Vec3::X);
        }
    }
    let right = right.normalize();
    let true_up = right.cross(fwd);
    Some(Quat::from_mat3(&Mat3::from_cols(right, true_up, -fwd)).normalize())
}
