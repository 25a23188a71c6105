use crate::constants::*;
use glam::Vec3;
use wish_core::Camera;

/// Spherical orbit around a fixed pivot: slow auto-rotation, plus user drag
/// while the tree is still gathered.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Angle about +Y, zero looking down -Z.
    pub azimuth: f32,
    /// Angle from +Y.
    pub polar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(CAMERA_EYE, CAMERA_TARGET)
    }
}

impl OrbitCamera {
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1e-3);
        Self {
            target,
            distance,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + Vec3::new(sp * sa, cp, sp * ca) * self.distance
    }

    /// Auto-rotation rate for `progress`, in radians per second.
    pub fn auto_rotate_speed(progress: f32) -> f32 {
        let rate = if progress > AUTO_ROTATE_SWITCH {
            AUTO_ROTATE_SCATTER
        } else {
            AUTO_ROTATE_TREE
        };
        rate * AUTO_ROTATE_UNIT
    }

    pub fn auto_rotate(&mut self, dt_sec: f32, progress: f32) {
        self.azimuth += dt_sec.max(0.0) * Self::auto_rotate_speed(progress);
    }

    #[inline]
    pub fn accepts_input(progress: f32) -> bool {
        progress < ORBIT_INPUT_MAX_PROGRESS
    }

    /// Rotate by a pointer drag of (`dx`, `dy`) CSS pixels.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * ORBIT_DRAG_RAD_PER_PX;
        self.polar = (self.polar - dy * ORBIT_DRAG_RAD_PER_PX).clamp(ORBIT_MIN_POLAR, ORBIT_MAX_POLAR);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
