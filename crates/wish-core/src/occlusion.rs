//! Soft "clear tunnel" between the camera and the hero photo.
//!
//! Anything inside a cylinder along the view axis, between `depth_near` and
//! `depth_far` ahead of the camera, fades out once the scene is mostly
//! scattered so points and ornaments do not clip through the foreground card.

use crate::config::OcclusionConfig;
use crate::state::CameraPose;
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct OcclusionTunnel {
    pub threshold: f32,
    pub depth_near: f32,
    pub depth_far: f32,
    radius_sq: f32,
}

impl From<OcclusionConfig> for OcclusionTunnel {
    fn from(c: OcclusionConfig) -> Self {
        Self {
            threshold: c.threshold,
            depth_near: c.depth_near,
            depth_far: c.depth_far,
            radius_sq: c.radius * c.radius,
        }
    }
}

/// Camera terms reused for every entity tested in one frame.
#[derive(Clone, Copy, Debug)]
pub struct ViewRay {
    pub origin: Vec3,
    pub forward: Vec3,
}

impl From<&CameraPose> for ViewRay {
    fn from(pose: &CameraPose) -> Self {
        Self {
            origin: pose.position,
            forward: pose.forward(),
        }
    }
}

impl OcclusionTunnel {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius_sq.sqrt()
    }

    /// Whether the fade rule applies at all for this progress.
    #[inline]
    pub fn active(&self, progress: f32) -> bool {
        progress > self.threshold
    }

    /// Whether `world` lies inside the tunnel.
    pub fn contains(&self, ray: &ViewRay, world: Vec3) -> bool {
        let offset = world - ray.origin;
        let depth = offset.dot(ray.forward);
        if depth <= self.depth_near || depth >= self.depth_far {
            return false;
        }
        let perp_sq = offset.length_squared() - depth * depth;
        perp_sq < self.radius_sq
    }

    /// Opacity target for an entity at `world`: 0 inside an active tunnel,
    /// 1 everywhere else.
    #[inline]
    pub fn target_opacity(&self, progress: f32, ray: &ViewRay, world: Vec3) -> f32 {
        if self.active(progress) && self.contains(ray, world) {
            0.0
        } else {
            1.0
        }
    }
}
