//! GPU-facing per-entity records written every frame.
//!
//! Layouts are `repr(C)` and `Pod` so the frontend can upload the buffers
//! with `bytemuck::cast_slice` without copying.

use glam::{Mat4, Quat, Vec3, Vec4};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Shape id stored in `MeshInstance::params[0]`.
pub mod shape {
    pub const BOX: f32 = 0.0;
    pub const SPHERE: f32 = 1.0;
    pub const STAR: f32 = 2.0;
    pub const CARD: f32 = 3.0;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// `[shape, emissive, placeholder, 0]`.
    pub params: [f32; 4],
}

impl Default for MeshInstance {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [1.0; 4],
            params: [0.0; 4],
        }
    }
}

impl MeshInstance {
    pub fn new(shape: f32, translation: Vec3, rotation: Quat, scale: f32, color: Vec4) -> Self {
        let model = Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, translation);
        Self {
            model: model.to_cols_array_2d(),
            color: color.to_array(),
            params: [shape, 0.0, 0.0, 0.0],
        }
    }

    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.color[3]
    }
}
