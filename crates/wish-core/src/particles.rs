use crate::config::{ParticleConfig, SpinConfig};
use crate::easing::{approach, approach_vec3, lerp};
use crate::instances::PointInstance;
use crate::occlusion::{OcclusionTunnel, ViewRay};
use crate::palette::Palette;
use crate::sampler::{fibonacci_shell_point, sample_tree_volume, TreeShape};
use glam::{Quat, Vec3};
use rand::prelude::*;

/// The needle cloud: tens of thousands of points stored as parallel arrays.
///
/// `tree` and `scatter` are fixed after generation; `current` and `opacity`
/// are the eased, rendered values.
pub struct ParticleField {
    pub tree: Vec<Vec3>,
    pub scatter: Vec<Vec3>,
    pub current: Vec<Vec3>,
    pub color_mix: Vec<f32>,
    pub opacity: Vec<f32>,
    colors: Vec<[f32; 3]>,
    instances: Vec<PointInstance>,
    rotation_y: f32,
    config: ParticleConfig,
    spin: SpinConfig,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(
        shape: &TreeShape,
        config: ParticleConfig,
        spin: SpinConfig,
        palette: &Palette,
        rng: &mut R,
    ) -> Self {
        let n = config.count;
        let mut tree = Vec::with_capacity(n);
        let mut scatter = Vec::with_capacity(n);
        let mut color_mix = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);
        for i in 0..n {
            let sample = sample_tree_volume(shape, rng.gen::<f32>(), rng);
            tree.push(sample.position);

            let radius = rng.gen_range(config.shell_min..=config.shell_max);
            scatter.push(fibonacci_shell_point(i, n, radius));

            let mix = (sample.height * config.color_height_weight
                + sample.radial * config.color_radial_weight
                + rng.gen::<f32>() * config.color_jitter)
                .min(1.0);
            color_mix.push(mix);
            colors.push(palette.emerald.lerp(palette.emerald_bright, mix).to_array());
        }
        let current = tree.clone();
        let instances = tree
            .iter()
            .zip(&colors)
            .map(|(p, c)| PointInstance {
                position: p.to_array(),
                size: config.size_tree,
                color: [c[0], c[1], c[2], config.opacity_tree],
            })
            .collect();
        Self {
            tree,
            scatter,
            current,
            color_mix,
            opacity: vec![1.0; n],
            colors,
            instances,
            rotation_y: 0.0,
            config,
            spin,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Current spin of the whole cloud about Y.
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Material point size; follows progress directly, no easing.
    #[inline]
    pub fn point_size(&self, progress: f32) -> f32 {
        lerp(self.config.size_tree, self.config.size_scatter, progress)
    }

    #[inline]
    pub fn base_opacity(&self, progress: f32) -> f32 {
        lerp(self.config.opacity_tree, self.config.opacity_scatter, progress)
    }

    /// Rendered world position of particle `i` (group spin applied).
    #[inline]
    pub fn world_position(&self, i: usize) -> Vec3 {
        Quat::from_rotation_y(self.rotation_y) * self.current[i]
    }

    pub fn update(
        &mut self,
        progress: f32,
        dt_sec: f32,
        ray: &ViewRay,
        tunnel: &OcclusionTunnel,
        position_ease: f32,
        opacity_ease: f32,
    ) {
        self.rotation_y += dt_sec.max(0.0) * self.spin.speed(progress);
        let spin = Quat::from_rotation_y(self.rotation_y);
        let size = self.point_size(progress);
        let base_opacity = self.base_opacity(progress);
        let occlusion_on = tunnel.active(progress);

        for i in 0..self.tree.len() {
            let target = self.tree[i].lerp(self.scatter[i], progress);
            let pos = approach_vec3(self.current[i], target, position_ease);
            self.current[i] = pos;

            let fade_target = if occlusion_on && tunnel.contains(ray, spin * pos) {
                0.0
            } else {
                1.0
            };
            self.opacity[i] = approach(self.opacity[i], fade_target, opacity_ease);

            let c = self.colors[i];
            let inst = &mut self.instances[i];
            inst.position = pos.to_array();
            inst.size = size;
            inst.color = [c[0], c[1], c[2], base_opacity * self.opacity[i]];
        }
    }

    /// Per-point buffer in group-local space; apply [`Self::rotation_y`] as
    /// the model transform.
    pub fn instances(&self) -> &[PointInstance] {
        &self.instances
    }
}
