use crate::config::RibbonConfig;
use crate::easing::{approach, approach_vec3, lerp};
use crate::instances::PointInstance;
use crate::occlusion::{OcclusionTunnel, ViewRay};
use crate::palette::Palette;
use crate::sampler::{sample_sphere_shell, sample_tree_surface, TreeShape};
use glam::{Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct RibbonPoint {
    pub tree: Vec3,
    pub scatter: Vec3,
    pub color_index: u8,
}

/// Tree-space point `i` of `count` on a helix of `loops` turns hugging the
/// cone from base to apex.
pub fn helix_point(shape: &TreeShape, i: usize, count: usize, loops: usize, offset: f32) -> Vec3 {
    let t = i as f32 / count.max(1) as f32;
    let angle = t * TAU * loops as f32;
    sample_tree_surface(shape, t, angle, offset)
}

/// Gold garland wound around the tree. Turns ghostly once scattered.
pub struct Ribbon {
    points: Vec<RibbonPoint>,
    current: Vec<Vec3>,
    opacity: Vec<f32>,
    colors: [[f32; 3]; 2],
    instances: Vec<PointInstance>,
    rotation_y: f32,
    config: RibbonConfig,
}

impl Ribbon {
    pub fn generate<R: Rng + ?Sized>(
        shape: &TreeShape,
        config: RibbonConfig,
        palette: &Palette,
        rng: &mut R,
    ) -> Self {
        let count = config.loops * config.points_per_loop;
        let points: Vec<RibbonPoint> = (0..count)
            .map(|i| RibbonPoint {
                tree: helix_point(shape, i, count, config.loops, config.surface_offset),
                scatter: sample_sphere_shell(config.shell_radius, config.shell_radius, rng),
                color_index: (i % 2) as u8,
            })
            .collect();
        let current: Vec<Vec3> = points.iter().map(|p| p.tree).collect();
        let colors = [palette.gold.to_array(), palette.gold_amber.to_array()];
        let instances = points
            .iter()
            .map(|p| {
                let c = colors[p.color_index as usize];
                PointInstance {
                    position: p.tree.to_array(),
                    size: config.point_size,
                    color: [c[0], c[1], c[2], config.opacity_tree],
                }
            })
            .collect();
        log::debug!("[ribbon] {} points over {} loops", count, config.loops);
        Self {
            current,
            opacity: vec![1.0; count],
            colors,
            instances,
            points,
            rotation_y: 0.0,
            config,
        }
    }

    pub fn points(&self) -> &[RibbonPoint] {
        &self.points
    }

    pub fn current(&self) -> &[Vec3] {
        &self.current
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn base_opacity(&self, progress: f32) -> f32 {
        lerp(self.config.opacity_tree, self.config.opacity_scatter, progress)
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
        self.rotation_y += dt_sec.max(0.0) * self.config.spin_speed;
        let spin = Quat::from_rotation_y(self.rotation_y);
        let base = self.base_opacity(progress);
        let occlusion_on = self.config.occlusion && tunnel.active(progress);

        for (i, p) in self.points.iter().enumerate() {
            let target = p.tree.lerp(p.scatter, progress);
            let pos = approach_vec3(self.current[i], target, position_ease);
            self.current[i] = pos;

            let fade = if occlusion_on && tunnel.contains(ray, spin * pos) {
                0.0
            } else {
                1.0
            };
            self.opacity[i] = approach(self.opacity[i], fade, opacity_ease);

            let c = self.colors[p.color_index as usize];
            self.instances[i] = PointInstance {
                position: pos.to_array(),
                size: self.config.point_size,
                color: [c[0], c[1], c[2], base * self.opacity[i]],
            };
        }
    }

    /// Group-local buffer; apply [`Self::rotation_y`] as the model transform.
    pub fn instances(&self) -> &[PointInstance] {
        &self.instances
    }
}
