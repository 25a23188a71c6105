//! Baubles, gift boxes and stars hung on the cone surface.
//!
//! Placement is rejection sampling with a minimum pairwise distance, bounded
//! by an attempt budget. Running out of attempts just yields fewer ornaments.

use crate::config::{OrnamentConfig, SpinConfig};
use crate::easing::{approach, approach_vec3, lerp, smoothstep};
use crate::instances::{shape, MeshInstance};
use crate::occlusion::{OcclusionTunnel, ViewRay};
use crate::palette::Palette;
use crate::sampler::{sample_sphere_shell, sample_tree_surface, TreeShape};
use fnv::FnvHashMap;
use glam::{EulerRot, Quat, Vec3, Vec4};
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentKind {
    Box,
    Sphere,
    Star,
}

impl OrnamentKind {
    /// Weighted roll: a quarter split box/sphere by height, a quarter
    /// stars, the remaining half spheres.
    pub fn roll(roll: f32, h: f32) -> Self {
        if roll < 0.25 {
            if h < 0.5 {
                OrnamentKind::Box
            } else {
                OrnamentKind::Sphere
            }
        } else if roll < 0.5 {
            OrnamentKind::Star
        } else {
            OrnamentKind::Sphere
        }
    }

    pub fn scale_multiplier(self, config: &OrnamentConfig) -> f32 {
        match self {
            OrnamentKind::Box => config.box_scale,
            OrnamentKind::Star => config.star_scale,
            OrnamentKind::Sphere => 1.0,
        }
    }

    pub fn emissive(self, config: &OrnamentConfig) -> f32 {
        match self {
            OrnamentKind::Box => config.emissive_box,
            OrnamentKind::Sphere => config.emissive_sphere,
            OrnamentKind::Star => config.emissive_star,
        }
    }

    fn shape_id(self) -> f32 {
        match self {
            OrnamentKind::Box => shape::BOX,
            OrnamentKind::Sphere => shape::SPHERE,
            OrnamentKind::Star => shape::STAR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentColor {
    Ruby,
    Gold,
}

#[derive(Clone, Debug)]
pub struct Ornament {
    pub tree: Vec3,
    pub scatter: Vec3,
    pub kind: OrnamentKind,
    pub base_scale: f32,
    pub color: OrnamentColor,
    /// Odd-indexed ornaments grow in only once scattering is underway.
    pub extra: bool,
    pub phase: f32,
    pub current: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

/// Uniform hash grid over accepted points, cell edge = minimum distance,
/// so every conflicting neighbour lies in the surrounding 3x3x3 block.
struct SpacingGrid {
    cell: f32,
    buckets: FnvHashMap<(i32, i32, i32), SmallVec<[usize; 4]>>,
}

impl SpacingGrid {
    fn new(cell: f32) -> Self {
        Self {
            cell,
            buckets: FnvHashMap::default(),
        }
    }

    fn key(&self, p: Vec3) -> (i32, i32, i32) {
        let c = (p / self.cell).floor();
        (c.x as i32, c.y as i32, c.z as i32)
    }

    fn too_close(&self, p: Vec3, points: &[Vec3], min_distance: f32) -> bool {
        let (kx, ky, kz) = self.key(p);
        let min_sq = min_distance * min_distance;
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(bucket) = self.buckets.get(&(kx + dx, ky + dy, kz + dz)) {
                        if bucket
                            .iter()
                            .any(|&i| points[i].distance_squared(p) < min_sq)
                        {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    fn insert(&mut self, p: Vec3, index: usize) {
        let key = self.key(p);
        self.buckets.entry(key).or_default().push(index);
    }
}

/// Rejection-sample up to `config.target_count` surface points no closer
/// than `config.min_distance` to each other.
pub fn place_on_surface<R: Rng + ?Sized>(
    shape: &TreeShape,
    config: &OrnamentConfig,
    rng: &mut R,
) -> Vec<(Vec3, f32)> {
    let mut points: Vec<Vec3> = Vec::with_capacity(config.target_count);
    let mut heights = Vec::with_capacity(config.target_count);
    let mut grid = SpacingGrid::new(config.min_distance);
    let mut attempts = 0usize;
    while points.len() < config.target_count && attempts < config.max_attempts {
        attempts += 1;
        let h = rng.gen_range(config.height_min..=config.height_max);
        let angle = rng.gen::<f32>() * TAU;
        let p = sample_tree_surface(shape, h, angle, config.surface_inset);
        if grid.too_close(p, &points, config.min_distance) {
            continue;
        }
        grid.insert(p, points.len());
        points.push(p);
        heights.push(h);
    }
    if points.len() < config.target_count {
        log::debug!(
            "[ornaments] placed {}/{} after {} attempts",
            points.len(),
            config.target_count,
            attempts
        );
    }
    points.into_iter().zip(heights).collect()
}

impl OrnamentConfig {
    pub fn target_scale(&self, ornament: &Ornament, progress: f32) -> f32 {
        let mut s = ornament.base_scale * (1.0 - progress * self.scatter_shrink);
        if ornament.extra {
            s *= smoothstep(0.0, self.extra_reveal_end, progress);
        }
        s
    }

    /// Local rotation layered under the group spin: boxes wobble on X/Z,
    /// stars turn about Y, spheres stay put.
    pub fn idle_rotation(&self, kind: OrnamentKind, phase: f32, time: f32) -> Quat {
        match kind {
            OrnamentKind::Box => Quat::from_euler(
                EulerRot::XYZ,
                (time + phase).sin() * self.wobble_amplitude,
                0.0,
                (time * self.wobble_rate + phase).cos() * self.wobble_amplitude,
            ),
            OrnamentKind::Star => Quat::from_rotation_y(time * self.star_spin_speed + phase),
            OrnamentKind::Sphere => Quat::IDENTITY,
        }
    }
}

/// Star sitting above the apex; shrinks and fades away while scattering.
#[derive(Clone, Debug)]
pub struct TopStar {
    pub position: Vec3,
    pub spin: f32,
}

pub struct OrnamentSet {
    ornaments: Vec<Ornament>,
    top_star: Option<TopStar>,
    instances: Vec<MeshInstance>,
    rotation_y: f32,
    spin: SpinConfig,
    config: OrnamentConfig,
    ruby: [f32; 3],
    gold: [f32; 3],
}

impl OrnamentSet {
    pub fn generate<R: Rng + ?Sized>(
        shape: &TreeShape,
        config: &OrnamentConfig,
        spin: SpinConfig,
        palette: &Palette,
        rng: &mut R,
    ) -> Self {
        let ornaments: Vec<Ornament> = place_on_surface(shape, config, rng)
            .into_iter()
            .enumerate()
            .map(|(i, (tree, h))| {
                let kind = OrnamentKind::roll(rng.gen::<f32>(), h);
                let color = match kind {
                    OrnamentKind::Box => OrnamentColor::Ruby,
                    OrnamentKind::Star => OrnamentColor::Gold,
                    OrnamentKind::Sphere if rng.gen_bool(0.5) => OrnamentColor::Ruby,
                    OrnamentKind::Sphere => OrnamentColor::Gold,
                };
                let base_scale = (config.scale_min + rng.gen::<f32>() * config.scale_span)
                    * kind.scale_multiplier(config);
                let extra = i % 2 == 1;
                Ornament {
                    tree,
                    scatter: sample_sphere_shell(config.shell_min, config.shell_max, rng),
                    kind,
                    base_scale,
                    color,
                    extra,
                    phase: rng.gen::<f32>() * TAU,
                    current: tree,
                    scale: if extra { 0.0 } else { base_scale },
                    opacity: 1.0,
                }
            })
            .collect();

        let top_star = config.top_star.then(|| TopStar {
            position: shape.apex() + Vec3::Y * config.top_star_lift,
            spin: 0.0,
        });
        log::info!(
            "[ornaments] {} placed (target {}), top star: {}",
            ornaments.len(),
            config.target_count,
            top_star.is_some()
        );
        let slots = ornaments.len() + usize::from(top_star.is_some());
        Self {
            ornaments,
            top_star,
            instances: vec![MeshInstance::default(); slots],
            rotation_y: 0.0,
            spin,
            config: *config,
            ruby: palette.ruby.to_array(),
            gold: palette.gold.to_array(),
        }
    }

    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    pub fn top_star(&self) -> Option<&TopStar> {
        self.top_star.as_ref()
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn config(&self) -> &OrnamentConfig {
        &self.config
    }

    /// Scale an ornament is heading toward at `progress`.
    pub fn target_scale(&self, ornament: &Ornament, progress: f32) -> f32 {
        self.config.target_scale(ornament, progress)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        progress: f32,
        dt_sec: f32,
        time_sec: f32,
        ray: &ViewRay,
        tunnel: &OcclusionTunnel,
        position_ease: f32,
        opacity_ease: f32,
    ) {
        let dt = dt_sec.max(0.0);
        self.rotation_y += dt * self.spin.speed(progress);
        let group = Quat::from_rotation_y(self.rotation_y);
        let config = &self.config;
        let base_opacity = lerp(1.0, config.opacity_scatter, progress);

        for (o, inst) in self.ornaments.iter_mut().zip(self.instances.iter_mut()) {
            let target = o.tree.lerp(o.scatter, progress);
            o.current = approach_vec3(o.current, target, position_ease);
            o.scale = approach(o.scale, config.target_scale(o, progress), position_ease);

            let world = group * o.current;
            let fade = tunnel.target_opacity(progress, ray, world);
            o.opacity = approach(o.opacity, fade, opacity_ease);

            let rgb = match o.color {
                OrnamentColor::Ruby => self.ruby,
                OrnamentColor::Gold => self.gold,
            };
            let rotation = group * config.idle_rotation(o.kind, o.phase, time_sec);
            *inst = MeshInstance::new(
                o.kind.shape_id(),
                world,
                rotation,
                o.scale,
                Vec4::new(rgb[0], rgb[1], rgb[2], base_opacity * o.opacity),
            );
            inst.params[1] = o.kind.emissive(config);
        }

        if let (Some(star), Some(inst)) = (self.top_star.as_mut(), self.instances.last_mut()) {
            star.spin += dt * self.config.star_spin_speed * self.config.top_star_spin_ratio;
            let remain = 1.0 - progress;
            *inst = MeshInstance::new(
                shape::STAR,
                star.position,
                Quat::from_rotation_y(star.spin),
                self.config.top_star_scale * remain,
                Vec4::new(self.gold[0], self.gold[1], self.gold[2], remain),
            );
            inst.params[1] = self.config.top_star_emissive;
        }
    }

    /// World-space instances: ornaments first, then the top star if any.
    pub fn instances(&self) -> &[MeshInstance] {
        &self.instances
    }
}
