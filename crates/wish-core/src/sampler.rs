//! Point distributions for the two configurations: a cone ("tree") centered
//! on the origin and a spherical shell ("scattered").
//!
//! Polar angles on the sphere always come from an `acos` inversion so points
//! spread by area instead of bunching at the poles.

use crate::easing::safe_ratio;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Cone of height `height` and base radius `radius`, apex up, vertically
/// centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeShape {
    pub height: f32,
    pub radius: f32,
}

impl TreeShape {
    pub const fn new(height: f32, radius: f32) -> Self {
        Self { height, radius }
    }

    /// Radius available at normalized height `h` (0 = base, 1 = apex).
    #[inline]
    pub fn radius_at(&self, h: f32) -> f32 {
        (1.0 - h.clamp(0.0, 1.0)) * self.radius
    }

    /// World-space Y for normalized height `h`.
    #[inline]
    pub fn y_at(&self, h: f32) -> f32 {
        h * self.height - self.height / 2.0
    }

    #[inline]
    pub fn apex(&self) -> Vec3 {
        Vec3::new(0.0, self.height / 2.0, 0.0)
    }

    /// Whether `p` lies inside the cone (with a small tolerance).
    pub fn contains(&self, p: Vec3, tolerance: f32) -> bool {
        let h = (p.y + self.height / 2.0) / self.height;
        if !(-tolerance..=1.0 + tolerance).contains(&h) {
            return false;
        }
        let r = (p.x * p.x + p.z * p.z).sqrt();
        r <= self.radius_at(h) + tolerance
    }
}

/// A sampled volume point and where it sits between trunk and needles.
#[derive(Clone, Copy, Debug)]
pub struct ConeSample {
    pub position: Vec3,
    /// Normalized height in [0, 1].
    pub height: f32,
    /// `r / radius_at(h)`; 0 at the apex where the disk collapses.
    pub radial: f32,
}

/// Point inside the cone at normalized height `h`. The in-disk radius uses
/// `sqrt(u)` so density is uniform per unit area of each slice.
pub fn sample_tree_volume<R: Rng + ?Sized>(shape: &TreeShape, h: f32, rng: &mut R) -> ConeSample {
    let h = h.clamp(0.0, 1.0);
    let radius_at_h = shape.radius_at(h);
    let angle = rng.gen::<f32>() * TAU;
    let r = rng.gen::<f32>().sqrt() * radius_at_h;
    ConeSample {
        position: Vec3::new(angle.cos() * r, shape.y_at(h), angle.sin() * r),
        height: h,
        radial: safe_ratio(r, radius_at_h),
    }
}

/// Point on the cone surface at normalized height `h` and `angle`, pushed in
/// or out by `inset` (1.0 is exactly on the surface).
#[inline]
pub fn sample_tree_surface(shape: &TreeShape, h: f32, angle: f32, inset: f32) -> Vec3 {
    let r = shape.radius_at(h) * inset;
    Vec3::new(angle.cos() * r, shape.y_at(h), angle.sin() * r)
}

/// Independent draw on a shell with radius uniform in `[min_radius, max_radius]`.
pub fn sample_sphere_shell<R: Rng + ?Sized>(min_radius: f32, max_radius: f32, rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let radius = if max_radius > min_radius {
        rng.gen_range(min_radius..=max_radius)
    } else {
        min_radius
    };
    spherical(radius, theta, phi)
}

/// Deterministic Fibonacci-lattice direction for slot `index` of `total`,
/// scaled by `radius`. Gives even coverage for large counts.
pub fn fibonacci_shell_point(index: usize, total: usize, radius: f32) -> Vec3 {
    let total = total.max(1) as f32;
    let phi = (-1.0 + (2.0 * index as f32) / total).clamp(-1.0, 1.0).acos();
    let theta = (total * PI).sqrt() * phi;
    spherical(radius, theta, phi)
}

#[inline]
fn spherical(radius: f32, theta: f32, phi: f32) -> Vec3 {
    let s = phi.sin();
    Vec3::new(
        radius * theta.cos() * s,
        radius * theta.sin() * s,
        radius * phi.cos(),
    )
}

/// Build the scene RNG: seeded when reproducibility is wanted, otherwise
/// from OS entropy.
pub fn scene_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Independent stream per collection; the parent advances once per child.
pub fn child_rng(parent: &mut StdRng, salt: u64) -> StdRng {
    let base: u64 = parent.gen();
    StdRng::seed_from_u64(base ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
