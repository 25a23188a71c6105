// Procedural geometry for the instanced mesh pass.
//
// Every shape lives in one vertex buffer, each vertex tagged with its shape
// id. The vertex shader collapses vertices whose tag does not match the
// instance's shape, so a single draw covers a mixed instance buffer.

use glam::Vec3;
use std::f32::consts::{PI, TAU};
use std::ops::Range;
use wish_core::shape;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub shape: f32,
    pub normal: [f32; 3],
    /// 1 on trim: the gold band of a box, the pearl backing of a card.
    pub accent: f32,
}

fn vertex(p: Vec3, n: Vec3, shape: f32, accent: f32) -> MeshVertex {
    MeshVertex {
        position: p.to_array(),
        shape,
        normal: n.to_array(),
        accent,
    }
}

/// Axis-aligned box centered on the origin.
pub fn cuboid(half: Vec3, shape: f32, accent: f32) -> Vec<MeshVertex> {
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::Z, Vec3::NEG_X),
        (Vec3::Z, Vec3::Y, Vec3::NEG_X),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let c = n * half;
        let du = u * half;
        let dv = v * half;
        let quad = [c - du - dv, c + du - dv, c + du + dv, c - du + dv];
        for i in [0, 1, 2, 0, 2, 3] {
            out.push(vertex(quad[i], n, shape, accent));
        }
    }
    out
}

/// Gift box: unit cube with a flat gold band around its middle.
pub fn gift_box() -> Vec<MeshVertex> {
    let mut out = cuboid(Vec3::splat(0.5), shape::BOX, 0.0);
    out.extend(cuboid(Vec3::new(0.55, 0.1, 0.55), shape::BOX, 1.0));
    out
}

/// Unit sphere as a latitude/longitude grid.
pub fn sphere(rings: u32, segments: u32) -> Vec<MeshVertex> {
    let point = |r: u32, s: u32| {
        let theta = r as f32 / rings as f32 * PI;
        let phi = s as f32 / segments as f32 * TAU;
        Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin())
    };
    let mut out = Vec::with_capacity((rings * segments * 6) as usize);
    for r in 0..rings {
        for s in 0..segments {
            let a = point(r, s);
            let b = point(r + 1, s);
            let c = point(r + 1, s + 1);
            let d = point(r, s + 1);
            for p in [a, b, c, a, c, d] {
                out.push(vertex(p, p, shape::SPHERE, 0.0));
            }
        }
    }
    out
}

/// Unit octahedron with flat-shaded faces.
pub fn octahedron() -> Vec<MeshVertex> {
    let tips = [Vec3::Y, Vec3::NEG_Y];
    let ring = [Vec3::X, Vec3::Z, Vec3::NEG_X, Vec3::NEG_Z];
    let mut out = Vec::with_capacity(24);
    for tip in tips {
        for i in 0..4 {
            let a = ring[i];
            let b = ring[(i + 1) % 4];
            let (a, b) = if tip.y > 0.0 { (b, a) } else { (a, b) };
            let n = (a + b + tip).normalize();
            for p in [tip, a, b] {
                out.push(vertex(p, n, shape::STAR, 0.0));
            }
        }
    }
    out
}

/// Photo card facing +Z: a pearl backing with a square picture area set
/// toward the top, just in front of it.
pub fn card() -> Vec<MeshVertex> {
    let quad = |center: Vec3, half_w: f32, half_h: f32, accent: f32| {
        let corners = [
            center + Vec3::new(-half_w, -half_h, 0.0),
            center + Vec3::new(half_w, -half_h, 0.0),
            center + Vec3::new(half_w, half_h, 0.0),
            center + Vec3::new(-half_w, half_h, 0.0),
        ];
        [0, 1, 2, 0, 2, 3].map(|i| vertex(corners[i], Vec3::Z, shape::CARD, accent))
    };
    let mut out = Vec::with_capacity(12);
    out.extend(quad(Vec3::new(0.0, 0.0, -0.01), 0.6, 0.75, 1.0));
    out.extend(quad(Vec3::new(0.0, 0.15, 0.0), 0.5, 0.5, 0.0));
    out
}

/// All shapes in one buffer: ornament shapes first, then the card.
pub struct MeshSet {
    pub vertices: Vec<MeshVertex>,
    /// Ornament draws use `0..ornament_vertex_count`.
    pub ornament_vertex_count: u32,
    pub card_vertex_range: Range<u32>,
}

impl MeshSet {
    pub fn build() -> Self {
        let mut vertices = gift_box();
        vertices.extend(sphere(16, 16));
        vertices.extend(octahedron());
        let ornament_vertex_count = vertices.len() as u32;
        vertices.extend(card());
        let card_vertex_range = ornament_vertex_count..vertices.len() as u32;
        Self {
            vertices,
            ornament_vertex_count,
            card_vertex_range,
        }
    }
}
