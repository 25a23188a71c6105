// Host-side tests for the procedural mesh set.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/render/mesh.rs");
}

use glam::Vec3;
use mesh::*;
use wish_core::shape;

#[test]
fn shapes_are_whole_triangles() {
    assert_eq!(cuboid(Vec3::ONE, shape::BOX, 0.0).len(), 36);
    assert_eq!(gift_box().len(), 72);
    assert_eq!(sphere(16, 16).len(), 16 * 16 * 6);
    assert_eq!(octahedron().len(), 24);
    assert_eq!(card().len(), 12);
}

#[test]
fn every_vertex_carries_its_shape_tag() {
    assert!(gift_box().iter().all(|v| v.shape == shape::BOX));
    assert!(sphere(8, 8).iter().all(|v| v.shape == shape::SPHERE));
    assert!(octahedron().iter().all(|v| v.shape == shape::STAR));
    assert!(card().iter().all(|v| v.shape == shape::CARD));
}

#[test]
fn normals_are_unit_length() {
    let all = MeshSet::build().vertices;
    for v in &all {
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4, "bad normal {:?}", v);
    }
}

#[test]
fn gift_box_band_is_the_accent() {
    let verts = gift_box();
    let accent = verts.iter().filter(|v| v.accent == 1.0).count();
    assert_eq!(accent, 36);
    for v in verts.iter().filter(|v| v.accent == 1.0) {
        assert!(v.position[1].abs() <= 0.1 + 1e-6);
    }
}

#[test]
fn octahedron_faces_point_outward() {
    for tri in octahedron().chunks(3) {
        let a = Vec3::from(tri[0].position);
        let b = Vec3::from(tri[1].position);
        let c = Vec3::from(tri[2].position);
        let centroid = (a + b + c) / 3.0;
        let n = Vec3::from(tri[0].normal);
        assert!(n.dot(centroid) > 0.0);
    }
}

#[test]
fn card_picture_sits_in_front_of_backing() {
    let verts = card();
    let backing: Vec<_> = verts.iter().filter(|v| v.accent == 1.0).collect();
    let picture: Vec<_> = verts.iter().filter(|v| v.accent == 0.0).collect();
    assert_eq!(backing.len(), 6);
    assert_eq!(picture.len(), 6);
    assert!(picture.iter().all(|v| v.position[2] > backing[0].position[2]));
    let max_x = |vs: &[&MeshVertex]| vs.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
    assert!(max_x(&picture) < max_x(&backing));
}

#[test]
fn mesh_set_ranges_partition_the_buffer() {
    let set = MeshSet::build();
    assert_eq!(set.card_vertex_range.start, set.ornament_vertex_count);
    assert_eq!(set.card_vertex_range.end as usize, set.vertices.len());
    let cards = &set.vertices[set.card_vertex_range.start as usize..];
    assert!(cards.iter().all(|v| v.shape == shape::CARD));
    let ornaments = &set.vertices[..set.ornament_vertex_count as usize];
    assert!(ornaments.iter().all(|v| v.shape != shape::CARD));
}

#[test]
fn vertex_layout_matches_shader_stride() {
    assert_eq!(std::mem::size_of::<MeshVertex>(), 32);
}
