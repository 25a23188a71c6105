// Host-side tests for the whole scene driven through its public interface.

use glam::Vec3;
use wish_core::{CameraPose, Phase, PhotoStatus, SceneConfig, TreeScene};

const DT: f32 = 1.0 / 60.0;

fn small_config(seed: u64) -> SceneConfig {
    let mut config = SceneConfig::seeded(seed);
    config.particles.count = 2_000;
    config
}

fn scene(seed: u64) -> TreeScene {
    match TreeScene::new(small_config(seed)) {
        Ok(s) => s,
        Err(e) => panic!("config rejected: {e}"),
    }
}

fn camera() -> CameraPose {
    CameraPose::looking_at(Vec3::new(0.0, 5.0, 17.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y)
}

fn run(scene: &mut TreeScene, frames: usize) {
    let pose = camera();
    for _ in 0..frames {
        scene.tick(DT, &pose);
    }
}

#[test]
fn buffers_are_sized_at_construction() {
    let s = scene(1);
    assert_eq!(s.points().len(), 2_000);
    assert_eq!(s.ribbon_points().len(), 8 * 200);
    assert_eq!(s.card_instances().len(), 8);
    assert_eq!(s.ornament_instances().len(), s.ornaments().ornaments().len() + 1);
    assert_eq!(s.progress(), 0.0);
    assert_eq!(s.phase(), Phase::Tree);
}

#[test]
fn particles_hold_the_tree_at_rest() {
    let mut s = scene(2);
    run(&mut s, 120);
    let field = s.particles();
    for i in 0..field.len() {
        assert!(field.current[i].distance(field.tree[i]) < 1e-5);
        assert!(s.config.tree.contains(field.current[i], 1e-3));
    }
}

#[test]
fn particles_converge_to_the_shell_when_scattered() {
    let mut s = scene(3);
    s.trigger(true);
    run(&mut s, 300);
    assert_eq!(s.progress(), 1.0);
    let field = s.particles();
    for i in 0..field.len() {
        assert!(field.current[i].distance(field.scatter[i]) < 1e-3);
        let r = field.current[i].length();
        assert!((20.0 - 1e-2..=28.0 + 1e-2).contains(&r));
    }
    // Points buffer is written from the same positions.
    assert_eq!(s.points()[0].position, field.current[0].to_array());
    assert!((s.points()[0].size - 0.06).abs() < 1e-6);
}

#[test]
fn round_trip_returns_to_the_tree() {
    let mut s = scene(4);
    s.trigger(true);
    run(&mut s, 200);
    s.trigger(false);
    run(&mut s, 300);
    assert_eq!(s.progress(), 0.0);
    let field = s.particles();
    for i in 0..field.len() {
        assert!(field.current[i].distance(field.tree[i]) < 1e-3);
    }
}

#[test]
fn progress_steps_once_per_tick() {
    let mut s = scene(5);
    s.explode();
    run(&mut s, 10);
    assert!((s.progress() - 0.5).abs() < 1e-4);
    assert_eq!(s.phase(), Phase::Transitioning);
    run(&mut s, 10);
    assert_eq!(s.progress(), 1.0);
    assert!(s.is_exploded());
}

#[test]
fn ambient_brightens_as_the_tree_scatters() {
    let mut s = scene(6);
    let rest = s.ambient_intensity();
    s.trigger(true);
    run(&mut s, 20);
    assert!((rest - 0.4).abs() < 1e-6);
    assert!((s.ambient_intensity() - 0.8).abs() < 1e-6);
}

#[test]
fn ambient_levels_come_from_the_lighting_config() {
    let mut config = small_config(6);
    config.lighting.ambient_base = 0.1;
    config.lighting.ambient_scatter_boost = 0.5;
    let mut s = match TreeScene::new(config) {
        Ok(s) => s,
        Err(e) => panic!("config rejected: {e}"),
    };
    assert!((s.ambient_intensity() - 0.1).abs() < 1e-6);
    s.trigger(true);
    run(&mut s, 20);
    assert!((s.ambient_intensity() - 0.6).abs() < 1e-6);
}

#[test]
fn needle_colour_blend_comes_from_the_particle_config() {
    let mut config = small_config(8);
    config.particles.color_height_weight = 0.0;
    config.particles.color_radial_weight = 0.0;
    config.particles.color_jitter = 0.0;
    let s = match TreeScene::new(config) {
        Ok(s) => s,
        Err(e) => panic!("config rejected: {e}"),
    };
    assert!(s.particles().color_mix.iter().all(|&m| m == 0.0));

    let mut config = small_config(8);
    config.particles.color_height_weight = 0.0;
    config.particles.color_radial_weight = 0.0;
    config.particles.color_jitter = 5.0;
    let s = match TreeScene::new(config) {
        Ok(s) => s,
        Err(e) => panic!("config rejected: {e}"),
    };
    // Blend is clamped to 1 even when the weights overshoot.
    assert!(s.particles().color_mix.iter().all(|&m| m <= 1.0));
    assert!(s.particles().color_mix.iter().any(|&m| m == 1.0));
}

#[test]
fn hero_navigation() {
    let mut s = scene(7);
    assert_eq!(s.set_hero_index(3), 3);
    assert_eq!(s.step_hero(1), 4);
    s.set_hero_index(0);
    for _ in 0..5 {
        s.step_hero(-1);
    }
    assert_eq!(s.hero_index(), 3);
    let start = s.hero_index();
    for _ in 0..s.photo_count() {
        s.step_hero(1);
    }
    assert_eq!(s.hero_index(), start);
}

#[test]
fn hero_lands_in_front_of_the_camera() {
    let mut s = scene(8);
    s.set_hero_index(5);
    s.trigger(true);
    run(&mut s, 200);
    let pose = camera();
    let hero = s.card_instances()[5].translation();
    let offset = hero - pose.position;
    assert!((offset.length() - s.config.carousel.hero_depth).abs() < 1e-3);
    assert!(offset.normalize().dot(pose.forward()) > 0.999);
}

#[test]
fn switching_hero_moves_the_ring() {
    let mut s = scene(9);
    s.trigger(true);
    run(&mut s, 200);
    let before = s.card_instances()[0].translation();
    s.step_hero(1);
    run(&mut s, 60);
    let pose = camera();
    let hero = s.card_instances()[1].translation();
    assert!(((hero - pose.position).length() - 5.0).abs() < 1e-2);
    assert!(s.card_instances()[0].translation().distance(before) > 1.0);
}

#[test]
fn extras_grow_in_while_scattering() {
    let mut s = scene(10);
    run(&mut s, 10);
    for o in s.ornaments().ornaments().iter().filter(|o| o.extra) {
        assert_eq!(o.scale, 0.0);
    }
    s.trigger(true);
    run(&mut s, 300);
    for o in s.ornaments().ornaments() {
        let expected = o.base_scale * 0.5;
        assert!((o.scale - expected).abs() < 1e-4);
    }
}

#[test]
fn top_star_fades_away() {
    let mut s = scene(11);
    let last = s.ornament_instances().len() - 1;
    assert!(s.ornament_instances()[last].opacity() > 0.99);
    s.trigger(true);
    run(&mut s, 20);
    assert_eq!(s.ornament_instances()[last].opacity(), 0.0);
}

#[test]
fn ribbon_dims_and_scatters() {
    let mut s = scene(12);
    run(&mut s, 1);
    let rest_alpha = s.ribbon_points()[10].color[3];
    assert!((rest_alpha - 0.6).abs() < 1e-4);
    s.trigger(true);
    run(&mut s, 300);
    for p in s.ribbon().current() {
        assert!((p.length() - 19.0).abs() < 1e-2);
    }
    assert!(s.ribbon_points().iter().all(|p| p.color[3] <= 0.2 + 1e-5));
}

#[test]
fn ribbon_wraps_the_cone_from_base_to_apex() {
    let s = scene(13);
    let pts = s.ribbon().points();
    let first = pts[0].tree;
    let last = pts[pts.len() - 1].tree;
    assert!(first.y < last.y);
    let r = |p: Vec3| Vec3::new(p.x, 0.0, p.z).length();
    assert!((r(first) - 4.0 * 1.05).abs() < 1e-4);
    assert!(pts.iter().enumerate().all(|(i, p)| p.color_index as usize == i % 2));
}

#[test]
fn same_seed_same_layout() {
    let a = scene(14);
    let b = scene(14);
    assert_eq!(a.points(), b.points());
    assert_eq!(a.ornament_instances(), b.ornament_instances());
    let c = scene(15);
    assert_ne!(a.points(), c.points());
}

#[test]
fn photo_status_reaches_the_card_buffer() {
    let mut s = scene(16);
    s.set_photo_status(1, PhotoStatus::Unavailable);
    run(&mut s, 1);
    assert_eq!(s.card_instances()[1].params[2], PhotoStatus::Unavailable.code());
}

#[test]
fn scene_without_photos_still_runs() {
    let mut config = small_config(17);
    config.carousel.photos.clear();
    let mut s = match TreeScene::new(config) {
        Ok(s) => s,
        Err(e) => panic!("config rejected: {e}"),
    };
    assert_eq!(s.step_hero(1), 0);
    assert_eq!(s.set_hero_index(4), 0);
    s.trigger(true);
    run(&mut s, 30);
    assert!(s.card_instances().is_empty());
    assert_eq!(s.progress(), 1.0);
}

#[test]
fn occlusion_waits_for_the_threshold() {
    let mut s = scene(18);
    s.trigger(true);
    // Below the threshold nothing may fade, even mid-flight.
    for _ in 0..13 {
        s.tick(DT, &camera());
        assert!(s.progress() < 0.7);
        assert!(s.particles().opacity.iter().all(|&o| o == 1.0));
    }
    assert!(s.tunnel().active(1.0));
    assert!(!s.tunnel().active(s.progress()));
}
