// Host-side tests for photo card layout and hero selection.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wish_core::{safe_look_rotation, CameraPose, Carousel, HeroIndex, PhotoStatus, SceneConfig};

fn carousel(photos: usize) -> Carousel {
    let mut config = SceneConfig::default();
    config.carousel.photos.truncate(photos);
    Carousel::new(
        &config.tree,
        config.carousel,
        config.palette.pearl,
        &mut StdRng::seed_from_u64(17),
    )
}

fn camera() -> CameraPose {
    CameraPose::looking_at(Vec3::new(0.0, 5.0, 17.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y)
}

fn local(pose: &CameraPose, world: Vec3) -> Vec3 {
    pose.rotation.inverse() * (world - pose.position)
}

#[test]
fn hero_index_wraps_both_ways() {
    let mut h = HeroIndex::new(8);
    assert_eq!(h.set(3), 3);
    assert_eq!(h.step(1), 4);
    h.set(0);
    for _ in 0..5 {
        h.step(-1);
    }
    assert_eq!(h.get(), 3);
    assert_eq!(h.set(-1), 7);
    assert_eq!(h.set(19), 3);
}

#[test]
fn full_cycle_returns_to_start() {
    let mut h = HeroIndex::new(8);
    h.set(5);
    for _ in 0..8 {
        h.next();
    }
    assert_eq!(h.get(), 5);
    for _ in 0..8 {
        h.prev();
    }
    assert_eq!(h.get(), 5);
}

#[test]
fn hero_operations_are_noops_without_photos() {
    let mut h = HeroIndex::new(0);
    assert_eq!(h.next(), 0);
    assert_eq!(h.set(4), 0);
    let c = carousel(0);
    assert!(c.is_empty());
    assert!(c.instances().is_empty());
}

#[test]
fn extreme_steps_wrap_without_overflow() {
    let mut h = HeroIndex::new(8);
    h.set(3);
    // i64::MAX = 8k + 7, i64::MIN = -8k.
    assert_eq!(h.step(i64::MAX), 2);
    assert_eq!(h.step(i64::MIN), 2);
    assert_eq!(h.step(i64::MIN + 1), 3);
    assert_eq!(h.set(i64::MIN), 0);
    assert_eq!(h.set(i64::MAX), 7);
    assert_eq!(h.step(i64::MAX), 6);
}

#[test]
fn card_look_is_configurable() {
    let mut config = SceneConfig::default();
    config.carousel.photos.truncate(4);
    config.carousel.emissive_ring = 0.5;
    config.carousel.ring_opacity = 0.25;
    config.carousel.tilt_jitter = 0.0;
    config.carousel.roll_jitter = 0.0;
    config.carousel.scale_jitter = 0.0;
    let mut c = Carousel::new(
        &config.tree,
        config.carousel.clone(),
        config.palette.pearl,
        &mut StdRng::seed_from_u64(17),
    );
    for (i, card) in c.cards().iter().enumerate() {
        let t = i as f32 / 4.0;
        let tilt = config.carousel.base_tilt + config.carousel.top_tilt * t;
        assert!((card.anchor.tilt - tilt).abs() < 1e-6);
        assert_eq!(card.anchor.roll, 0.0);
        assert_eq!(card.anchor.scale, 1.0);
    }
    c.update(1.0, 0.0, &camera(), 0.25);
    let ring = &c.cards()[1];
    assert!((ring.emissive - 0.5).abs() < 1e-6);
    assert!((ring.opacity - 0.25).abs() < 1e-6);
    assert!((c.cards()[0].emissive - config.carousel.emissive_hero).abs() < 1e-6);
}

#[test]
fn tree_anchors_climb_the_spiral() {
    let c = carousel(8);
    let config = SceneConfig::default();
    let ys: Vec<f32> = c.cards().iter().map(|card| card.anchor.position.y).collect();
    assert!(ys.windows(2).all(|w| w[0] < w[1]));
    for card in c.cards() {
        let h = (card.anchor.position.y + config.tree.height / 2.0) / config.tree.height;
        assert!((0.55 - 1e-4..0.9).contains(&h));
        // Hung just outside the needles.
        let r = Vec3::new(card.anchor.position.x, 0.0, card.anchor.position.z).length();
        assert!((r - (config.tree.radius_at(h) + 0.5)).abs() < 1e-3);
    }
}

#[test]
fn arc_step_is_capped() {
    assert!((carousel(8).arc_step() - 0.6).abs() < 1e-6);
    assert!((carousel(3).arc_step() - 0.6).abs() < 1e-6);
    let mut config = SceneConfig::default();
    config.carousel.photos = (0..20).map(|i| wish_core::PhotoSource::new(format!("/{i}.jpg"))).collect();
    let c = Carousel::new(
        &config.tree,
        config.carousel,
        config.palette.pearl,
        &mut StdRng::seed_from_u64(1),
    );
    assert!((c.arc_step() - std::f32::consts::TAU / 20.0).abs() < 1e-6);
}

#[test]
fn hero_sits_at_depth_ahead_of_the_camera() {
    let mut c = carousel(8);
    c.hero_mut().set(2);
    let pose = camera();
    let t = c.carousel_transform(&c.cards()[2], &pose);
    let l = local(&pose, t.position);
    assert!((l - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-4);
    assert_eq!(t.scale, 1.5);
}

#[test]
fn neighbours_flank_the_hero() {
    let mut c = carousel(8);
    c.hero_mut().set(0);
    let pose = camera();
    let right = local(&pose, c.carousel_transform(&c.cards()[1], &pose).position);
    let left = local(&pose, c.carousel_transform(&c.cards()[7], &pose).position);
    assert!(right.x > 0.0 && left.x < 0.0);
    assert!((right.x + left.x).abs() < 1e-4);
    assert!((right.z - left.z).abs() < 1e-4);
    // Further around the ring means further back.
    let two = local(&pose, c.carousel_transform(&c.cards()[2], &pose).position);
    assert!(two.z < right.z);
    assert!(right.z < -5.0);
    assert!((right.y - 0.4).abs() < 1e-4);
}

#[test]
fn cards_face_the_camera() {
    let c = carousel(8);
    let pose = camera();
    for card in c.cards() {
        let t = c.carousel_transform(card, &pose);
        let front = t.rotation * Vec3::Z;
        let to_camera = (pose.position - t.position).normalize();
        assert!(front.dot(to_camera) > 0.99);
    }
}

#[test]
fn cards_ease_into_the_ring() {
    let mut c = carousel(8);
    c.hero_mut().set(3);
    let pose = camera();
    for _ in 0..200 {
        c.update(1.0, 1.0 / 60.0, &pose, 0.25);
    }
    let hero = &c.cards()[3];
    let l = local(&pose, hero.rendered.position);
    assert!((l - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-3);
    assert!((hero.rendered.scale - 1.5).abs() < 1e-3);
    assert!((hero.emissive - 1.0).abs() < 1e-6);
    assert!((c.cards()[4].opacity - 0.7).abs() < 1e-6);
    let inst = c.instances()[3];
    assert!((inst.translation() - hero.rendered.position).length() < 1e-4);
}

#[test]
fn tree_pose_orbits_and_sways() {
    let mut c = carousel(8);
    let pose = camera();
    let before = c.tree_transform(&c.cards()[0]);
    c.update(0.0, 2.0, &pose, 0.25);
    let after = c.tree_transform(&c.cards()[0]);
    assert!((before.position - after.position).length() > 1e-3);
    let r = |p: Vec3| Vec3::new(p.x, 0.0, p.z).length();
    assert!((r(before.position) - r(after.position)).abs() < 1e-4);
    assert!((after.position.y - c.cards()[0].anchor.position.y).abs() <= 0.1 + 1e-5);
}

#[test]
fn unavailable_photos_keep_their_slot() {
    let mut c = carousel(8);
    let pose = camera();
    c.set_status(2, PhotoStatus::Unavailable);
    c.set_status(5, PhotoStatus::Ready);
    c.set_status(99, PhotoStatus::Ready);
    c.update(1.0, 0.0, &pose, 0.25);
    assert_eq!(c.instances()[2].params[2], PhotoStatus::Unavailable.code());
    assert_eq!(c.instances()[5].params[2], PhotoStatus::Ready.code());
    assert_eq!(c.instances()[0].params[2], PhotoStatus::Pending.code());
    assert_eq!(c.cards()[2].status, PhotoStatus::Unavailable);
    assert_eq!(c.len(), 8);
    // Layout ignores status: the flagged card keeps its ring slot.
    let slot = local(&pose, c.carousel_transform(&c.cards()[2], &pose).position);
    assert!(slot.x > 0.0);
}

#[test]
fn look_rotation_handles_degenerate_input() {
    assert!(safe_look_rotation(Vec3::ZERO, Vec3::Y).is_none());
    let q = safe_look_rotation(Vec3::Y * 3.0, Vec3::Y).map(|q| q * Vec3::NEG_Z);
    let fwd = q.unwrap_or(Vec3::ZERO);
    assert!((fwd - Vec3::Y).length() < 1e-4);
}
