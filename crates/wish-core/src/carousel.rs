//! Photo cards: hung on a spiral around the tree, then gathered into a
//! camera-facing carousel around a "hero" slot when the tree scatters.
//!
//! Layout depends only on each card's index and the card count, never on the
//! image itself, so a card whose picture is still loading or failed to load
//! moves exactly like the others and is merely flagged for a placeholder.

use crate::config::{CarouselConfig, PhotoSource};
use crate::easing::{approach, approach_vec3, circular_offset, lerp, wrap_index};
use crate::instances::{shape, MeshInstance};
use crate::palette::Rgb;
use crate::sampler::TreeShape;
use crate::state::{safe_look_rotation, CameraPose};
use glam::{EulerRot, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PhotoStatus {
    #[default]
    Pending,
    Ready,
    Unavailable,
}

impl PhotoStatus {
    /// Value written to `MeshInstance::params[2]` for the renderer.
    pub fn code(self) -> f32 {
        match self {
            PhotoStatus::Ready => 0.0,
            PhotoStatus::Pending => 1.0,
            PhotoStatus::Unavailable => 2.0,
        }
    }
}

/// Position, orientation and uniform scale of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl CardTransform {
    /// Linear position/scale, spherical rotation.
    pub fn blend(&self, other: &CardTransform, t: f32) -> CardTransform {
        CardTransform {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation.slerp(other.rotation, t),
            scale: lerp(self.scale, other.scale, t),
        }
    }

    /// Move a fixed fraction of the way toward `target`.
    pub fn ease_toward(&mut self, target: &CardTransform, factor: f32) {
        self.position = approach_vec3(self.position, target.position, factor);
        self.rotation = self.rotation.slerp(target.rotation, factor).normalize();
        self.scale = approach(self.scale, target.scale, factor);
    }
}

/// Spiral anchor fixed when the card is built, jitter included.
#[derive(Clone, Copy, Debug)]
pub struct TreeAnchor {
    pub position: Vec3,
    pub angle: f32,
    pub radius: f32,
    pub tilt: f32,
    pub roll: f32,
    pub scale: f32,
}

impl TreeAnchor {
    pub fn new<R: Rng + ?Sized>(
        shape: &TreeShape,
        config: &CarouselConfig,
        index: usize,
        total: usize,
        rng: &mut R,
    ) -> Self {
        let t = index as f32 / total.max(1) as f32;
        let h = config.height_min + t * (config.height_max - config.height_min);
        let angle = t * TAU * config.spiral_loops;
        let radius = shape.radius_at(h) + config.surface_offset;
        let position = Vec3::new(angle.cos() * radius, shape.y_at(h), angle.sin() * radius);
        Self {
            position,
            angle,
            radius,
            tilt: config.base_tilt
                + config.top_tilt * t
                + rng.gen_range(-config.tilt_jitter..=config.tilt_jitter),
            roll: rng.gen_range(-config.roll_jitter..=config.roll_jitter),
            scale: 1.0 + rng.gen_range(-config.scale_jitter..=config.scale_jitter),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PhotoCard {
    pub source: PhotoSource,
    pub index: usize,
    pub anchor: TreeAnchor,
    pub sway_phase: f32,
    pub sway_speed: f32,
    pub status: PhotoStatus,
    pub rendered: CardTransform,
    pub emissive: f32,
    pub opacity: f32,
}

/// Index of the front-and-center card, always wrapped into `[0, total)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroIndex {
    index: usize,
    total: usize,
}

impl HeroIndex {
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn set(&mut self, index: i64) -> usize {
        self.index = wrap_index(index, self.total);
        self.index
    }

    /// Move by `delta` slots. The delta is wrapped first so huge steps
    /// cannot overflow the sum.
    pub fn step(&mut self, delta: i64) -> usize {
        self.set(self.index as i64 + wrap_index(delta, self.total) as i64)
    }

    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }
}

pub struct Carousel {
    cards: Vec<PhotoCard>,
    hero: HeroIndex,
    config: CarouselConfig,
    pearl: Rgb,
    time: f32,
    instances: Vec<MeshInstance>,
}

impl Carousel {
    pub fn new<R: Rng + ?Sized>(
        shape: &TreeShape,
        config: CarouselConfig,
        pearl: Rgb,
        rng: &mut R,
    ) -> Self {
        let total = config.photos.len();
        let cards: Vec<PhotoCard> = config
            .photos
            .iter()
            .enumerate()
            .map(|(index, source)| {
                let anchor = TreeAnchor::new(shape, &config, index, total, rng);
                PhotoCard {
                    source: source.clone(),
                    index,
                    sway_phase: rng.gen::<f32>() * TAU,
                    sway_speed: config.sway_speed_min + rng.gen::<f32>() * config.sway_speed_span,
                    status: PhotoStatus::Pending,
                    rendered: CardTransform {
                        position: anchor.position,
                        rotation: tree_rotation(anchor.angle, anchor.tilt, anchor.roll),
                        scale: anchor.scale,
                    },
                    anchor,
                    emissive: config.emissive_tree,
                    opacity: 1.0,
                }
            })
            .collect();
        log::info!("[carousel] {} photo cards", total);
        Self {
            instances: vec![MeshInstance::default(); cards.len()],
            cards,
            hero: HeroIndex::new(total),
            config,
            pearl,
            time: 0.0,
        }
    }

    pub fn cards(&self) -> &[PhotoCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn hero(&self) -> &HeroIndex {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut HeroIndex {
        &mut self.hero
    }

    /// Record the loading outcome of a card's picture. Out-of-range indices
    /// are ignored.
    pub fn set_status(&mut self, index: usize, status: PhotoStatus) {
        if let Some(card) = self.cards.get_mut(index) {
            if status == PhotoStatus::Unavailable && card.status != PhotoStatus::Unavailable {
                log::warn!("[carousel] photo {} unavailable: {}", index, card.source.image);
            }
            card.status = status;
        }
    }

    /// Idle pose on the tree: orbiting slowly with a gentle vertical sway.
    pub fn tree_transform(&self, card: &PhotoCard) -> CardTransform {
        let a = &card.anchor;
        let angle = a.angle + self.time * self.config.orbit_speed;
        let sway = (self.time * card.sway_speed + card.sway_phase).sin() * self.config.sway_amplitude;
        CardTransform {
            position: Vec3::new(angle.cos() * a.radius, a.position.y + sway, angle.sin() * a.radius),
            rotation: tree_rotation(angle, a.tilt, a.roll),
            scale: a.scale,
        }
    }

    /// Angle between neighbouring cards on the carousel arc.
    pub fn arc_step(&self) -> f32 {
        let n = self.cards.len().max(1) as f32;
        (TAU / n).min(self.config.max_arc_step)
    }

    /// Camera-relative pose around the hero slot, facing the camera.
    pub fn carousel_transform(&self, card: &PhotoCard, camera: &CameraPose) -> CardTransform {
        let c = &self.config;
        let (local, scale) = if card.index == self.hero.get() {
            (Vec3::new(0.0, 0.0, -c.hero_depth), c.hero_scale)
        } else {
            let offset = circular_offset(self.hero.get(), card.index, self.cards.len());
            let a = offset as f32 * self.arc_step();
            let local = Vec3::new(
                a.sin() * c.arc_radius,
                c.arc_lift,
                -(c.hero_depth + c.arc_depth + (1.0 - a.cos()) * c.arc_radius),
            );
            (local, c.ring_scale)
        };
        let position = camera.to_world(local);
        let rotation =
            safe_look_rotation(position - camera.position, camera.up()).unwrap_or(camera.rotation);
        CardTransform {
            position,
            rotation,
            scale,
        }
    }

    pub fn update(&mut self, progress: f32, dt_sec: f32, camera: &CameraPose, ease: f32) {
        self.time += dt_sec.max(0.0);
        let hero = self.hero.get();
        let (emissive_tree, emissive_hero, emissive_ring, ring_opacity) = (
            self.config.emissive_tree,
            self.config.emissive_hero,
            self.config.emissive_ring,
            self.config.ring_opacity,
        );
        for i in 0..self.cards.len() {
            let tree = self.tree_transform(&self.cards[i]);
            let ring = self.carousel_transform(&self.cards[i], camera);
            let target = tree.blend(&ring, progress);

            let card = &mut self.cards[i];
            card.rendered.ease_toward(&target, ease);
            let is_hero = card.index == hero;
            card.emissive = lerp(
                emissive_tree,
                if is_hero { emissive_hero } else { emissive_ring },
                progress,
            );
            card.opacity = lerp(1.0, if is_hero { 1.0 } else { ring_opacity }, progress);

            let inst = &mut self.instances[i];
            *inst = MeshInstance::new(
                shape::CARD,
                card.rendered.position,
                card.rendered.rotation,
                card.rendered.scale,
                self.pearl.with_alpha(card.opacity),
            );
            inst.params[1] = card.emissive;
            inst.params[2] = card.status.code();
        }
    }

    pub fn instances(&self) -> &[MeshInstance] {
        &self.instances
    }
}

/// Card facing outward from the trunk at spiral `angle`, tilted back by
/// `tilt` and rolled by `roll`. The card's front is its local +Z.
fn tree_rotation(angle: f32, tilt: f32, roll: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, FRAC_PI_2 - angle, tilt, roll)
}
