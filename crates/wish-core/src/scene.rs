use crate::carousel::{Carousel, PhotoStatus};
use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::instances::{MeshInstance, PointInstance};
use crate::occlusion::{OcclusionTunnel, ViewRay};
use crate::ornaments::OrnamentSet;
use crate::particles::ParticleField;
use crate::progress::{Phase, ProgressController};
use crate::ribbon::Ribbon;
use crate::sampler::{child_rng, scene_rng};
use crate::state::CameraPose;
use instant::Instant;

/// Everything the page animates, driven by one progress value.
///
/// Inputs arrive as discrete actions ([`Self::trigger`], [`Self::step_hero`],
/// ...); [`Self::tick`] runs the whole per-frame pass. Components never see
/// each other, only the progress value, the camera pose and the hero index.
pub struct TreeScene {
    pub config: SceneConfig,
    progress: ProgressController,
    tunnel: OcclusionTunnel,
    particles: ParticleField,
    ornaments: OrnamentSet,
    ribbon: Ribbon,
    carousel: Carousel,
    elapsed: f32,
}

impl TreeScene {
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let started = Instant::now();
        let mut rng = scene_rng(config.seed);
        let shape = config.tree;

        let particles = ParticleField::generate(
            &shape,
            config.particles,
            config.spin,
            &config.palette,
            &mut child_rng(&mut rng, 1),
        );
        let ornaments = OrnamentSet::generate(
            &shape,
            &config.ornaments,
            config.spin,
            &config.palette,
            &mut child_rng(&mut rng, 2),
        );
        let ribbon = Ribbon::generate(&shape, config.ribbon, &config.palette, &mut child_rng(&mut rng, 3));
        let carousel = Carousel::new(
            &shape,
            config.carousel.clone(),
            config.palette.pearl,
            &mut child_rng(&mut rng, 4),
        );
        log::info!(
            "[scene] {} particles, {} ornaments, {} ribbon points, {} photos in {:.1} ms",
            particles.len(),
            ornaments.ornaments().len(),
            ribbon.points().len(),
            carousel.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );

        let mut scene = Self {
            progress: ProgressController::new(config.progress_step),
            tunnel: OcclusionTunnel::from(config.occlusion),
            particles,
            ornaments,
            ribbon,
            carousel,
            elapsed: 0.0,
            config,
        };
        // Fill every output buffer before the first frame.
        scene.animate(0.0, &CameraPose::default());
        Ok(scene)
    }

    // ---------------- Inputs ----------------

    /// `true` scatters the tree, `false` gathers it back.
    pub fn trigger(&mut self, explode: bool) {
        self.progress.trigger(explode);
    }

    pub fn explode(&mut self) {
        self.progress.explode();
    }

    pub fn reset(&mut self) {
        self.progress.reset();
    }

    pub fn set_hero_index(&mut self, index: i64) -> usize {
        self.carousel.hero_mut().set(index)
    }

    pub fn step_hero(&mut self, delta: i64) -> usize {
        self.carousel.hero_mut().step(delta)
    }

    pub fn set_photo_status(&mut self, index: usize, status: PhotoStatus) {
        self.carousel.set_status(index, status);
    }

    // ---------------- Frame ----------------

    /// Advance progress one step, then move every collection toward its
    /// blend target for that progress.
    pub fn tick(&mut self, dt_sec: f32, camera: &CameraPose) {
        self.progress.tick();
        self.animate(dt_sec, camera);
    }

    fn animate(&mut self, dt_sec: f32, camera: &CameraPose) {
        let dt = dt_sec.max(0.0);
        self.elapsed += dt;
        let p = self.progress.progress();
        let ray = ViewRay::from(camera);
        let c = &self.config;

        self.particles
            .update(p, dt, &ray, &self.tunnel, c.position_ease, c.opacity_ease);
        self.ornaments.update(
            p,
            dt,
            self.elapsed,
            &ray,
            &self.tunnel,
            c.position_ease,
            c.opacity_ease,
        );
        self.ribbon
            .update(p, dt, &ray, &self.tunnel, c.position_ease, c.opacity_ease);
        self.carousel.update(p, dt, camera, c.card_ease);
    }

    // ---------------- Outputs ----------------

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress.progress()
    }

    pub fn phase(&self) -> Phase {
        self.progress.phase()
    }

    pub fn is_exploded(&self) -> bool {
        self.progress.is_exploded()
    }

    pub fn hero_index(&self) -> usize {
        self.carousel.hero().get()
    }

    pub fn photo_count(&self) -> usize {
        self.carousel.len()
    }

    pub fn ambient_intensity(&self) -> f32 {
        let l = &self.config.lighting;
        l.ambient_base + self.progress() * l.ambient_scatter_boost
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn ornaments(&self) -> &OrnamentSet {
        &self.ornaments
    }

    pub fn ribbon(&self) -> &Ribbon {
        &self.ribbon
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn tunnel(&self) -> &OcclusionTunnel {
        &self.tunnel
    }

    /// Particle buffer, local to a group spun by `particles().rotation_y()`.
    pub fn points(&self) -> &[PointInstance] {
        self.particles.instances()
    }

    /// Ribbon buffer, local to a group spun by `ribbon().rotation_y()`.
    pub fn ribbon_points(&self) -> &[PointInstance] {
        self.ribbon.instances()
    }

    /// World-space ornament (and top star) instances.
    pub fn ornament_instances(&self) -> &[MeshInstance] {
        self.ornaments.instances()
    }

    /// World-space photo card instances, in photo-list order.
    pub fn card_instances(&self) -> &[MeshInstance] {
        self.carousel.instances()
    }
}
