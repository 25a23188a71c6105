//! Startup configuration for the whole scene.
//!
//! Every tunable lives in [`crate::constants`]; [`SceneConfig::default`]
//! groups them per component, and the components read them only from here. The configuration is fixed for the lifetime of
//! a [`crate::TreeScene`] and checked once by [`SceneConfig::validate`].

use crate::constants::*;
use crate::error::ConfigError;
use crate::palette::Palette;
use crate::sampler::TreeShape;

/// Spin rate of a rotating group, blended by progress.
#[derive(Clone, Copy, Debug)]
pub struct SpinConfig {
    pub tree: f32,
    pub scatter: f32,
}

impl SpinConfig {
    #[inline]
    pub fn speed(&self, progress: f32) -> f32 {
        crate::easing::lerp(self.tree, self.scatter, progress)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OcclusionConfig {
    /// Fade is only considered above this progress.
    pub threshold: f32,
    pub depth_near: f32,
    pub depth_far: f32,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct ParticleConfig {
    pub count: usize,
    pub shell_min: f32,
    pub shell_max: f32,
    pub size_tree: f32,
    pub size_scatter: f32,
    pub opacity_tree: f32,
    pub opacity_scatter: f32,
    /// Tree colour blend: weight of normalized height and of radial distance,
    /// plus the random jitter added on top.
    pub color_height_weight: f32,
    pub color_radial_weight: f32,
    pub color_jitter: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct OrnamentConfig {
    pub target_count: usize,
    pub min_distance: f32,
    pub max_attempts: usize,
    pub height_min: f32,
    pub height_max: f32,
    pub surface_inset: f32,
    pub shell_min: f32,
    pub shell_max: f32,
    pub scale_min: f32,
    pub scale_span: f32,
    pub box_scale: f32,
    pub star_scale: f32,
    /// Fraction of the base scale lost at full scatter.
    pub scatter_shrink: f32,
    pub opacity_scatter: f32,
    /// Progress at which extras reach full size.
    pub extra_reveal_end: f32,
    pub wobble_amplitude: f32,
    pub wobble_rate: f32,
    pub star_spin_speed: f32,
    pub emissive_box: f32,
    pub emissive_sphere: f32,
    pub emissive_star: f32,
    pub top_star: bool,
    pub top_star_lift: f32,
    pub top_star_scale: f32,
    pub top_star_spin_ratio: f32,
    pub top_star_emissive: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct RibbonConfig {
    pub loops: usize,
    pub points_per_loop: usize,
    pub surface_offset: f32,
    pub shell_radius: f32,
    pub point_size: f32,
    pub opacity_tree: f32,
    pub opacity_scatter: f32,
    pub spin_speed: f32,
    pub occlusion: bool,
}

/// One entry of the static photo list.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSource {
    pub image: String,
    pub caption: Option<String>,
}

impl PhotoSource {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Clone, Debug)]
pub struct CarouselConfig {
    pub photos: Vec<PhotoSource>,
    pub height_min: f32,
    pub height_max: f32,
    pub spiral_loops: f32,
    pub surface_offset: f32,
    pub orbit_speed: f32,
    pub sway_amplitude: f32,
    pub sway_speed_min: f32,
    pub sway_speed_span: f32,
    pub base_tilt: f32,
    /// Extra outward tilt at the top of the band.
    pub top_tilt: f32,
    pub tilt_jitter: f32,
    pub roll_jitter: f32,
    pub scale_jitter: f32,
    pub emissive_tree: f32,
    pub emissive_hero: f32,
    pub emissive_ring: f32,
    pub ring_opacity: f32,
    pub hero_depth: f32,
    pub hero_scale: f32,
    pub ring_scale: f32,
    pub arc_radius: f32,
    pub arc_depth: f32,
    pub arc_lift: f32,
    pub max_arc_step: f32,
}

/// Ambient light level, `base + progress * scatter_boost`.
#[derive(Clone, Copy, Debug)]
pub struct LightingConfig {
    pub ambient_base: f32,
    pub ambient_scatter_boost: f32,
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub tree: TreeShape,
    pub progress_step: f32,
    pub position_ease: f32,
    pub opacity_ease: f32,
    pub card_ease: f32,
    pub spin: SpinConfig,
    pub occlusion: OcclusionConfig,
    pub particles: ParticleConfig,
    pub ornaments: OrnamentConfig,
    pub ribbon: RibbonConfig,
    pub carousel: CarouselConfig,
    pub lighting: LightingConfig,
    pub palette: Palette,
    /// Fixed RNG seed; `None` draws from OS entropy so every run differs.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tree: TreeShape::new(TREE_HEIGHT, TREE_RADIUS),
            progress_step: PROGRESS_STEP,
            position_ease: POSITION_EASE,
            opacity_ease: OPACITY_EASE,
            card_ease: CARD_EASE,
            spin: SpinConfig {
                tree: TREE_SPIN_SPEED,
                scatter: SCATTER_SPIN_SPEED,
            },
            occlusion: OcclusionConfig {
                threshold: OCCLUSION_PROGRESS_THRESHOLD,
                depth_near: OCCLUSION_DEPTH_NEAR,
                depth_far: OCCLUSION_DEPTH_FAR,
                radius: OCCLUSION_RADIUS,
            },
            particles: ParticleConfig {
                count: PARTICLE_COUNT,
                shell_min: PARTICLE_SHELL_MIN,
                shell_max: PARTICLE_SHELL_MAX,
                size_tree: PARTICLE_SIZE_TREE,
                size_scatter: PARTICLE_SIZE_SCATTER,
                opacity_tree: PARTICLE_OPACITY_TREE,
                opacity_scatter: PARTICLE_OPACITY_SCATTER,
                color_height_weight: COLOR_MIX_HEIGHT_WEIGHT,
                color_radial_weight: COLOR_MIX_RADIAL_WEIGHT,
                color_jitter: COLOR_MIX_JITTER,
            },
            ornaments: OrnamentConfig {
                target_count: ORNAMENT_TARGET_COUNT,
                min_distance: ORNAMENT_MIN_DISTANCE,
                max_attempts: ORNAMENT_MAX_ATTEMPTS,
                height_min: ORNAMENT_HEIGHT_MIN,
                height_max: ORNAMENT_HEIGHT_MAX,
                surface_inset: ORNAMENT_SURFACE_INSET,
                shell_min: ORNAMENT_SHELL_MIN,
                shell_max: ORNAMENT_SHELL_MAX,
                scale_min: ORNAMENT_SCALE_MIN,
                scale_span: ORNAMENT_SCALE_SPAN,
                box_scale: BOX_SCALE_MULTIPLIER,
                star_scale: STAR_SCALE_MULTIPLIER,
                scatter_shrink: ORNAMENT_SCATTER_SHRINK,
                opacity_scatter: ORNAMENT_OPACITY_SCATTER,
                extra_reveal_end: EXTRA_REVEAL_END,
                wobble_amplitude: BOX_WOBBLE_AMPLITUDE,
                wobble_rate: BOX_WOBBLE_RATE,
                star_spin_speed: STAR_SPIN_SPEED,
                emissive_box: ORNAMENT_EMISSIVE_BOX,
                emissive_sphere: ORNAMENT_EMISSIVE_SPHERE,
                emissive_star: ORNAMENT_EMISSIVE_STAR,
                top_star: true,
                top_star_lift: TOP_STAR_LIFT,
                top_star_scale: TOP_STAR_SCALE,
                top_star_spin_ratio: TOP_STAR_SPIN_RATIO,
                top_star_emissive: TOP_STAR_EMISSIVE,
            },
            ribbon: RibbonConfig {
                loops: RIBBON_LOOPS,
                points_per_loop: RIBBON_POINTS_PER_LOOP,
                surface_offset: RIBBON_SURFACE_OFFSET,
                shell_radius: RIBBON_SHELL_RADIUS,
                point_size: RIBBON_POINT_SIZE,
                opacity_tree: RIBBON_OPACITY_TREE,
                opacity_scatter: RIBBON_OPACITY_SCATTER,
                spin_speed: RIBBON_SPIN_SPEED,
                occlusion: true,
            },
            carousel: CarouselConfig {
                photos: DEFAULT_PHOTOS.iter().map(|p| PhotoSource::new(*p)).collect(),
                height_min: PHOTO_HEIGHT_MIN,
                height_max: PHOTO_HEIGHT_MAX,
                spiral_loops: PHOTO_SPIRAL_LOOPS,
                surface_offset: PHOTO_SURFACE_OFFSET,
                orbit_speed: PHOTO_ORBIT_SPEED,
                sway_amplitude: PHOTO_SWAY_AMPLITUDE,
                sway_speed_min: PHOTO_SWAY_SPEED_MIN,
                sway_speed_span: PHOTO_SWAY_SPEED_SPAN,
                base_tilt: PHOTO_BASE_TILT,
                top_tilt: PHOTO_TOP_TILT,
                tilt_jitter: PHOTO_TILT_JITTER,
                roll_jitter: PHOTO_ROLL_JITTER,
                scale_jitter: PHOTO_SCALE_JITTER,
                emissive_tree: CARD_EMISSIVE_TREE,
                emissive_hero: CARD_EMISSIVE_HERO,
                emissive_ring: CARD_EMISSIVE_RING,
                ring_opacity: CARD_OPACITY_RING,
                hero_depth: HERO_DEPTH,
                hero_scale: HERO_SCALE,
                ring_scale: RING_SCALE,
                arc_radius: RING_ARC_RADIUS,
                arc_depth: RING_ARC_DEPTH,
                arc_lift: RING_ARC_LIFT,
                max_arc_step: RING_MAX_ARC_STEP,
            },
            lighting: LightingConfig {
                ambient_base: AMBIENT_BASE,
                ambient_scatter_boost: AMBIENT_SCATTER_BOOST,
            },
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Same defaults with a fixed RNG seed, for reproducible layouts.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("height", self.tree.height)?;
        positive("radius", self.tree.radius)?;
        factor("progress_step", self.progress_step)?;
        factor("position_ease", self.position_ease)?;
        factor("opacity_ease", self.opacity_ease)?;
        factor("card_ease", self.card_ease)?;

        let o = &self.occlusion;
        if !(o.depth_near < o.depth_far) {
            return Err(ConfigError::OcclusionWindow {
                near: o.depth_near,
                far: o.depth_far,
            });
        }
        if !(o.radius > 0.0) {
            return Err(ConfigError::OcclusionRadius(o.radius));
        }

        if self.particles.count == 0 {
            return Err(ConfigError::NoParticles);
        }
        shell("particles", self.particles.shell_min, self.particles.shell_max)?;

        let orn = &self.ornaments;
        if !(orn.min_distance > 0.0) {
            return Err(ConfigError::OrnamentSpacing(orn.min_distance));
        }
        if !(orn.height_min >= 0.0 && orn.height_min <= orn.height_max && orn.height_max <= 1.0) {
            return Err(ConfigError::OrnamentBand {
                min: orn.height_min,
                max: orn.height_max,
            });
        }
        shell("ornaments", orn.shell_min, orn.shell_max)?;

        let rib = &self.ribbon;
        if rib.loops == 0 || rib.points_per_loop == 0 {
            return Err(ConfigError::EmptyRibbon);
        }
        shell("ribbon", rib.shell_radius, rib.shell_radius)?;

        let car = &self.carousel;
        if !(car.height_min >= 0.0 && car.height_min <= car.height_max && car.height_max < 1.0) {
            return Err(ConfigError::PhotoBand {
                min: car.height_min,
                max: car.height_max,
            });
        }
        if !(car.hero_depth > 0.0) {
            return Err(ConfigError::HeroDepth(car.hero_depth));
        }
        jitter("tilt_jitter", car.tilt_jitter)?;
        jitter("roll_jitter", car.roll_jitter)?;
        jitter("scale_jitter", car.scale_jitter)?;
        jitter("sway_speed_span", car.sway_speed_span)?;
        jitter("ornament scale_span", orn.scale_span)?;
        Ok(())
    }
}

fn jitter(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Jitter { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::TreeDimension { field, value })
    }
}

fn factor(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Factor { field, value })
    }
}

fn shell(collection: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min > 0.0 && min <= max && max.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ShellRange {
            collection,
            min,
            max,
        })
    }
}
