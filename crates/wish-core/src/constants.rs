// Shared tuning constants for the tree, starfield and carousel.
// `SceneConfig::default()` is built from these; tweak here to reproduce a look.

// Tree shape
pub const TREE_HEIGHT: f32 = 10.0; // cone height, centered on the origin
pub const TREE_RADIUS: f32 = 4.0; // cone base radius

// Progress
pub const PROGRESS_STEP: f32 = 0.05; // per-frame approach toward 0 or 1

// Shared easing
pub const POSITION_EASE: f32 = 0.1; // rendered position chases its blend target
pub const OPACITY_EASE: f32 = 0.1; // occlusion opacity chases its target
pub const CARD_EASE: f32 = 0.25; // photo card responsiveness

// Group rotation about Y (radians per second)
pub const TREE_SPIN_SPEED: f32 = 0.25; // while tree-formed
pub const SCATTER_SPIN_SPEED: f32 = 0.1; // while scattered
pub const RIBBON_SPIN_SPEED: f32 = 0.2;

// Particles
pub const PARTICLE_COUNT: usize = 50_000;
pub const PARTICLE_SHELL_MIN: f32 = 20.0;
pub const PARTICLE_SHELL_MAX: f32 = 28.0;
pub const PARTICLE_SIZE_TREE: f32 = 0.04;
pub const PARTICLE_SIZE_SCATTER: f32 = 0.06;
pub const PARTICLE_OPACITY_TREE: f32 = 1.0;
pub const PARTICLE_OPACITY_SCATTER: f32 = 0.7;
pub const COLOR_MIX_HEIGHT_WEIGHT: f32 = 0.7;
pub const COLOR_MIX_RADIAL_WEIGHT: f32 = 0.3;
pub const COLOR_MIX_JITTER: f32 = 0.2;

// Ornaments
pub const ORNAMENT_TARGET_COUNT: usize = 80;
pub const ORNAMENT_MIN_DISTANCE: f32 = 0.8; // pairwise, on the tree surface
pub const ORNAMENT_MAX_ATTEMPTS: usize = 5_000; // rejection sampling budget
pub const ORNAMENT_HEIGHT_MIN: f32 = 0.05;
pub const ORNAMENT_HEIGHT_MAX: f32 = 0.95;
pub const ORNAMENT_SURFACE_INSET: f32 = 0.95; // sits just inside the needles
pub const ORNAMENT_SHELL_MIN: f32 = 18.0;
pub const ORNAMENT_SHELL_MAX: f32 = 22.0;
pub const ORNAMENT_SCALE_MIN: f32 = 0.1;
pub const ORNAMENT_SCALE_SPAN: f32 = 0.1;
pub const BOX_SCALE_MULTIPLIER: f32 = 1.4;
pub const STAR_SCALE_MULTIPLIER: f32 = 1.2;
pub const ORNAMENT_SCATTER_SHRINK: f32 = 0.5; // fraction of scale lost when scattered
pub const ORNAMENT_OPACITY_SCATTER: f32 = 0.3;
pub const EXTRA_REVEAL_END: f32 = 0.8; // extras finish growing in at this progress
pub const BOX_WOBBLE_AMPLITUDE: f32 = 0.2;
pub const BOX_WOBBLE_RATE: f32 = 0.8; // Z wobble frequency relative to X
pub const STAR_SPIN_SPEED: f32 = 1.5;
pub const ORNAMENT_EMISSIVE_BOX: f32 = 0.2;
pub const ORNAMENT_EMISSIVE_SPHERE: f32 = 0.3;
pub const ORNAMENT_EMISSIVE_STAR: f32 = 1.0;

// Tree-top star
pub const TOP_STAR_LIFT: f32 = 0.5; // above the apex
pub const TOP_STAR_SCALE: f32 = 0.8;
pub const TOP_STAR_SPIN_RATIO: f32 = 0.5; // of STAR_SPIN_SPEED
pub const TOP_STAR_EMISSIVE: f32 = 2.0;

// Ribbon
pub const RIBBON_LOOPS: usize = 8;
pub const RIBBON_POINTS_PER_LOOP: usize = 200;
pub const RIBBON_SURFACE_OFFSET: f32 = 1.05; // just outside the cone
pub const RIBBON_SHELL_RADIUS: f32 = 19.0;
pub const RIBBON_POINT_SIZE: f32 = 0.05;
pub const RIBBON_OPACITY_TREE: f32 = 0.6;
pub const RIBBON_OPACITY_SCATTER: f32 = 0.2;

// Occlusion tunnel between the camera and the hero card
pub const OCCLUSION_PROGRESS_THRESHOLD: f32 = 0.7;
pub const OCCLUSION_DEPTH_NEAR: f32 = 1.0;
pub const OCCLUSION_DEPTH_FAR: f32 = 14.0;
pub const OCCLUSION_RADIUS: f32 = 1.732_050_8; // sqrt(3)

// Photo cards, tree spiral
pub const PHOTO_HEIGHT_MIN: f32 = 0.55;
pub const PHOTO_HEIGHT_MAX: f32 = 0.9;
pub const PHOTO_SPIRAL_LOOPS: f32 = 1.5;
pub const PHOTO_SURFACE_OFFSET: f32 = 0.5;
pub const PHOTO_BASE_TILT: f32 = -0.2;
pub const PHOTO_TOP_TILT: f32 = -0.3; // extra outward tilt at the top of the band
pub const PHOTO_TILT_JITTER: f32 = 0.08;
pub const PHOTO_ROLL_JITTER: f32 = 0.1;
pub const PHOTO_SCALE_JITTER: f32 = 0.08;
pub const PHOTO_ORBIT_SPEED: f32 = 0.1;
pub const PHOTO_SWAY_AMPLITUDE: f32 = 0.1;
pub const PHOTO_SWAY_SPEED_MIN: f32 = 0.6;
pub const PHOTO_SWAY_SPEED_SPAN: f32 = 0.8;

// Photo cards, camera-relative carousel
pub const HERO_DEPTH: f32 = 5.0; // distance ahead of the camera
pub const HERO_SCALE: f32 = 1.5;
pub const RING_SCALE: f32 = 0.6;
pub const RING_ARC_RADIUS: f32 = 4.0;
pub const RING_ARC_DEPTH: f32 = 2.0; // extra depth behind the hero
pub const RING_ARC_LIFT: f32 = 0.4;
pub const RING_MAX_ARC_STEP: f32 = 0.6; // radians between neighbours
pub const CARD_EMISSIVE_TREE: f32 = 0.2;
pub const CARD_EMISSIVE_HERO: f32 = 1.0;
pub const CARD_EMISSIVE_RING: f32 = 0.1;
pub const CARD_OPACITY_RING: f32 = 0.7;

// Lighting response
pub const AMBIENT_BASE: f32 = 0.4;
pub const AMBIENT_SCATTER_BOOST: f32 = 0.4;

// Default photo list, in display order
pub const DEFAULT_PHOTOS: [&str; 8] = [
    "/1.jpg", "/2.jpg", "/3.jpg", "/4.jpg", "/5.jpg", "/6.jpg", "/7.jpg", "/8.jpg",
];
