use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

// Frontend tuning: camera, input and HUD thresholds.
// Scene tunables (tree, particles, carousel) live in `wish_core::constants`.

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 5.0, 17.0); // initial eye position
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0); // orbit pivot
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Orbit: a rate of 1.0 is one turn per minute
pub const AUTO_ROTATE_TREE: f32 = 0.6; // while the tree is gathered
pub const AUTO_ROTATE_SCATTER: f32 = 0.2; // once mostly scattered
pub const AUTO_ROTATE_SWITCH: f32 = 0.5; // progress where the slow rate takes over
pub const AUTO_ROTATE_UNIT: f32 = TAU / 60.0; // radians per second per unit rate
pub const ORBIT_INPUT_MAX_PROGRESS: f32 = 0.1; // user orbit disabled above this
pub const ORBIT_DRAG_RAD_PER_PX: f32 = 0.005;
pub const ORBIT_MIN_POLAR: f32 = 0.05;
pub const ORBIT_MAX_POLAR: f32 = FRAC_PI_2 - 0.1; // keep the eye above the floor plane

// Input
pub const SWIPE_THRESHOLD_PX: f32 = 50.0; // horizontal travel that counts as a swipe
pub const MAX_FRAME_DT: f32 = 0.1; // clamp after tab switches

// HUD
pub const HUD_HEADER_HIDE_ABOVE: f32 = 0.5;
pub const HUD_DIM_ABOVE: f32 = 0.8;
pub const HUD_INDICATOR_ABOVE: f32 = 0.9;

// Rendering
pub const POINT_SPRITE_SCALE: f32 = 2.0; // world half-size per unit of point size
