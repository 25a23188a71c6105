//! Scalar helpers shared by every animator.

use glam::Vec3;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One step of exponential approach: move `current` a fixed fraction of the
/// way toward `target`. Applied once per frame this gives critically damped
/// easing that lags discrete target changes smoothly.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

/// Hermite smoothstep, 0 at `edge0` and 1 at `edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// `num / den`, or 0 when the denominator vanishes (cone apex).
#[inline]
pub fn safe_ratio(num: f32, den: f32) -> f32 {
    if den.abs() <= f32::EPSILON {
        0.0
    } else {
        num / den
    }
}

/// Signed shortest distance from `from` to `to` on a ring of `len` slots.
///
/// The result lies in `(-len/2, len/2]`; with an even ring the slot exactly
/// opposite resolves to the positive side.
pub fn circular_offset(from: usize, to: usize, len: usize) -> i32 {
    if len == 0 {
        return 0;
    }
    let len = len as i32;
    let raw = (to as i32 - from as i32).rem_euclid(len);
    if raw > len / 2 {
        raw - len
    } else {
        raw
    }
}

/// Wrap a possibly negative index into `[0, len)`.
#[inline]
pub fn wrap_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as i64) as usize
}
