//! Reflection and refraction of direction vectors.

use crate::Vec3;

const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Reflect a vector about a normal.
///
/// `v - 2 * dot(v, n) * n`; `n` is expected to be unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with unit normal `n` (Snell's law).
///
/// `eta_ratio` is the ratio of refractive indices (incident over transmitted).
/// Returns `None` when the ray cannot refract (total internal reflection),
/// in which case the caller should reflect instead.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta_ratio: f32) -> Option<Vec3> {
    let cos_theta = (-v).dot(n).min(1.0);
    let discriminant = 1.0 - eta_ratio * eta_ratio * (1.0 - cos_theta * cos_theta);
    if discriminant < 0.0 {
        return None;
    }

    let r_out_perp = eta_ratio * (v + cos_theta * n);
    let r_out_parallel = -discriminant.sqrt() * n;
    Some(r_out_perp + r_out_parallel)
}

/// True if every component of `v` is within `1e-8` of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO_EPSILON
}
