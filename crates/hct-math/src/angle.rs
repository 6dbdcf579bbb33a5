//! Hue angle helpers.
//!
//! Hues live on a circle, so every comparison and difference has to wrap.
//! Degrees are used at API boundaries; the gamut solver works in radians.

use std::f64::consts::{PI, TAU};

/// Wraps an angle in degrees into `[0, 360)`.
///
/// ```rust
/// use hct_math::sanitize_degrees;
///
/// assert_eq!(sanitize_degrees(-30.0), 330.0);
/// assert_eq!(sanitize_degrees(720.0), 0.0);
/// assert_eq!(sanitize_degrees(42.5), 42.5);
/// ```
#[inline]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if d >= 360.0 { 0.0 } else { d }
}

/// Wraps an angle in radians into `[0, 2pi)`.
#[inline]
pub fn sanitize_radians(radians: f64) -> f64 {
    let r = radians.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}

/// Shortest angular distance between two hues, in `[0, 180]` degrees.
///
/// ```rust
/// use hct_math::difference_degrees;
///
/// assert_eq!(difference_degrees(350.0, 10.0), 20.0);
/// assert_eq!(difference_degrees(90.0, 270.0), 180.0);
/// ```
#[inline]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Direction of the shortest rotation from `from` to `to`.
///
/// Returns `1.0` for increasing hue, `-1.0` for decreasing.
///
/// ```rust
/// use hct_math::rotation_direction;
///
/// assert_eq!(rotation_direction(350.0, 10.0), 1.0);
/// assert_eq!(rotation_direction(10.0, 350.0), -1.0);
/// ```
#[inline]
pub fn rotation_direction(from: f64, to: f64) -> f64 {
    let increasing = sanitize_degrees(to - from);
    if increasing <= 180.0 { 1.0 } else { -1.0 }
}

/// True when walking counter-clockwise from `a`, `b` comes before `c`.
///
/// All three angles are in radians and need not be sanitized.
#[inline]
pub fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    sanitize_radians(b - a) < sanitize_radians(c - a)
}

/// Absolute angular distance in radians, in `[0, pi]`.
#[inline]
pub fn radian_distance(a: f64, b: f64) -> f64 {
    (sanitize_radians(a - b + PI) - PI).abs()
}
