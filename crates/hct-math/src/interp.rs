//! Interpolation utilities.
//!
//! # Usage
//!
//! ```rust
//! use hct_math::lerp;
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
