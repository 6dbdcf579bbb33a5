//! CIE L* (tone) <-> relative luminance Y.
//!
//! L* is a perceptually scaled, monotonic function of luminance. Both
//! directions use the exact CIE constants `e = 216/24389` and
//! `k = 24389/27` rather than the rounded 0.008856 / 903.3.

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_inv_f(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// Converts relative luminance Y in [0, 100] to L* in [0, 100].
///
/// ```rust
/// use hct_transfer::lstar_from_y;
///
/// assert_eq!(lstar_from_y(0.0), 0.0);
/// assert!((lstar_from_y(100.0) - 100.0).abs() < 1e-9);
/// assert!((lstar_from_y(18.4186518512) - 50.0).abs() < 1e-6);
/// ```
#[inline]
pub fn lstar_from_y(y: f64) -> f64 {
    116.0 * lab_f(y / 100.0) - 16.0
}

/// Converts L* in [0, 100] to relative luminance Y in [0, 100].
#[inline]
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_inv_f((lstar + 16.0) / 116.0)
}
