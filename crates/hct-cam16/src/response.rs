//! Cone-space building blocks shared by the forward transform, its
//! inverse, and the gamut solver.
//!
//! The solver folds `F_L / 100` and the per-channel discount into one
//! matrix, so the compression here takes its input already scaled:
//! `compress(F_L * x / 100)` is the CAM16 post-adaptation response of a
//! discounted cone signal `x`.

use hct_math::{Mat3, Vec3};

use crate::ViewingConditions;

/// CAT16 chromatic adaptation matrix (XYZ -> sharpened cone space).
pub const CAT16: Mat3 = Mat3::from_rows([
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
]);

/// Inverse of [`CAT16`].
pub const CAT16_INV: Mat3 = Mat3::from_rows([
    [1.8620678550872327, -1.0112546305316843, 0.14918677544445175],
    [0.3875265432361371, 0.6214474419314753, -0.00897398516761252],
    [-0.015841498849333856, -0.03412293802851556, 1.0499644368778493],
]);

/// Start of the hue range whose eccentricity uses `h + 360`.
const ECCENTRICITY_HUE_OFFSET: f64 = 20.14;

/// Post-adaptation nonlinear compression of a pre-scaled cone signal.
///
/// Odd-symmetric; saturates towards +/-400.
#[inline]
pub fn compress(scaled: f64) -> f64 {
    let af = scaled.abs().powf(0.42);
    scaled.signum() * 400.0 * af / (af + 27.13)
}

/// Inverse of [`compress`].
///
/// Responses past the 400 asymptote map to zero instead of NaN.
#[inline]
pub fn decompress(adapted: f64) -> f64 {
    let abs = adapted.abs();
    let base = (27.13 * abs / (400.0 - abs)).max(0.0);
    adapted.signum() * base.powf(1.0 / 0.42)
}

/// Red-green (a) and yellow-blue (b) opponent channels.
#[inline]
pub fn opponent(rgb_a: Vec3) -> (f64, f64) {
    let a = (11.0 * rgb_a.x - 12.0 * rgb_a.y + rgb_a.z) / 11.0;
    let b = (rgb_a.x + rgb_a.y - 2.0 * rgb_a.z) / 9.0;
    (a, b)
}

/// Eccentricity factor e_t for a hue in degrees.
#[inline]
pub fn eccentricity(hue_degrees: f64) -> f64 {
    let hue_prime = if hue_degrees < ECCENTRICITY_HUE_OFFSET {
        hue_degrees + 360.0
    } else {
        hue_degrees
    };
    0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8)
}

/// Compressed cone responses of the appearance (J, C, h).
///
/// This is the inverse of the forward transform up to the nonlinear
/// compression: feed the result through [`decompress`] and undo the
/// discount to get back to XYZ.
pub fn adapted_response_from_jch(j: f64, chroma: f64, hue_radians: f64, vc: &ViewingConditions) -> Vec3 {
    let j_normalized = j / 100.0;
    let alpha = if chroma == 0.0 || j == 0.0 {
        0.0
    } else {
        chroma / j_normalized.sqrt()
    };
    let t = (alpha / (1.64 - 0.29f64.powf(vc.n())).powf(0.73)).powf(1.0 / 0.9);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let ac = vc.aw() * j_normalized.powf(1.0 / vc.c() / vc.z());
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc() * vc.ncb();
    let p2 = ac / vc.nbb();

    let (h_sin, h_cos) = hue_radians.sin_cos();
    let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
    let a = gamma * h_cos;
    let b = gamma * h_sin;

    Vec3::new(
        (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0,
        (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0,
        (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0,
    )
}
