//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - [`eotf`] / [`oetf`]: [0, 1] in and out
//! - [`linearized`]: 8-bit channel in, [0, 100] out
//! - [`delinearized`]: [0, 100] in, 8-bit channel out
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use hct_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Linearizes an 8-bit sRGB channel to linear light in [0, 100].
///
/// ```rust
/// use hct_transfer::srgb::linearized;
///
/// assert_eq!(linearized(0), 0.0);
/// assert!((linearized(255) - 100.0).abs() < 1e-9);
/// ```
#[inline]
pub fn linearized(channel: u8) -> f64 {
    eotf(channel as f64 / 255.0) * 100.0
}

/// Encodes linear light in [0, 100] as an 8-bit sRGB channel.
///
/// Rounds to nearest and clamps out-of-range input.
#[inline]
pub fn delinearized(linear: f64) -> u8 {
    delinearized_unrounded(linear).round().clamp(0.0, 255.0) as u8
}

/// Encodes linear light in [0, 100] on the 8-bit scale without rounding.
///
/// The gamut solver bisects over the boundaries between adjacent 8-bit
/// codes, so it needs the fractional code value.
#[inline]
pub fn delinearized_unrounded(linear: f64) -> f64 {
    oetf(linear / 100.0) * 255.0
}

/// Linear-light value of the boundary between 8-bit codes `i` and `i + 1`.
///
/// Valid for `i` in `0..255`; these are the planes where the rounded
/// output changes.
#[inline]
pub fn critical_plane(i: u8) -> f64 {
    eotf((i as f64 + 0.5) / 255.0) * 100.0
}
