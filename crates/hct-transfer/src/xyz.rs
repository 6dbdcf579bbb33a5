//! sRGB <-> CIE XYZ conversions for packed colors.
//!
//! Linear RGB and XYZ are on the [0, 100] scale, so a white packed color
//! has `Y == 100` and its XYZ is [`WHITE_POINT_D65`].

use hct_math::{Mat3, Vec3};

use crate::srgb::{delinearized, linearized};
use crate::{argb_from_rgb, blue_from_argb, green_from_argb, lstar_from_y, red_from_argb, y_from_lstar};

/// Linear sRGB (D65) to XYZ.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
]);

/// XYZ to linear sRGB (D65), the inverse of [`SRGB_TO_XYZ`].
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2413774792388685, -1.5376652402851851, -0.49885366846268053],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [0.05562093689691305, -0.20395524564742123, 1.0571799111220335],
]);

/// D65 reference white on the [0, 100] scale.
pub const WHITE_POINT_D65: Vec3 = Vec3::new(95.047, 100.0, 108.883);

/// Luminance weights of linear sRGB, the middle row of [`SRGB_TO_XYZ`].
pub const Y_FROM_LINRGB: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// Decodes the three channels of a packed color to linear RGB in [0, 100].
#[inline]
pub fn linrgb_from_argb(argb: u32) -> Vec3 {
    Vec3::new(
        linearized(red_from_argb(argb)),
        linearized(green_from_argb(argb)),
        linearized(blue_from_argb(argb)),
    )
}

/// Encodes linear RGB in [0, 100] as an opaque packed color.
///
/// Channels are rounded and clamped independently.
#[inline]
pub fn argb_from_linrgb(linrgb: Vec3) -> u32 {
    argb_from_rgb(
        delinearized(linrgb.x),
        delinearized(linrgb.y),
        delinearized(linrgb.z),
    )
}

/// XYZ of a packed color. Alpha is ignored.
///
/// ```rust
/// use hct_transfer::{xyz_from_argb, WHITE};
///
/// let xyz = xyz_from_argb(WHITE);
/// assert!((xyz.y - 100.0).abs() < 1e-9);
/// ```
#[inline]
pub fn xyz_from_argb(argb: u32) -> Vec3 {
    SRGB_TO_XYZ * linrgb_from_argb(argb)
}

/// Opaque packed color of an XYZ value; out-of-gamut channels clamp.
#[inline]
pub fn argb_from_xyz(xyz: Vec3) -> u32 {
    argb_from_linrgb(XYZ_TO_SRGB * xyz)
}

/// Relative luminance Y in [0, 100] of a packed color.
#[inline]
pub fn y_from_argb(argb: u32) -> f64 {
    Y_FROM_LINRGB.dot(linrgb_from_argb(argb))
}

/// L* (tone) of a packed color.
#[inline]
pub fn lstar_from_argb(argb: u32) -> f64 {
    lstar_from_y(y_from_argb(argb))
}

/// Neutral gray with the given L*.
///
/// ```rust
/// use hct_transfer::{argb_from_lstar, BLACK, WHITE};
///
/// assert_eq!(argb_from_lstar(0.0), BLACK);
/// assert_eq!(argb_from_lstar(100.0), WHITE);
/// ```
#[inline]
pub fn argb_from_lstar(lstar: f64) -> u32 {
    let component = delinearized(y_from_lstar(lstar));
    argb_from_rgb(component, component, component)
}
