//! Gamut-constrained inverse of HCT.
//!
//! Given (hue, chroma, tone), finds the sRGB color with that tone and hue
//! whose chroma is as close as possible to the request.
//!
//! # Algorithm
//!
//! Tone fixes luminance Y, and the plane `Y = const` cuts the linear RGB
//! cube in a convex polygon. Along its edge chroma is maximal for each
//! hue, so:
//!
//! 1. Intersect the plane with the 12 cube edges and keep the two
//!    intersections whose CAM16 hues bracket the target hue.
//! 2. Bisect the segment between them, one axis at a time, over the
//!    planes where the 8-bit encoding changes. This gives the
//!    maximum-chroma color at that hue and tone.
//! 3. If less chroma is requested, a Newton iteration on lightness J
//!    finds the exact (J, C, h) color at luminance Y; if the iteration
//!    leaves the cube, fall back to interpolating between the neutral
//!    gray and the boundary color.
//!
//! The solver works in the standard viewing conditions only; the
//! matrices it needs are derived from them once per process.

use std::sync::OnceLock;

use hct_cam16::response::{adapted_response_from_jch, compress, decompress, opponent};
use hct_cam16::{CAT16, Cam16, ViewingConditions};
use hct_math::{Mat3, Vec3, are_in_cyclic_order, radian_distance, sanitize_degrees};
use hct_transfer::srgb::{critical_plane, delinearized_unrounded};
use hct_transfer::{SRGB_TO_XYZ, Y_FROM_LINRGB, argb_from_linrgb, argb_from_lstar, y_from_lstar};
use tracing::trace;

/// Bisection steps per axis; 2^8 covers all 255 critical planes.
const BISECTION_STEPS: usize = 8;

/// Newton steps for the exact in-gamut solve.
const NEWTON_STEPS: usize = 5;

/// Newton stops once the luminance is this close to the target.
const LUMINANCE_TOLERANCE: f64 = 0.002;

/// Exact solutions brighter than this in any channel are outside the cube.
const CHANNEL_CEILING: f64 = 100.01;

/// Below this chroma the result is gray.
const MIN_CHROMA: f64 = 0.0001;

/// Tones within this of 0 or 100 resolve to black or white.
const TONE_EPSILON: f64 = 0.0001;

/// Cube vertices whose hue is this close to the target are the answer.
const VERTEX_HUE_EPSILON: f64 = 1e-8;

/// Resolves an HCT triple to an opaque packed color.
///
/// Hue is in degrees and wraps. Out-of-range tone clamps to black or
/// white; chroma above what sRGB can show at that hue and tone clamps
/// to the maximum.
///
/// ```rust
/// use hct::solve;
///
/// assert_eq!(solve(0.0, 50.0, 0.0), 0xFF00_0000);
/// assert_eq!(solve(120.0, 0.0, 100.0), 0xFFFF_FFFF);
/// assert_eq!(solve(282.788, 200.0, 32.302), 0xFF00_00FF);
/// ```
pub fn solve(hue: f64, chroma: f64, tone: f64) -> u32 {
    if chroma < MIN_CHROMA || tone < TONE_EPSILON || tone > 100.0 - TONE_EPSILON {
        trace!(hue, chroma, tone, "solve: achromatic");
        return argb_from_lstar(tone.clamp(0.0, 100.0));
    }

    let hue = sanitize_degrees(hue);
    let hue_radians = hue.to_radians();
    let y = y_from_lstar(tone);
    let tables = SolverTables::global();

    let boundary = tables.bisect_to_limit(y, hue_radians);
    let boundary_chroma = Cam16::from_xyz(SRGB_TO_XYZ * boundary).chroma();
    if chroma >= boundary_chroma {
        trace!(hue, chroma, tone, boundary_chroma, "solve: clamped to boundary");
        return argb_from_linrgb(boundary);
    }

    if let Some(argb) = tables.find_result_by_j(hue_radians, chroma, y) {
        return argb;
    }

    trace!(hue, chroma, tone, boundary_chroma, "solve: interpolating from gray");
    let t = (chroma / boundary_chroma).min(1.0);
    argb_from_linrgb(Vec3::splat(y).lerp(boundary, t))
}

/// The most chromatic sRGB color with the given hue (degrees) and tone.
///
/// ```rust
/// use hct::{max_chroma_argb, solve};
///
/// assert_eq!(max_chroma_argb(27.408, 53.233), 0xFFFF_0000);
/// assert_eq!(max_chroma_argb(200.0, 50.0), solve(200.0, 1000.0, 50.0));
/// ```
pub fn max_chroma_argb(hue: f64, tone: f64) -> u32 {
    if tone < TONE_EPSILON || tone > 100.0 - TONE_EPSILON {
        return argb_from_lstar(tone.clamp(0.0, 100.0));
    }
    let hue_radians = sanitize_degrees(hue).to_radians();
    let boundary = SolverTables::global().bisect_to_limit(y_from_lstar(tone), hue_radians);
    argb_from_linrgb(boundary)
}

/// Matrices and planes for the standard viewing conditions.
struct SolverTables {
    /// Linear RGB to CAT16 cone space, discounted and scaled by `F_L / 100`.
    scaled_discount_from_linrgb: Mat3,
    linrgb_from_scaled_discount: Mat3,
    critical_planes: [f64; 255],
}

impl SolverTables {
    fn global() -> &'static SolverTables {
        static TABLES: OnceLock<SolverTables> = OnceLock::new();
        TABLES.get_or_init(Self::derive)
    }

    fn derive() -> Self {
        let vc = ViewingConditions::standard();
        let scale = vc.rgb_d() * (vc.fl() / 100.0);
        let forward = Mat3::diagonal(scale.x, scale.y, scale.z) * CAT16 * SRGB_TO_XYZ;
        let inverse = forward.inverse().unwrap_or(Mat3::IDENTITY);
        trace!("solver tables derived");
        Self {
            scaled_discount_from_linrgb: forward,
            linrgb_from_scaled_discount: inverse,
            critical_planes: std::array::from_fn(|i| critical_plane(i as u8)),
        }
    }

    /// CAM16 hue of a linear RGB color, in radians (-pi, pi].
    fn hue_of(&self, linrgb: Vec3) -> f64 {
        let rgb_a = (self.scaled_discount_from_linrgb * linrgb).map(compress);
        let (a, b) = opponent(rgb_a);
        b.atan2(a)
    }

    /// Pair of cube-edge intersections whose hues bracket `target_hue`.
    fn bisect_to_segment(&self, y: f64, target_hue: f64) -> (Vec3, Vec3) {
        let mut left = Vec3::ZERO;
        let mut right = Vec3::ZERO;
        let mut left_hue = 0.0;
        let mut right_hue = 0.0;
        let mut initialized = false;
        let mut uncut = true;

        for n in 0..12 {
            let Some(mid) = nth_vertex(y, n) else {
                continue;
            };
            let mid_hue = self.hue_of(mid);
            if radian_distance(mid_hue, target_hue) < VERTEX_HUE_EPSILON {
                return (mid, mid);
            }
            if !initialized {
                left = mid;
                right = mid;
                left_hue = mid_hue;
                right_hue = mid_hue;
                initialized = true;
                continue;
            }
            if uncut || are_in_cyclic_order(left_hue, mid_hue, right_hue) {
                uncut = false;
                if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                    right = mid;
                    right_hue = mid_hue;
                } else {
                    left = mid;
                    left_hue = mid_hue;
                }
            }
        }
        (left, right)
    }

    /// Maximum-chroma linear RGB color at luminance `y` and `target_hue`.
    fn bisect_to_limit(&self, y: f64, target_hue: f64) -> Vec3 {
        let (mut left, mut right) = self.bisect_to_segment(y, target_hue);
        let mut left_hue = self.hue_of(left);

        for axis in 0..3 {
            if left.to_array()[axis] == right.to_array()[axis] {
                continue;
            }
            let left_code = delinearized_unrounded(left.to_array()[axis]) - 0.5;
            let right_code = delinearized_unrounded(right.to_array()[axis]) - 0.5;
            let (mut l_plane, mut r_plane) = if left.to_array()[axis] < right.to_array()[axis] {
                (left_code.floor() as i32, right_code.ceil() as i32)
            } else {
                (left_code.ceil() as i32, right_code.floor() as i32)
            };

            for _ in 0..BISECTION_STEPS {
                if (r_plane - l_plane).abs() <= 1 {
                    break;
                }
                let m_plane = (l_plane + r_plane).div_euclid(2);
                let coordinate = self.critical_planes[m_plane.clamp(0, 254) as usize];
                let mid = set_coordinate(left, coordinate, right, axis);
                let mid_hue = self.hue_of(mid);
                if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                    right = mid;
                    r_plane = m_plane;
                } else {
                    left = mid;
                    left_hue = mid_hue;
                    l_plane = m_plane;
                }
            }
        }
        (left + right) * 0.5
    }

    /// Exact color with chroma `chroma`, hue `hue_radians` and luminance
    /// `y`, or `None` when the iteration leaves the RGB cube.
    fn find_result_by_j(&self, hue_radians: f64, chroma: f64, y: f64) -> Option<u32> {
        let vc = ViewingConditions::standard();
        // Initial estimate: J scales roughly with sqrt(Y).
        let mut j = y.sqrt() * 11.0;

        for iteration in 0..NEWTON_STEPS {
            let rgb_a = adapted_response_from_jch(j, chroma, hue_radians, vc);
            let linrgb = self.linrgb_from_scaled_discount * rgb_a.map(decompress);
            if linrgb.min_element() < 0.0 {
                return None;
            }
            let fnj = Y_FROM_LINRGB.dot(linrgb);
            if fnj <= 0.0 {
                return None;
            }
            if iteration == NEWTON_STEPS - 1 || (fnj - y).abs() < LUMINANCE_TOLERANCE {
                if linrgb.max_element() > CHANNEL_CEILING {
                    return None;
                }
                return Some(argb_from_linrgb(linrgb));
            }
            // Newton step on Y(J), using dY/dJ ~ 2Y/J.
            j -= (fnj - y) * j / (2.0 * fnj);
        }
        None
    }
}

/// Intersection of the plane `Y = y` with cube edge `n` (0..12), if the
/// edge reaches it.
///
/// Edges 0..4 run along R, 4..8 along G and 8..12 along B; the two fixed
/// coordinates are 0 or 100.
fn nth_vertex(y: f64, n: usize) -> Option<Vec3> {
    let [kr, kg, kb] = Y_FROM_LINRGB.to_array();
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };

    let (vertex, solved) = if n < 4 {
        let (g, b) = (coord_a, coord_b);
        let r = (y - g * kg - b * kb) / kr;
        (Vec3::new(r, g, b), r)
    } else if n < 8 {
        let (b, r) = (coord_a, coord_b);
        let g = (y - r * kr - b * kb) / kg;
        (Vec3::new(r, g, b), g)
    } else {
        let (r, g) = (coord_a, coord_b);
        let b = (y - r * kr - g * kg) / kb;
        (Vec3::new(r, g, b), b)
    };
    (0.0..=100.0).contains(&solved).then_some(vertex)
}

/// Point on the segment `source -> target` whose `axis` equals `coordinate`.
fn set_coordinate(source: Vec3, coordinate: f64, target: Vec3, axis: usize) -> Vec3 {
    let t = (coordinate - source.to_array()[axis]) / (target.to_array()[axis] - source.to_array()[axis]);
    source.lerp(target, t)
}
