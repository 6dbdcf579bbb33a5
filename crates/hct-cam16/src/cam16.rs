//! CAM16 forward transform.
//!
//! Converts XYZ under a [`ViewingConditions`] into the full set of
//! appearance attributes. All attributes come out of one pass and the
//! type has no setters, so they can never disagree with each other.
//!
//! # Pipeline
//!
//! ```text
//! XYZ -> CAT16 -> * D_rgb -> compress -> (a, b, A) -> J, Q, C, M, s, h
//!                                                  -> J*, a*, b* (UCS)
//! ```

use hct_math::{Vec3, sanitize_degrees};
use hct_transfer::xyz_from_argb;
use serde::Serialize;

use crate::response::{compress, eccentricity, opponent};
use crate::{CAT16, ViewingConditions};

/// UCS lightness coefficient c1.
pub(crate) const UCS_C1: f64 = 0.007;

/// UCS colorfulness coefficient c2.
pub(crate) const UCS_C2: f64 = 0.0228;

/// CAM16 appearance attributes of one stimulus.
///
/// # Example
///
/// ```rust
/// use hct_cam16::Cam16;
///
/// let blue = Cam16::from_argb(0xFF00_00FF);
/// assert!((blue.hue() - 282.788).abs() < 1e-3);
/// assert!((blue.chroma() - 87.231).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cam16 {
    hue: f64,
    chroma: f64,
    j: f64,
    q: f64,
    m: f64,
    s: f64,
    jstar: f64,
    astar: f64,
    bstar: f64,
}

impl Cam16 {
    /// Appearance of a packed color under the standard viewing conditions.
    pub fn from_argb(argb: u32) -> Self {
        Self::from_argb_in(argb, ViewingConditions::standard())
    }

    /// Appearance of a packed color under `vc`.
    pub fn from_argb_in(argb: u32, vc: &ViewingConditions) -> Self {
        Self::from_xyz_in(xyz_from_argb(argb), vc)
    }

    /// Appearance of XYZ (Y = 100 scale) under the standard conditions.
    pub fn from_xyz(xyz: Vec3) -> Self {
        Self::from_xyz_in(xyz, ViewingConditions::standard())
    }

    /// Appearance of XYZ (Y = 100 scale) under `vc`.
    pub fn from_xyz_in(xyz: Vec3, vc: &ViewingConditions) -> Self {
        // Chromatic adaptation, then the nonlinear cone response.
        let rgb_d = vc.rgb_d() * (CAT16 * xyz);
        let rgb_a = rgb_d.map(|x| compress(vc.fl() * x / 100.0));

        let (a, b) = opponent(rgb_a);
        let u = (20.0 * rgb_a.x + 20.0 * rgb_a.y + 21.0 * rgb_a.z) / 20.0;
        let p2 = (40.0 * rgb_a.x + 20.0 * rgb_a.y + rgb_a.z) / 20.0;

        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let hue_radians = hue.to_radians();

        let ac = p2 * vc.nbb();
        let j = 100.0 * (ac / vc.aw()).powf(vc.c() * vc.z());
        let q = 4.0 / vc.c() * (j / 100.0).sqrt() * (vc.aw() + 4.0) * vc.fl_root();

        let p1 = 50000.0 / 13.0 * eccentricity(hue) * vc.nc() * vc.ncb();
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29f64.powf(vc.n())).powf(0.73) * t.powf(0.9);
        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root();
        // 100 * sqrt(M / Q), written without the 0/0 at black.
        let s = 50.0 * (alpha * vc.c() / (vc.aw() + 4.0)).sqrt();

        let (jstar, astar, bstar) = ucs(j, m, hue_radians);
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Builds the appearance with lightness `j`, chroma `chroma` and hue
    /// `hue` (degrees) under the standard conditions.
    pub fn from_jch(j: f64, chroma: f64, hue: f64) -> Self {
        Self::from_jch_in(j, chroma, hue, ViewingConditions::standard())
    }

    /// Builds the appearance (J, C, h) under `vc`, deriving Q, M, s and
    /// the UCS coordinates.
    pub fn from_jch_in(j: f64, chroma: f64, hue: f64, vc: &ViewingConditions) -> Self {
        let hue = sanitize_degrees(hue);
        let q = 4.0 / vc.c() * (j / 100.0).sqrt() * (vc.aw() + 4.0) * vc.fl_root();
        let m = chroma * vc.fl_root();
        let alpha = if j == 0.0 { 0.0 } else { chroma / (j / 100.0).sqrt() };
        let s = 50.0 * (alpha * vc.c() / (vc.aw() + 4.0)).sqrt();
        let (jstar, astar, bstar) = ucs(j, m, hue.to_radians());
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Inverse of the UCS coordinates under the standard conditions.
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        Self::from_ucs_in(jstar, astar, bstar, ViewingConditions::standard())
    }

    /// Inverse of the UCS coordinates under `vc`.
    pub fn from_ucs_in(jstar: f64, astar: f64, bstar: f64, vc: &ViewingConditions) -> Self {
        let mstar = astar.hypot(bstar);
        let m = (mstar * UCS_C2).exp_m1() / UCS_C2;
        let chroma = m / vc.fl_root();
        let hue = bstar.atan2(astar).to_degrees();
        let j = jstar / (1.0 - (jstar - 100.0) * UCS_C1);
        Self::from_jch_in(j, chroma, hue, vc)
    }

    /// Perceptual color difference (CAM16-UCS Delta E').
    ///
    /// ```rust
    /// use hct_cam16::Cam16;
    ///
    /// let red = Cam16::from_argb(0xFFFF_0000);
    /// let orange = Cam16::from_argb(0xFFFF_8000);
    /// assert_eq!(red.distance(&red), 0.0);
    /// assert!(red.distance(&orange) > 1.0);
    /// ```
    pub fn distance(&self, other: &Cam16) -> f64 {
        let dj = self.jstar - other.jstar;
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        let de_prime = (dj * dj + da * da + db * db).sqrt();
        1.41 * de_prime.powf(0.63)
    }

    /// Hue angle h in [0, 360).
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Chroma C.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Lightness J.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Brightness Q.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Colorfulness M.
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Saturation s.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// UCS lightness J*.
    pub fn jstar(&self) -> f64 {
        self.jstar
    }

    /// UCS a*.
    pub fn astar(&self) -> f64 {
        self.astar
    }

    /// UCS b*.
    pub fn bstar(&self) -> f64 {
        self.bstar
    }
}

/// CAM16-UCS coordinates of (J, M, h).
fn ucs(j: f64, m: f64, hue_radians: f64) -> (f64, f64, f64) {
    let jstar = (1.0 + 100.0 * UCS_C1) * j / (1.0 + UCS_C1 * j);
    let mstar = (UCS_C2 * m).ln_1p() / UCS_C2;
    let (sin, cos) = hue_radians.sin_cos();
    (jstar, mstar * cos, mstar * sin)
}
