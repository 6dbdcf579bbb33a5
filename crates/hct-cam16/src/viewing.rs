//! Viewing conditions.
//!
//! A [`ViewingConditions`] describes the observing environment: how bright
//! the adapting field is, how light the background is, the surround, and
//! the reference white. Construction derives every coefficient the
//! appearance model needs, once; the value is immutable afterwards.
//!
//! # Default
//!
//! [`ViewingConditions::standard`] is the sRGB viewing environment that
//! HCT is defined in: D65 white, a 200 lux environment
//! (`L_A = 200 / pi * Y(L* 50) / 100`), mid-gray background, average
//! surround, no illuminant discounting.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use hct_math::{Vec3, lerp};
use hct_transfer::{WHITE_POINT_D65, y_from_lstar};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::response::compress;
use crate::{CAT16, Cam16Error};

/// Surround of the viewing field.
///
/// Sets the surround factor F (0.8 / 0.9 / 1.0), from which the
/// exponential nonlinearity c and chromatic induction Nc follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surround {
    /// Dark room, e.g. a cinema.
    Dark,
    /// Dim room, e.g. television viewing.
    Dim,
    /// Average surround, e.g. a lit office.
    #[default]
    Average,
}

impl Surround {
    /// Surround parameter on the 0..=2 scale (dark = 0, average = 2).
    pub fn factor(self) -> f64 {
        match self {
            Surround::Dark => 0.0,
            Surround::Dim => 1.0,
            Surround::Average => 2.0,
        }
    }
}

impl fmt::Display for Surround {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Surround::Dark => "dark",
            Surround::Dim => "dim",
            Surround::Average => "average",
        };
        f.write_str(name)
    }
}

impl FromStr for Surround {
    type Err = Cam16Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Surround::Dark),
            "dim" => Ok(Surround::Dim),
            "average" => Ok(Surround::Average),
            other => Err(Cam16Error::UnknownSurround(other.to_string())),
        }
    }
}

/// Adapting luminance of the standard environment, in cd/m^2.
pub fn standard_adapting_luminance() -> f64 {
    200.0 / PI * y_from_lstar(50.0) / 100.0
}

/// Immutable description of a viewing environment plus derived CAM16
/// coefficients.
///
/// # Example
///
/// ```rust
/// use hct_cam16::{Surround, ViewingConditions};
/// use hct_transfer::WHITE_POINT_D65;
///
/// let cinema = ViewingConditions::new(WHITE_POINT_D65, 11.72, 10.0, Surround::Dark, false);
/// assert!(cinema.c() < ViewingConditions::standard().c());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingConditions {
    white_point: Vec3,
    adapting_luminance: f64,
    background_lstar: f64,
    surround: Surround,
    discount_illuminant: bool,
    d: f64,
    n: f64,
    aw: f64,
    nbb: f64,
    ncb: f64,
    c: f64,
    nc: f64,
    rgb_d: Vec3,
    fl: f64,
    fl_root: f64,
    z: f64,
}

impl ViewingConditions {
    /// Derives viewing conditions.
    ///
    /// # Arguments
    ///
    /// * `white_point` - reference white XYZ, Y = 100 scale
    /// * `adapting_luminance` - L_A in cd/m^2, must be positive
    /// * `background_lstar` - L* of the background; floored at 0.1
    /// * `surround` - surround type
    /// * `discount_illuminant` - full adaptation (D = 1) when true
    ///
    /// No validation is done here; use
    /// [`ViewingConditionsConfig::build`](crate::ViewingConditionsConfig::build)
    /// for user-supplied values.
    pub fn new(
        white_point: Vec3,
        adapting_luminance: f64,
        background_lstar: f64,
        surround: Surround,
        discount_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let rgb_w = CAT16 * white_point;

        let f = 0.8 + surround.factor() / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discount_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = d.clamp(0.0, 1.0);
        let nc = f;
        let rgb_d = rgb_w.map(|w| d * (100.0 / w) + 1.0 - d);

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point.y;
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_a = (rgb_d * rgb_w).map(|x| compress(fl * x / 100.0));
        let aw = (2.0 * rgb_a.x + rgb_a.y + 0.05 * rgb_a.z) * nbb;

        debug!(
            adapting_luminance,
            background_lstar,
            %surround,
            discount_illuminant,
            d,
            fl,
            aw,
            "viewing conditions"
        );

        Self {
            white_point,
            adapting_luminance,
            background_lstar,
            surround,
            discount_illuminant,
            d,
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// The sRGB viewing environment HCT is defined in, derived once.
    pub fn standard() -> &'static ViewingConditions {
        static INSTANCE: OnceLock<ViewingConditions> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::with_background_lstar(50.0))
    }

    /// The standard environment with a different background L*.
    ///
    /// Lighter backgrounds make the same stimulus look darker and less
    /// colorful.
    pub fn with_background_lstar(background_lstar: f64) -> Self {
        Self::new(
            WHITE_POINT_D65,
            standard_adapting_luminance(),
            background_lstar,
            Surround::Average,
            false,
        )
    }

    /// Reference white XYZ.
    pub fn white_point(&self) -> Vec3 {
        self.white_point
    }

    /// Adapting luminance L_A (cd/m^2).
    pub fn adapting_luminance(&self) -> f64 {
        self.adapting_luminance
    }

    /// Background L* (after flooring at 0.1).
    pub fn background_lstar(&self) -> f64 {
        self.background_lstar
    }

    /// Surround type.
    pub fn surround(&self) -> Surround {
        self.surround
    }

    /// Whether the illuminant is discounted.
    pub fn discount_illuminant(&self) -> bool {
        self.discount_illuminant
    }

    /// Degree of adaptation D in [0, 1].
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Background induction ratio n = Y_b / Y_w.
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Achromatic response of the reference white.
    pub fn aw(&self) -> f64 {
        self.aw
    }

    /// Brightness background induction factor.
    pub fn nbb(&self) -> f64 {
        self.nbb
    }

    /// Chromatic background induction factor.
    pub fn ncb(&self) -> f64 {
        self.ncb
    }

    /// Exponential nonlinearity c of the surround.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Chromatic induction factor Nc.
    pub fn nc(&self) -> f64 {
        self.nc
    }

    /// Per-channel von Kries discount, applied after CAT16.
    pub fn rgb_d(&self) -> Vec3 {
        self.rgb_d
    }

    /// Luminance-level adaptation factor F_L.
    pub fn fl(&self) -> f64 {
        self.fl
    }

    /// F_L^0.25.
    pub fn fl_root(&self) -> f64 {
        self.fl_root
    }

    /// Base exponent z = 1.48 + sqrt(n).
    pub fn z(&self) -> f64 {
        self.z
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_coefficients() {
        let vc = ViewingConditions::standard();
        assert_abs_diff_eq!(vc.n(), 0.18418651851244416, epsilon = 1e-9);
        assert_abs_diff_eq!(vc.aw(), 29.980997194447333, epsilon = 1e-9);
        assert_abs_diff_eq!(vc.nbb(), 1.0169191804458755, epsilon = 1e-9);
        assert_abs_diff_eq!(vc.c(), 0.69, epsilon = 1e-12);
        assert_abs_diff_eq!(vc.nc(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(vc.fl(), 0.3884814537800353, epsilon = 1e-9);
        assert_abs_diff_eq!(vc.z(), 1.909169568483652, epsilon = 1e-9);
        assert_abs_diff_eq!(vc.rgb_d().x, 1.02117770275752, epsilon = 1e-9);
        assert_abs_diff_eq!(vc.rgb_d().y, 0.9863077294280124, epsilon = 1e-9);
        assert_abs_diff_eq!(vc.rgb_d().z, 0.9339605082802299, epsilon = 1e-9);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(&ViewingConditions::default(), ViewingConditions::standard());
    }

    #[test]
    fn test_surround_coefficients() {
        let la = standard_adapting_luminance();
        let dark = ViewingConditions::new(WHITE_POINT_D65, la, 50.0, Surround::Dark, false);
        let dim = ViewingConditions::new(WHITE_POINT_D65, la, 50.0, Surround::Dim, false);
        assert_abs_diff_eq!(dark.c(), 0.525, epsilon = 1e-12);
        assert_abs_diff_eq!(dark.nc(), 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(dim.c(), 0.59, epsilon = 1e-12);
        assert_abs_diff_eq!(dim.nc(), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_discount_illuminant_full_adaptation() {
        let vc = ViewingConditions::new(WHITE_POINT_D65, 5.0, 50.0, Surround::Average, true);
        assert_eq!(vc.d(), 1.0);
        // With D = 1 the white maps to equal adapted cone responses.
        let adapted = vc.rgb_d() * (CAT16 * WHITE_POINT_D65);
        assert_abs_diff_eq!(adapted.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(adapted.y, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(adapted.z, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_background_floor() {
        let vc = ViewingConditions::with_background_lstar(0.0);
        assert_eq!(vc.background_lstar(), 0.1);
        assert!(vc.n() > 0.0 && vc.nbb().is_finite());
    }

    #[test]
    fn test_surround_parse() {
        assert_eq!("Dark".parse::<Surround>().unwrap(), Surround::Dark);
        assert_eq!(" dim ".parse::<Surround>().unwrap(), Surround::Dim);
        assert_eq!(Surround::Average.to_string(), "average");
        assert!(matches!(
            "bright".parse::<Surround>(),
            Err(Cam16Error::UnknownSurround(_))
        ));
    }
}
