//! The HCT color value.

use std::fmt;
use std::sync::OnceLock;

use hct_cam16::{Cam16, ViewingConditions};
use hct_transfer::{lstar_from_argb, lstar_from_y};

use crate::solver::solve;
use crate::{HctError, HctResult};

/// A color as hue, chroma and tone.
///
/// Hue and chroma are CAM16 under the standard viewing conditions; tone
/// is CIE L*. The triple is kept as requested and resolved to an sRGB
/// color on first use. Chroma that sRGB cannot show at the requested hue
/// and tone resolves to the most chromatic color available.
///
/// # Example
///
/// ```rust
/// use hct::Hct;
///
/// let blue = Hct::from_argb(0xFF00_00FF);
/// assert!((blue.hue() - 282.788).abs() < 1e-3);
/// assert!((blue.tone() - 32.303).abs() < 1e-3);
///
/// let lighter = blue.with_tone(70.0)?;
/// assert_eq!(lighter.hue(), blue.hue());
/// # Ok::<(), hct::HctError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: OnceLock<u32>,
}

impl Hct {
    /// Creates an HCT value.
    ///
    /// # Errors
    ///
    /// [`HctError::InvalidArgument`] unless hue is in [0, 360], chroma is
    /// non-negative, tone is in [0, 100] and all three are finite.
    pub fn new(hue: f64, chroma: f64, tone: f64) -> HctResult<Self> {
        check("hue", hue, (0.0..=360.0).contains(&hue), "[0, 360]")?;
        check("chroma", chroma, chroma.is_finite() && chroma >= 0.0, ">= 0")?;
        check("tone", tone, (0.0..=100.0).contains(&tone), "[0, 100]")?;
        Ok(Self::from_parts(hue, chroma, tone))
    }

    /// HCT of a packed color. Alpha is ignored.
    ///
    /// The opaque color is remembered, so [`Hct::to_argb`] returns it
    /// without solving.
    pub fn from_argb(argb: u32) -> Self {
        let argb = argb | 0xFF00_0000;
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue(),
            chroma: cam.chroma(),
            tone: lstar_from_argb(argb).clamp(0.0, 100.0),
            argb: OnceLock::from(argb),
        }
    }

    fn from_parts(hue: f64, chroma: f64, tone: f64) -> Self {
        Self {
            hue,
            chroma,
            tone,
            argb: OnceLock::new(),
        }
    }

    /// Hue in degrees.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Chroma as requested; see [`Hct::resolved`] for what sRGB delivers.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Tone (L*).
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// Opaque packed sRGB color, solved once and cached.
    pub fn to_argb(&self) -> u32 {
        if let Some(argb) = self.argb.get() {
            return *argb;
        }
        let argb = solve(self.hue, self.chroma, self.tone);
        // A concurrent first reader may have stored the same value already.
        let _ = self.argb.set(argb);
        argb
    }

    /// Copy with a different hue.
    pub fn with_hue(&self, hue: f64) -> HctResult<Self> {
        Self::new(hue, self.chroma, self.tone)
    }

    /// Copy with a different chroma.
    pub fn with_chroma(&self, chroma: f64) -> HctResult<Self> {
        Self::new(self.hue, chroma, self.tone)
    }

    /// Copy with a different tone.
    pub fn with_tone(&self, tone: f64) -> HctResult<Self> {
        Self::new(self.hue, self.chroma, tone)
    }

    /// HCT of the color this value actually resolves to.
    ///
    /// ```rust
    /// use hct::Hct;
    ///
    /// let wish = Hct::new(120.0, 500.0, 50.0)?;
    /// let real = wish.resolved();
    /// assert!(real.chroma() < 500.0);
    /// assert_eq!(real.to_argb(), wish.to_argb());
    /// # Ok::<(), hct::HctError>(())
    /// ```
    pub fn resolved(&self) -> Self {
        Self::from_argb(self.to_argb())
    }

    /// The HCT that, seen under the standard conditions, matches how this
    /// color looks under `vc`.
    ///
    /// The resolved color's appearance is carried into `vc`, and the XYZ
    /// producing it there is measured again under the standard
    /// conditions. Tone follows the new luminance.
    pub fn in_viewing_conditions(&self, vc: &ViewingConditions) -> Self {
        let cam = Cam16::from_argb(self.to_argb());
        let xyz = cam.xyz_in(vc);
        let recast = Cam16::from_xyz(xyz);
        Self::from_parts(
            recast.hue(),
            recast.chroma(),
            lstar_from_y(xyz.y).clamp(0.0, 100.0),
        )
    }
}

/// Compares the requested triples, not the resolved colors.
///
/// Two out-of-gamut requests that clamp to the same color are unequal;
/// compare [`Hct::to_argb`] or [`Hct::resolved`] for that.
impl PartialEq for Hct {
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue && self.chroma == other.chroma && self.tone == other.tone
    }
}

impl fmt::Display for Hct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HCT({:.3}, {:.3}, {:.3})", self.hue, self.chroma, self.tone)
    }
}

impl From<u32> for Hct {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

fn check(field: &'static str, value: f64, ok: bool, bound: &'static str) -> HctResult<()> {
    if ok {
        Ok(())
    } else {
        Err(HctError::InvalidArgument { field, value, bound })
    }
}
