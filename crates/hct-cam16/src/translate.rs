//! Inverse transform: appearance back to XYZ under a viewing environment.
//!
//! Holding J, C and h fixed while swapping the [`ViewingConditions`]
//! answers "which stimulus looks like this in that environment?".

use hct_math::Vec3;
use hct_transfer::argb_from_xyz;

use crate::response::{adapted_response_from_jch, decompress};
use crate::{CAT16_INV, Cam16, ViewingConditions};

impl Cam16 {
    /// XYZ (Y = 100 scale) that produces this appearance under `vc`.
    ///
    /// ```rust
    /// use hct_cam16::{Cam16, ViewingConditions};
    /// use hct_transfer::xyz_from_argb;
    ///
    /// let cam = Cam16::from_argb(0xFF12_3456);
    /// let xyz = cam.xyz_in(ViewingConditions::standard());
    /// assert!((xyz.y - xyz_from_argb(0xFF12_3456).y).abs() < 1e-4);
    /// ```
    pub fn xyz_in(&self, vc: &ViewingConditions) -> Vec3 {
        let rgb_a = adapted_response_from_jch(self.j(), self.chroma(), self.hue().to_radians(), vc);
        let rgb_c = rgb_a.map(decompress) * (100.0 / vc.fl());
        CAT16_INV * (rgb_c / vc.rgb_d())
    }

    /// Packed color of this appearance under the standard conditions.
    pub fn to_argb(&self) -> u32 {
        self.viewed(ViewingConditions::standard())
    }

    /// Packed color that shows this appearance under `vc`.
    ///
    /// Out-of-gamut channels clamp.
    pub fn viewed(&self, vc: &ViewingConditions) -> u32 {
        argb_from_xyz(self.xyz_in(vc))
    }
}
