//! # hct
//!
//! The HCT color space: CAM16 **H**ue and **C**hroma with CIE L*
//! **T**one. Tone alone predicts contrast, and hue and chroma stay
//! perceptually stable as tone changes, which makes HCT a good space
//! for deriving color schemes.
//!
//! # Usage
//!
//! ```rust
//! use hct::Hct;
//!
//! // Packed color to HCT and back.
//! let blue = Hct::from_argb(0xFF00_00FF);
//! assert_eq!(blue.to_argb(), 0xFF00_00FF);
//!
//! // Any triple resolves; unreachable chroma clamps to the gamut.
//! let vivid = Hct::new(282.788, 200.0, 32.302)?;
//! assert_eq!(vivid.to_argb(), 0xFF00_00FF);
//! # Ok::<(), hct::HctError>(())
//! ```
//!
//! # Viewing conditions
//!
//! [`Hct::in_viewing_conditions`] answers which HCT, shown in the
//! standard environment, matches a color's appearance in another one.
//!
//! ```rust
//! use hct::Hct;
//! use hct::cam16::ViewingConditions;
//!
//! let on_white = ViewingConditions::with_background_lstar(90.0);
//! let red = Hct::from_argb(0xFFFF_0000).in_viewing_conditions(&on_white);
//! assert!(red.tone() > 53.233);
//! ```
//!
//! # Dependencies
//!
//! - [`hct-cam16`] - appearance model and viewing conditions
//! - [`hct-transfer`] - sRGB, XYZ and L*
//! - [`hct-math`] - vectors, matrices, angles
//! - `thiserror` - error type
//! - `tracing` - solver trace logging

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod hct;
mod solver;

pub use error::{HctError, HctResult};
pub use hct::Hct;
pub use solver::{max_chroma_argb, solve};

/// Re-export of the appearance model crate.
pub use hct_cam16 as cam16;

/// Re-export of the tristimulus utilities crate.
pub use hct_transfer as transfer;

/// Common imports.
pub mod prelude {
    pub use crate::{Hct, HctError, HctResult, max_chroma_argb, solve};
    pub use hct_cam16::{Cam16, Surround, ViewingConditions, ViewingConditionsConfig};
    pub use hct_transfer::{argb_from_hex, hex_from_argb};
}
