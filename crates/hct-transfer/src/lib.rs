//! # hct-transfer
//!
//! Tristimulus utilities underneath the HCT engine: the sRGB transfer
//! curve, CIE L*, sRGB <-> XYZ matrices, and packed 32-bit ARGB.
//!
//! # Scales
//!
//! | Quantity | Range |
//! |----------|-------|
//! | [`srgb::eotf`] / [`srgb::oetf`] | [0, 1] |
//! | linear RGB, XYZ, luminance Y | [0, 100] |
//! | L* (tone) | [0, 100] |
//! | ARGB channels | 0..=255 |
//!
//! # Usage
//!
//! ```rust
//! use hct_transfer::{lstar_from_argb, argb_from_lstar, hex_from_argb};
//!
//! let gray = argb_from_lstar(50.0);
//! assert_eq!(hex_from_argb(gray), "#777777");
//! assert!((lstar_from_argb(gray) - 50.0).abs() < 0.5);
//! ```
//!
//! # Dependencies
//!
//! - [`hct-math`] - `Vec3` / `Mat3`
//!
//! # Used By
//!
//! - `hct-cam16` - XYZ input to the appearance model
//! - `hct` - solver output encoding

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod argb;
mod error;
mod lstar;
pub mod srgb;
mod xyz;

pub use argb::*;
pub use error::{ParseColorError, ParseResult};
pub use lstar::*;
pub use xyz::*;
