//! # hct-cam16
//!
//! The CAM16 color appearance model: viewing conditions, the forward
//! transform from XYZ to appearance attributes, CAM16-UCS, and the
//! inverse used to translate a color between viewing environments.
//!
//! # Attributes
//!
//! | Attribute | Meaning |
//! |-----------|---------|
//! | h | hue angle, degrees in [0, 360) |
//! | J | lightness |
//! | Q | brightness |
//! | C | chroma |
//! | M | colorfulness |
//! | s | saturation |
//! | J*, a*, b* | CAM16-UCS coordinates |
//!
//! # Usage
//!
//! ```rust
//! use hct_cam16::{Cam16, Surround, ViewingConditionsConfig};
//!
//! let blue = Cam16::from_argb(0xFF00_00FF);
//! assert!((blue.hue() - 282.788).abs() < 1e-3);
//!
//! // The same appearance in a dark room needs a different stimulus.
//! let dark = ViewingConditionsConfig {
//!     adapting_luminance: 11.72,
//!     background_lstar: 10.0,
//!     surround: Surround::Dark,
//!     ..Default::default()
//! }
//! .build()?;
//! let shown = blue.viewed(&dark);
//! assert_ne!(shown, 0xFF00_00FF);
//! # Ok::<(), hct_cam16::Cam16Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`hct-math`] - `Vec3` / `Mat3`, angle helpers
//! - [`hct-transfer`] - sRGB, XYZ and L* conversions
//! - `serde`, `serde_yaml` - viewing-conditions configuration
//! - `tracing` - debug logging
//!
//! # Used By
//!
//! - `hct` - HCT value and gamut solver

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cam16;
mod config;
mod error;
pub mod response;
mod translate;
mod viewing;

pub use cam16::Cam16;
pub use config::ViewingConditionsConfig;
pub use error::{Cam16Error, Cam16Result};
pub use response::{CAT16, CAT16_INV};
pub use viewing::{Surround, ViewingConditions, standard_adapting_luminance};
