//! # hct-math
//!
//! Math primitives for the HCT color engine.
//!
//! - [`Vec3`] - 3D vectors for XYZ / linear RGB / cone response triplets
//! - [`Mat3`] - 3x3 matrices for tristimulus and cone-space transforms
//! - Angle helpers ([`sanitize_degrees`], [`difference_degrees`], ...)
//! - Scalar interpolation ([`lerp`])
//!
//! # Design
//!
//! Everything is `f64`. The appearance model chains several power
//! functions and a bisection over 8-bit quantization planes, and single
//! precision is not enough to round-trip packed colors exactly.
//!
//! Matrices are **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use hct_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.41233895, 0.35762064, 0.18051042],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.01932141, 0.11916382, 0.95034478],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(100.0, 100.0, 100.0);
//! assert!((xyz.y - 100.0).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - double precision matrix inverse
//!
//! # Used By
//!
//! - `hct-transfer` - sRGB / XYZ matrices
//! - `hct-cam16` - CAT16 and cone-space transforms
//! - `hct` - gamut solver

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod interp;
mod mat3;
mod vec3;

pub use angle::*;
pub use interp::*;
pub use mat3::*;
pub use vec3::*;
