//! Integration tests for the HCT crates.
//!
//! - `golden` - reference values in `tests/golden/hct_reference.json`
//! - `sweep` - parallel sweeps of the sRGB cube and the HCT grid
//!
//! ```bash
//! cargo test --package hct-tests
//! ```

#[cfg(test)]
mod golden;

#[cfg(test)]
mod sweep;
