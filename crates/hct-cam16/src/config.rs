//! Viewing-conditions configuration.
//!
//! [`ViewingConditionsConfig`] is the serializable, user-facing form of a
//! viewing environment. Missing fields fall back to the standard sRGB
//! environment, so a YAML file only needs the fields it changes:
//!
//! ```yaml
//! adapting_luminance: 11.72
//! background_lstar: 10.0
//! surround: dark
//! ```
//!
//! # Example
//!
//! ```rust
//! use hct_cam16::{Surround, ViewingConditionsConfig};
//!
//! let config = ViewingConditionsConfig::from_yaml_str("surround: dim\n")?;
//! let vc = config.build()?;
//! assert_eq!(vc.surround(), Surround::Dim);
//! # Ok::<(), hct_cam16::Cam16Error>(())
//! ```

use std::path::Path;

use hct_math::Vec3;
use hct_transfer::WHITE_POINT_D65;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Cam16Error, Cam16Result, Surround, ViewingConditions, standard_adapting_luminance};

/// Serializable description of a viewing environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewingConditionsConfig {
    /// Reference white XYZ, Y = 100 scale.
    pub white_point: [f64; 3],
    /// Adapting luminance L_A in cd/m^2.
    pub adapting_luminance: f64,
    /// L* of the background.
    pub background_lstar: f64,
    /// Surround type.
    pub surround: Surround,
    /// Assume full adaptation to the illuminant.
    pub discount_illuminant: bool,
}

impl Default for ViewingConditionsConfig {
    fn default() -> Self {
        Self {
            white_point: WHITE_POINT_D65.to_array(),
            adapting_luminance: standard_adapting_luminance(),
            background_lstar: 50.0,
            surround: Surround::Average,
            discount_illuminant: false,
        }
    }
}

impl ViewingConditionsConfig {
    /// Parses a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Cam16Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Cam16Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading viewing conditions");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> Cam16Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that every field is usable by the appearance model.
    pub fn validate(&self) -> Cam16Result<()> {
        if !self.adapting_luminance.is_finite() || self.adapting_luminance <= 0.0 {
            return Err(Cam16Error::InvalidConfig(format!(
                "adapting_luminance must be positive and finite, got {}",
                self.adapting_luminance
            )));
        }
        if !self.background_lstar.is_finite() || !(0.0..=100.0).contains(&self.background_lstar) {
            return Err(Cam16Error::InvalidConfig(format!(
                "background_lstar must be in [0, 100], got {}",
                self.background_lstar
            )));
        }
        if self.white_point.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(Cam16Error::InvalidConfig(format!(
                "white_point components must be positive and finite, got {:?}",
                self.white_point
            )));
        }
        Ok(())
    }

    /// Validates and derives the viewing conditions.
    pub fn build(&self) -> Cam16Result<ViewingConditions> {
        self.validate()?;
        Ok(ViewingConditions::new(
            Vec3::from_array(self.white_point),
            self.adapting_luminance,
            self.background_lstar,
            self.surround,
            self.discount_illuminant,
        ))
    }
}

impl ViewingConditions {
    /// The configuration these conditions were built from.
    ///
    /// The background L* is the floored value.
    pub fn to_config(&self) -> ViewingConditionsConfig {
        ViewingConditionsConfig {
            white_point: self.white_point().to_array(),
            adapting_luminance: self.adapting_luminance(),
            background_lstar: self.background_lstar(),
            surround: self.surround(),
            discount_illuminant: self.discount_illuminant(),
        }
    }
}

impl TryFrom<&ViewingConditionsConfig> for ViewingConditions {
    type Error = Cam16Error;

    fn try_from(config: &ViewingConditionsConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}
