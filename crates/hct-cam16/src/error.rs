//! Error types for viewing-condition configuration.
//!
//! The appearance math itself is total; only building viewing
//! conditions from user-supplied configuration can fail.

use thiserror::Error;

/// CAM16 configuration error.
#[derive(Debug, Error)]
pub enum Cam16Error {
    /// A configuration value is out of its valid range.
    #[error("invalid viewing conditions: {0}")]
    InvalidConfig(String),

    /// Unknown surround name.
    #[error("unknown surround '{0}' (expected dark, dim or average)")]
    UnknownSurround(String),

    /// YAML parse or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CAM16 configuration.
pub type Cam16Result<T> = Result<T, Cam16Error>;
