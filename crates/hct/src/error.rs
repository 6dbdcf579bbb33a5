//! Error types for HCT construction.

use thiserror::Error;

/// HCT error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HctError {
    /// A component is non-finite or outside its range.
    #[error("invalid {field} {value}: expected {bound}")]
    InvalidArgument {
        /// Component name: `hue`, `chroma` or `tone`.
        field: &'static str,
        /// Offending value.
        value: f64,
        /// Accepted range.
        bound: &'static str,
    },
}

/// Result type for HCT operations.
pub type HctResult<T> = Result<T, HctError>;
