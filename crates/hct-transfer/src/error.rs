//! Error types for packed color parsing.

use thiserror::Error;

/// Failure to parse a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Digit count is not 3, 6 or 8.
    #[error("invalid hex color length {len} in '{input}' (expected 3, 6 or 8 digits)")]
    InvalidLength {
        /// Input as given.
        input: String,
        /// Number of digits after the optional '#'.
        len: usize,
    },

    /// A character is not a hex digit.
    #[error("invalid hex digit in '{0}'")]
    InvalidDigit(String),
}

/// Result type for color parsing.
pub type ParseResult<T> = Result<T, ParseColorError>;
