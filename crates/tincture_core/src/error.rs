//! Color parsing errors

use thiserror::Error;

/// Error returned when a textual color token cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The token was empty (or only a `#`)
    #[error("empty color token")]
    Empty,

    /// The token has a digit count other than 3, 6 or 8
    #[error("color token '{input}' has {len} hex digits, expected 3, 6 or 8")]
    InvalidLength { input: String, len: usize },

    /// The token contains a character that is not a hex digit
    #[error("color token '{input}' contains non-hex character '{ch}'")]
    InvalidDigit { input: String, ch: char },
}
