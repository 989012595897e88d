//! Error types for `ColorShift`

use thiserror::Error;

/// The error type for `ColorShift` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Hex Format Errors ====================
    /// The hex color does not have exactly 6 digits once the optional `#` is removed.
    #[error("invalid hex color length: '{input}' has {len} digits, expected 6")]
    InvalidHexLength {
        /// The rejected input, as supplied.
        input: String,
        /// Number of characters left after stripping the `#` prefix.
        len: usize,
    },

    /// The hex color has 6 characters but at least one is not a hex digit.
    #[error("invalid hex digits in color '{input}'")]
    InvalidHexDigit {
        /// The rejected input, as supplied.
        input: String,
    },

    // ==================== Channel Errors ====================
    /// An RGB channel lies outside `0..=255`.
    #[error("{channel} channel out of range: {value} (expected 0-255)")]
    ChannelOutOfRange {
        /// Channel name (`red`, `green` or `blue`).
        channel: &'static str,
        /// The rejected value.
        value: i64,
    },

    // ==================== Scheme Errors ====================
    /// The requested slot is not present in the scheme.
    #[error("unknown scheme slot: {0}")]
    UnknownSlot(String),

    /// A bundled scheme preset failed to deserialize.
    #[error("scheme parse error: {0}")]
    SchemeParse(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error comes from a malformed hex color string.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidHexLength { .. } | Error::InvalidHexDigit { .. }
        )
    }
}

/// A specialized Result type for `ColorShift` operations.
pub type Result<T> = std::result::Result<T, Error>;
