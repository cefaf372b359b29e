//! Error types for payload codec operations.

use thiserror::Error;

/// Result type for payload codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for payload codec operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A read needed more bytes than remain in the source.
    ///
    /// Raised before the cursor moves; the parser stays usable.
    #[error("out of bounds: needed {needed} bytes, only {available} available")]
    OutOfBounds { needed: usize, available: usize },

    /// Text that is not valid UTF-8, or a string the zero-terminated
    /// format cannot represent.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// A numeric argument does not fit in the declared field width.
    #[error("value {value} out of range for {target}")]
    ValueOutOfRange { value: i64, target: &'static str },

    /// A byte order name that is neither little nor big endian.
    #[error("invalid byte order: {0:?}")]
    InvalidByteOrder(String),
}

impl Error {
    /// Creates an out-of-bounds error.
    pub fn out_of_bounds(needed: usize, available: usize) -> Self {
        Self::OutOfBounds { needed, available }
    }

    /// Creates an invalid encoding error.
    pub fn invalid_encoding(msg: impl Into<String>) -> Self {
        Self::InvalidEncoding(msg.into())
    }

    /// Creates a value-out-of-range error.
    pub fn value_out_of_range(value: i64, target: &'static str) -> Self {
        Self::ValueOutOfRange { value, target }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}
