//! Wire format types and utilities.

use std::fmt;
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder as Endian, LittleEndian};

use crate::error::Error;

/// Byte terminating a zero-terminated string field.
pub const STRING_TERMINATOR: u8 = 0x00;

/// Byte written for `true`.
pub const TRUE_BYTE: u8 = 0x01;

/// Byte written for `false`. On read, only this value decodes as `false`.
pub const FALSE_BYTE: u8 = 0x00;

/// Byte order applied to every multi-byte fixed-width field.
///
/// Single-byte fields (`u8`, `i8`, `bool`) and the byte-oriented fields
/// (strings, blobs) are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first (network order).
    Big,
}

impl ByteOrder {
    /// Returns the byte order of the host.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// Returns the lowercase name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" | "network" => Ok(ByteOrder::Big),
            _ => Err(Error::InvalidByteOrder(s.to_string())),
        }
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ByteOrder> for String {
    fn from(order: ByteOrder) -> Self {
        order.as_str().to_string()
    }
}

// Each pair converts one fixed-width type to and from its wire bytes.
// Readers are handed a slice already bounds-checked to the exact width.
macro_rules! fixed_width {
    ($($ty:ty, $width:expr, $write:ident, $read:ident;)*) => {
        impl ByteOrder {
            $(
                #[inline]
                pub(crate) fn $write(self, value: $ty) -> [u8; $width] {
                    let mut buf = [0u8; $width];
                    match self {
                        ByteOrder::Little => LittleEndian::$write(&mut buf, value),
                        ByteOrder::Big => BigEndian::$write(&mut buf, value),
                    }
                    buf
                }

                #[inline]
                pub(crate) fn $read(self, bytes: &[u8]) -> $ty {
                    match self {
                        ByteOrder::Little => LittleEndian::$read(bytes),
                        ByteOrder::Big => BigEndian::$read(bytes),
                    }
                }
            )*
        }
    };
}

fixed_width! {
    u16, 2, write_u16, read_u16;
    u32, 4, write_u32, read_u32;
    i16, 2, write_i16, read_i16;
    i32, 4, write_i32, read_i32;
    f32, 4, write_f32, read_f32;
    f64, 8, write_f64, read_f64;
}
