//! Per-type encoding and decoding seam.
//!
//! Application messages implement [`Encode`] and [`Decode`] once to
//! describe their field sequence, then travel through
//! [`Builder::put`] and [`Parser::get`].

use crate::error::Result;
use crate::reader::Parser;
use crate::writer::Builder;

/// A value that can append itself to a [`Builder`].
pub trait Encode {
    /// Appends the wire representation of `self`.
    fn encode(&self, builder: &mut Builder) -> Result<()>;
}

/// A value that can be read from a [`Parser`].
///
/// The lifetime lets borrowed values such as `&'a str` point into the
/// parser's source buffer.
pub trait Decode<'a>: Sized {
    /// Reads one value, advancing the parser.
    fn decode(parser: &mut Parser<'a>) -> Result<Self>;
}

macro_rules! primitive {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            impl Encode for $ty {
                fn encode(&self, builder: &mut Builder) -> Result<()> {
                    builder.$write(*self)
                }
            }

            impl<'a> Decode<'a> for $ty {
                fn decode(parser: &mut Parser<'a>) -> Result<Self> {
                    parser.$read()
                }
            }
        )*
    };
}

primitive! {
    u8 => write_u8, read_u8;
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    i8 => write_i8, read_i8;
    i16 => write_i16, read_i16;
    i32 => write_i32, read_i32;
    f32 => write_f32, read_f32;
    f64 => write_f64, read_f64;
    bool => write_bool, read_bool;
}

impl Encode for str {
    fn encode(&self, builder: &mut Builder) -> Result<()> {
        builder.write_str(self)
    }
}

impl Encode for String {
    fn encode(&self, builder: &mut Builder) -> Result<()> {
        builder.write_str(self)
    }
}

/// Slices encode as blobs; decoding needs a length, so use
/// [`Parser::read_blob`] instead.
impl Encode for [u8] {
    fn encode(&self, builder: &mut Builder) -> Result<()> {
        builder.write_blob(self)
    }
}

impl<'a> Decode<'a> for &'a str {
    fn decode(parser: &mut Parser<'a>) -> Result<Self> {
        parser.read_str()
    }
}

impl<'a> Decode<'a> for String {
    fn decode(parser: &mut Parser<'a>) -> Result<Self> {
        parser.read_str().map(str::to_owned)
    }
}
