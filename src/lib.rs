//! Payload codec - byte-order aware binary payload builder and parser.
//!
//! The wire format is a flat sequence of fields with no header, tags or
//! length prefixes. Producer and consumer must agree on the byte order
//! and on the exact sequence of field types.
//!
//! # Example
//!
//! ```rust
//! use payload_codec::{Builder, ByteOrder, Parser, Result};
//!
//! fn main() -> Result<()> {
//!     // Encoding
//!     let mut builder = Builder::with_order(ByteOrder::Big);
//!     builder.write_u32(0x01020304)?;
//!     builder.write_str("hi")?;
//!     builder.write_blob(&[0xaa, 0xbb])?;
//!     let data = builder.into_bytes();
//!     assert_eq!(data, [1, 2, 3, 4, b'h', b'i', 0, 0xaa, 0xbb]);
//!
//!     // Decoding
//!     let mut parser = Parser::with_order(&data, ByteOrder::Big);
//!     assert_eq!(parser.read_u32()?, 0x01020304);
//!     assert_eq!(parser.read_str()?, "hi");
//!     assert_eq!(parser.read_tail(), &[0xaa, 0xbb]);
//!     Ok(())
//! }
//! ```

mod error;
mod reader;
mod traits;
mod types;
mod writer;

pub use error::{Error, Result};
pub use reader::Parser;
pub use traits::{Decode, Encode};
pub use types::{ByteOrder, FALSE_BYTE, STRING_TERMINATOR, TRUE_BYTE};
pub use writer::Builder;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a payload with the given byte order using a closure.
pub fn build<F>(order: ByteOrder, fields: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut Builder) -> Result<()>,
{
    let mut builder = Builder::with_order(order);
    fields(&mut builder)?;
    Ok(builder.into_bytes())
}

/// Parses a payload with the given byte order using a closure.
pub fn parse<'a, T, F>(data: &'a [u8], order: ByteOrder, fields: F) -> Result<T>
where
    F: FnOnce(&mut Parser<'a>) -> Result<T>,
{
    let mut parser = Parser::with_order(data, order);
    fields(&mut parser)
}

/// Encodes a single value into a new payload.
pub fn to_bytes<T: Encode + ?Sized>(value: &T, order: ByteOrder) -> Result<Vec<u8>> {
    build(order, |builder| builder.put(value))
}

/// Decodes a single value from the start of a payload.
pub fn from_bytes<'a, T: Decode<'a>>(data: &'a [u8], order: ByteOrder) -> Result<T> {
    parse(data, order, |parser| parser.get())
}
