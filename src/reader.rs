//! Payload decoder.

use crate::error::{Error, Result};
use crate::traits::Decode;
use crate::types::{ByteOrder, FALSE_BYTE, STRING_TERMINATOR};

/// Parser reads typed fields from a byte buffer through a forward cursor.
///
/// Reads must follow the same sequence of types the [`Builder`] wrote.
/// A read that would run past the end of the source fails with
/// [`Error::OutOfBounds`] and leaves the cursor where it was, so the
/// parser remains usable after any failed call.
///
/// [`Builder`]: crate::Builder
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    buffer: &'a [u8],
    pos: usize,
    order: ByteOrder,
}

impl<'a> Parser<'a> {
    /// Creates a little-endian parser over a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_order(data, ByteOrder::Little)
    }

    /// Creates a parser with the given byte order.
    pub fn with_order(data: &'a [u8], order: ByteOrder) -> Self {
        Self {
            buffer: data,
            pos: 0,
            order,
        }
    }

    /// Returns the byte order of multi-byte fields.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Returns the whole source buffer.
    pub fn source(&self) -> &'a [u8] {
        self.buffer
    }

    /// Returns the length of the source buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the source buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes remaining.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.pos
    }

    /// Returns true if there is more data to read.
    pub fn has_more(&self) -> bool {
        self.pos < self.buffer.len()
    }

    /// Returns true once every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        !self.has_more()
    }

    /// Moves the cursor back to the start of the source.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Checks if there are enough bytes available.
    fn check_available(&self, needed: usize) -> Result<()> {
        let available = self.remaining();
        if needed > available {
            return Err(Error::out_of_bounds(needed, available));
        }
        Ok(())
    }

    /// Takes the next `length` bytes, advancing past them.
    fn take(&mut self, length: usize) -> Result<&'a [u8]> {
        self.check_available(length)?;
        let bytes = &self.buffer[self.pos..self.pos + length];
        self.pos += length;
        Ok(bytes)
    }

    /// Returns the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8> {
        self.check_available(1)?;
        Ok(self.buffer[self.pos])
    }

    /// Reads an unsigned 8-bit integer.
    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.peek_u8()?;
        self.pos += 1;
        Ok(value)
    }

    /// Reads an unsigned 16-bit integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(self.order.read_u16(bytes))
    }

    /// Reads an unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(self.order.read_u32(bytes))
    }

    /// Reads a signed 8-bit integer.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a signed 16-bit integer.
    pub fn read_i16(&mut self) -> Result<i16> {
        let bytes = self.take(2)?;
        Ok(self.order.read_i16(bytes))
    }

    /// Reads a signed 32-bit integer.
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        Ok(self.order.read_i32(bytes))
    }

    /// Reads a 32-bit float (IEEE 754 binary32).
    pub fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.take(4)?;
        Ok(self.order.read_f32(bytes))
    }

    /// Reads a 64-bit float (IEEE 754 binary64).
    pub fn read_f64(&mut self) -> Result<f64> {
        let bytes = self.take(8)?;
        Ok(self.order.read_f64(bytes))
    }

    /// Reads a boolean. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != FALSE_BYTE)
    }

    /// Reads a zero-terminated UTF-8 string.
    ///
    /// A missing terminator is an [`Error::OutOfBounds`] and consumes
    /// nothing. Invalid UTF-8 fails with [`Error::InvalidEncoding`], but
    /// the cursor still moves past the terminator: the field was well
    /// delimited, only its content was bad.
    pub fn read_str(&mut self) -> Result<&'a str> {
        let rest = &self.buffer[self.pos..];
        let length = rest
            .iter()
            .position(|&b| b == STRING_TERMINATOR)
            .ok_or_else(|| Error::out_of_bounds(rest.len() + 1, rest.len()))?;

        let bytes = &rest[..length];
        self.pos += length + 1;
        Ok(std::str::from_utf8(bytes)?)
    }

    /// Reads a blob of exactly `length` bytes.
    pub fn read_blob(&mut self, length: usize) -> Result<&'a [u8]> {
        self.take(length)
    }

    /// Reads every remaining byte. Returns an empty slice when exhausted.
    pub fn read_tail(&mut self) -> &'a [u8] {
        let rest = &self.buffer[self.pos..];
        self.pos = self.buffer.len();
        rest
    }

    /// Reads any value implementing [`Decode`].
    pub fn get<T: Decode<'a>>(&mut self) -> Result<T> {
        T::decode(self)
    }
}
