//! Payload encoder.

use crate::error::{Error, Result};
use crate::traits::Encode;
use crate::types::{ByteOrder, FALSE_BYTE, STRING_TERMINATOR, TRUE_BYTE};

const INITIAL_CAPACITY: usize = 64;

/// Builder appends typed fields to a growable byte buffer.
///
/// Fields carry no tags or length prefixes; the reader must know the
/// schema. Multi-byte fields use the byte order fixed at construction.
///
/// The buffer only grows: there is no way to rewrite or truncate bytes
/// already appended. A failed write appends nothing.
#[derive(Debug, Clone)]
pub struct Builder {
    buffer: Vec<u8>,
    order: ByteOrder,
}

impl Builder {
    /// Creates a little-endian builder with default capacity.
    pub fn new() -> Self {
        Self::with_order(ByteOrder::Little)
    }

    /// Creates a builder with the given byte order.
    pub fn with_order(order: ByteOrder) -> Self {
        Self::with_capacity(order, INITIAL_CAPACITY)
    }

    /// Creates a builder with the given byte order and buffer capacity.
    pub fn with_capacity(order: ByteOrder, capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the byte order of multi-byte fields.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the encoded bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the builder and returns the finished payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Writes an unsigned 8-bit integer.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.buffer.push(value);
        Ok(())
    }

    /// Writes an unsigned 16-bit integer.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.buffer.extend_from_slice(&self.order.write_u16(value));
        Ok(())
    }

    /// Writes an unsigned 32-bit integer.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.buffer.extend_from_slice(&self.order.write_u32(value));
        Ok(())
    }

    /// Writes a signed 8-bit integer.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.buffer.push(value as u8);
        Ok(())
    }

    /// Writes a signed 16-bit integer.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.buffer.extend_from_slice(&self.order.write_i16(value));
        Ok(())
    }

    /// Writes a signed 32-bit integer.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.buffer.extend_from_slice(&self.order.write_i32(value));
        Ok(())
    }

    /// Writes a 32-bit float (IEEE 754 binary32).
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.buffer.extend_from_slice(&self.order.write_f32(value));
        Ok(())
    }

    /// Writes a 64-bit float (IEEE 754 binary64).
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.buffer.extend_from_slice(&self.order.write_f64(value));
        Ok(())
    }

    /// Writes a boolean as a single 0x01 or 0x00 byte.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(if value { TRUE_BYTE } else { FALSE_BYTE })
    }

    /// Writes a zero-terminated UTF-8 string.
    ///
    /// Strings containing a NUL byte are rejected, since the terminator
    /// marks the end of the field.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        if let Some(offset) = value.bytes().position(|b| b == STRING_TERMINATOR) {
            return Err(Error::invalid_encoding(format!(
                "string contains NUL at byte {}",
                offset
            )));
        }
        self.buffer.reserve(value.len() + 1);
        self.buffer.extend_from_slice(value.as_bytes());
        self.buffer.push(STRING_TERMINATOR);
        Ok(())
    }

    /// Writes raw bytes as a zero-terminated string after checking they are UTF-8.
    pub fn write_str_bytes(&mut self, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)?;
        self.write_str(text)
    }

    /// Writes raw bytes verbatim, with no length prefix or terminator.
    pub fn write_blob(&mut self, data: &[u8]) -> Result<()> {
        self.buffer.extend_from_slice(data);
        Ok(())
    }

    /// Writes any value implementing [`Encode`].
    pub fn put<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.encode(self)
    }

    /// Writes an unsigned 8-bit integer, rejecting values outside `0..=255`.
    pub fn try_u8(&mut self, value: i64) -> Result<()> {
        self.write_u8(narrow(value, "u8")?)
    }

    /// Writes an unsigned 16-bit integer, rejecting out-of-range values.
    pub fn try_u16(&mut self, value: i64) -> Result<()> {
        self.write_u16(narrow(value, "u16")?)
    }

    /// Writes an unsigned 32-bit integer, rejecting out-of-range values.
    pub fn try_u32(&mut self, value: i64) -> Result<()> {
        self.write_u32(narrow(value, "u32")?)
    }

    /// Writes a signed 8-bit integer, rejecting out-of-range values.
    pub fn try_i8(&mut self, value: i64) -> Result<()> {
        self.write_i8(narrow(value, "i8")?)
    }

    /// Writes a signed 16-bit integer, rejecting out-of-range values.
    pub fn try_i16(&mut self, value: i64) -> Result<()> {
        self.write_i16(narrow(value, "i16")?)
    }

    /// Writes a signed 32-bit integer, rejecting out-of-range values.
    pub fn try_i32(&mut self, value: i64) -> Result<()> {
        self.write_i32(narrow(value, "i32")?)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

fn narrow<T: TryFrom<i64>>(value: i64, target: &'static str) -> Result<T> {
    T::try_from(value).map_err(|_| Error::value_out_of_range(value, target))
}
