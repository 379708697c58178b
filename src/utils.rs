//! Utility functions for big-endian field reads and BCD decoding.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{IfoError, Result};

/// Bounds-checked big-endian reader over an immutable byte buffer.
///
/// All IFO structures address fields by absolute offset, so unlike a cursor
/// the view carries no position of its own.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Absolute offset `base + delta`, failing when the sum does not fit in
    /// `usize`.
    #[inline]
    pub fn at(&self, base: usize, delta: usize) -> Result<usize> {
        base.checked_add(delta).ok_or(IfoError::TruncatedData {
            offset: base,
            len: delta,
            available: self.data.len(),
        })
    }

    /// Raw slice of `len` bytes starting at `offset`.
    #[inline]
    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(IfoError::TruncatedData {
                offset,
                len,
                available: self.data.len(),
            })
    }

    #[inline]
    pub fn u8(&self, offset: usize) -> Result<u8> {
        Ok(self.bytes(offset, 1)?[0])
    }

    #[inline]
    pub fn u16(&self, offset: usize) -> Result<u16> {
        Ok(BigEndian::read_u16(self.bytes(offset, 2)?))
    }

    #[inline]
    pub fn u32(&self, offset: usize) -> Result<u32> {
        Ok(BigEndian::read_u32(self.bytes(offset, 4)?))
    }

    #[inline]
    pub fn u64(&self, offset: usize) -> Result<u64> {
        Ok(BigEndian::read_u64(self.bytes(offset, 8)?))
    }

    /// Fixed-length Latin-1 run, decoded verbatim (no trimming).
    pub fn string(&self, offset: usize, len: usize) -> Result<String> {
        Ok(self.bytes(offset, len)?.iter().map(|&b| b as char).collect())
    }
}

/// Decode one packed BCD byte to its decimal value.
#[inline]
pub fn bcd(byte: u8) -> u8 {
    (byte & 0x0F) + (byte >> 4) * 10
}

/// Trim the space/NUL padding used by fixed-width text fields.
#[inline]
pub fn trim_padding(text: &str) -> &str {
    text.trim_end_matches([' ', '\0'])
}
