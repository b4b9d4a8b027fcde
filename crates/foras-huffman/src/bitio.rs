//! Bit-level reading and writing over byte buffers.
//!
//! Bits are packed MSB-first within each byte: the first bit written lands
//! in bit 7 of the first output byte. Multi-byte integers are big-endian
//! and byte-aligned; the codec only uses them for the frequency-table
//! header, which precedes all bit-level traffic.

use foras_core::{Error, Result};

/// Bit writer producing an MSB-first packed byte buffer.
pub struct BitWriter {
    data: Vec<u8>,
    /// Partial byte being filled, bits accumulating from the high end.
    current: u8,
    /// Number of bits currently held in `current` (0..8).
    used: u8,
}

impl BitWriter {
    /// Create a new bit writer.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            current: 0,
            used: 0,
        }
    }

    /// Create with capacity (in bytes).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            current: 0,
            used: 0,
        }
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current = (self.current << 1) | bit as u8;
        self.used += 1;

        if self.used == 8 {
            self.data.push(self.current);
            self.current = 0;
            self.used = 0;
        }
    }

    /// Write the low `n` bits of `value`, most significant first.
    #[inline]
    pub fn write_bits(&mut self, value: u64, n: u8) {
        for i in (0..n).rev() {
            self.write_bit((value >> i) & 1 == 1);
        }
    }

    /// Pad the current byte with zero bits up to the next boundary.
    pub fn align(&mut self) {
        if self.used > 0 {
            self.data.push(self.current << (8 - self.used));
            self.current = 0;
            self.used = 0;
        }
    }

    /// Write a raw byte (aligns first).
    pub fn write_byte(&mut self, byte: u8) {
        self.align();
        self.data.push(byte);
    }

    /// Write a 32-bit big-endian value (aligns first).
    pub fn write_u32(&mut self, value: u32) {
        self.align();
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    /// Flush the trailing partial byte (zero-padded) and return the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        self.align();
        self.data
    }

    /// Get current length in bytes, counting any partial byte.
    pub fn len(&self) -> usize {
        self.data.len() + if self.used > 0 { 1 } else { 0 }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.used == 0
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit reader over an MSB-first packed byte buffer.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Index of the next unread byte.
    pos: usize,
    /// Remainder of the byte being consumed, left-shifted as bits are read.
    current: u8,
    /// Number of bits still available in `current` (0..8).
    bits_left: u8,
}

impl<'a> BitReader<'a> {
    /// Create a new bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            current: 0,
            bits_left: 0,
        }
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.bits_left == 0 {
            if self.pos >= self.data.len() {
                return Err(Error::unexpected_eof(self.pos));
            }
            self.current = self.data[self.pos];
            self.pos += 1;
            self.bits_left = 8;
        }

        let bit = self.current & 0x80 != 0;
        self.current <<= 1;
        self.bits_left -= 1;
        Ok(bit)
    }

    /// Check whether at least one more bit is available.
    #[inline]
    pub fn has_next_bit(&self) -> bool {
        self.bits_left > 0 || self.pos < self.data.len()
    }

    /// Read a raw byte. Must be at a byte boundary.
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.bits_left != 0 {
            return Err(Error::corrupted_at("unaligned byte read", self.pos));
        }
        if self.pos >= self.data.len() {
            return Err(Error::unexpected_eof(self.pos));
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Read a 32-bit big-endian value. Must be at a byte boundary.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        for slot in &mut buf {
            *slot = self.read_byte()?;
        }
        Ok(u32::from_be_bytes(buf))
    }

    /// Number of bytes consumed so far, counting a partially read byte.
    pub fn byte_pos(&self) -> usize {
        self.pos
    }

    /// Check if all input has been consumed.
    pub fn is_empty(&self) -> bool {
        !self.has_next_bit()
    }
}
