//! Growable bit-addressable buffers.
//!
//! This module provides [`BitArray`], an append-only sequence of bits backed
//! by a byte buffer, and [`BitArrayReader`], a forward-only cursor over it.
//! Every OxiHuff bitstream (serialized tree, length field and payload) is
//! assembled in a `BitArray` and parsed back through a `BitArrayReader`.
//!
//! # Bit Ordering
//!
//! Bits are packed MSB-first (Most Significant Bit first) within each byte:
//! bit `i` of the array lives in byte `i / 8` under mask `0x80 >> (i % 8)`.
//! Multi-bit values (bytes, bit groups) are appended most significant bit
//! first as well, so the packed bytes of an array holding whole bytes read
//! back exactly as those bytes.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitarray::BitArray;
//!
//! let mut bits = BitArray::new();
//! bits.append(true);
//! bits.append_byte(b'a');
//! assert_eq!(bits.len(), 9);
//! assert_eq!(bits.get_byte(1).unwrap(), b'a');
//!
//! let mut reader = bits.reader();
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(reader.read_byte().unwrap(), b'a');
//! assert!(reader.is_final());
//! ```

use crate::error::{OxiHuffError, Result};
use std::fmt;

/// Storage allocated on the first append, in bytes.
const INITIAL_CAPACITY: usize = 8;

/// An append-only, growable sequence of bits.
///
/// Storage doubles whenever an append would overflow it. Bits past
/// [`len`](Self::len) are always zero.
#[derive(Clone, Default)]
pub struct BitArray {
    /// Backing storage; its length is the allocated capacity in bytes.
    bytes: Vec<u8>,
    /// Number of valid bits.
    len: usize,
}

impl BitArray {
    /// Create an empty bit array.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty bit array with room for at least `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: vec![0; bits.div_ceil(8)],
            len: 0,
        }
    }

    /// Create a bit array from packed MSB-first bytes, keeping `bit_len` bits.
    ///
    /// Fails if `bit_len` exceeds the bits available in `bytes`. Bits past
    /// `bit_len` are cleared.
    pub fn from_bytes(mut bytes: Vec<u8>, bit_len: usize) -> Result<Self> {
        let available = bytes.len() * 8;
        if bit_len > available {
            return Err(OxiHuffError::out_of_range(bit_len, available));
        }

        let used = bit_len.div_ceil(8);
        for byte in &mut bytes[used..] {
            *byte = 0;
        }
        let tail = bit_len % 8;
        if tail != 0 {
            bytes[used - 1] &= 0xFF << (8 - tail);
        }

        Ok(Self {
            bytes,
            len: bit_len,
        })
    }

    /// Create a bit array from a literal string of `0` and `1` characters.
    ///
    /// Intended for tests and debugging, e.g. `BitArray::from_bit_str("0110")`.
    pub fn from_bit_str(bits: &str) -> Result<Self> {
        let mut array = Self::with_capacity(bits.len());
        for (position, c) in bits.chars().enumerate() {
            match c {
                '0' => array.append(false),
                '1' => array.append(true),
                found => return Err(OxiHuffError::InvalidBitString { position, found }),
            }
        }
        Ok(array)
    }

    /// Number of valid bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the array holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated capacity in bits.
    pub fn capacity_bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Make room for one more bit, doubling storage when full.
    #[inline]
    fn reserve_bit(&mut self) {
        if self.len == self.capacity_bits() {
            let new_len = (self.bytes.len() * 2).max(INITIAL_CAPACITY);
            self.bytes.resize(new_len, 0);
        }
    }

    /// Read a bit known to be in range.
    #[inline]
    fn bit(&self, index: usize) -> bool {
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }

    /// Append a single bit.
    #[inline]
    pub fn append(&mut self, bit: bool) {
        self.reserve_bit();
        if bit {
            self.bytes[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Append the eight bits of `byte`, most significant first.
    pub fn append_byte(&mut self, byte: u8) {
        self.append_bits(byte as u32, 8);
    }

    /// Append the low `count` bits of `value`, most significant first.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to append
    /// * `count` - Number of bits to append (0-32)
    pub fn append_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "Cannot append more than 32 bits at once");

        for shift in (0..count).rev() {
            self.append((value >> shift) & 1 != 0);
        }
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &BitArray) {
        for bit in other.iter() {
            self.append(bit);
        }
    }

    /// Get the bit at `index`.
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(OxiHuffError::out_of_range(index, self.len));
        }
        Ok(self.bit(index))
    }

    /// Get the 8 bits starting at `index`, reassembled MSB-first.
    pub fn get_byte(&self, index: usize) -> Result<u8> {
        let end = index.saturating_add(8);
        if end > self.len {
            return Err(OxiHuffError::out_of_range(end - 1, self.len));
        }

        let byte = (index..end).fold(0u8, |acc, i| (acc << 1) | self.bit(i) as u8);
        Ok(byte)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bit(i))
    }

    /// The packed bytes, padded with zero bits to a byte boundary.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len.div_ceil(8)]
    }

    /// Consume the array and return its packed, zero-padded bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bytes.truncate(self.len.div_ceil(8));
        self.bytes
    }

    /// Create a reader positioned at the first bit.
    pub fn reader(&self) -> BitArrayReader<'_> {
        BitArrayReader::new(self)
    }
}

impl From<Vec<u8>> for BitArray {
    /// Wrap packed bytes, treating every bit as valid.
    fn from(bytes: Vec<u8>) -> Self {
        let len = bytes.len() * 8;
        Self { bytes, len }
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        // Bits past `len` are zero, so packed bytes decide equality.
        self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for BitArray {}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitArray({:?})", self.to_string())
    }
}

/// A forward-only cursor over a [`BitArray`].
///
/// The reader borrows its array, so the array always outlives it.
#[derive(Debug, Clone)]
pub struct BitArrayReader<'a> {
    /// The array being read.
    array: &'a BitArray,
    /// Index of the next bit to read.
    position: usize,
}

impl<'a> BitArrayReader<'a> {
    /// Create a reader at the start of `array`.
    pub fn new(array: &'a BitArray) -> Self {
        Self { array, position: 0 }
    }

    /// Index of the next bit to read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current bit position (for error reporting).
    pub fn bit_position(&self) -> u64 {
        self.position as u64
    }

    /// Number of bits left to read.
    pub fn remaining(&self) -> usize {
        self.array.len() - self.position
    }

    /// Check if every bit has been read.
    pub fn is_final(&self) -> bool {
        self.position == self.array.len()
    }

    /// Read the next bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.is_final() {
            return Err(OxiHuffError::unexpected_eof(self.bit_position()));
        }
        let bit = self.array.bit(self.position);
        self.position += 1;
        Ok(bit)
    }

    /// Read up to 32 bits, most significant first.
    ///
    /// Fails without consuming anything if fewer than `count` bits remain.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        if self.remaining() < count as usize {
            return Err(OxiHuffError::unexpected_eof(self.array.len() as u64));
        }

        let value = (0..count as usize).fold(0u32, |acc, i| {
            (acc << 1) | self.array.bit(self.position + i) as u32
        });
        self.position += count as usize;
        Ok(value)
    }

    /// Read the next 8 bits as a byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }
}
