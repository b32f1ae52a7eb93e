//! Self-delimiting length field.
//!
//! The decoded length is stored as groups of 7 value bits, least significant
//! group first. Each group is led by a continuation flag:
//!
//! ```text
//! c vvvvvvv   c = 1: another group follows
//!             c = 0: last group
//! ```
//!
//! Value bits are MSB-first within a group. Zero takes 8 bits; `u64::MAX`
//! takes 80.

use log::trace;
use oxihuff_core::bitarray::{BitArray, BitArrayReader};
use oxihuff_core::error::{OxiHuffError, Result};

/// Value bits per group.
const GROUP_BITS: u8 = 7;
/// Mask for one group of value bits.
const GROUP_MASK: u64 = (1 << GROUP_BITS) - 1;
/// Groups needed for a `u64`.
const MAX_GROUPS: u32 = u64::BITS.div_ceil(GROUP_BITS as u32);

/// Append `value` to `out`.
pub fn encode_length(out: &mut BitArray, mut value: u64) {
    loop {
        let group = (value & GROUP_MASK) as u32;
        value >>= GROUP_BITS;

        out.append(value != 0);
        out.append_bits(group, GROUP_BITS);

        if value == 0 {
            break;
        }
    }
}

/// Number of bits [`encode_length`] appends for `value`.
pub fn encoded_length_bits(value: u64) -> usize {
    let significant = (u64::BITS - value.leading_zeros()).max(1);
    significant.div_ceil(GROUP_BITS as u32) as usize * (GROUP_BITS as usize + 1)
}

/// Read a value written by [`encode_length`].
///
/// # Errors
///
/// `UnexpectedEof` if the reader runs out, `CorruptStream` if the field is
/// longer than any `u64` needs or sets bits past bit 63.
pub fn decode_length(reader: &mut BitArrayReader<'_>) -> Result<u64> {
    let start = reader.bit_position();
    let mut value = 0u64;

    for index in 0..MAX_GROUPS {
        let more = reader.read_bit()?;
        let group = reader.read_bits(GROUP_BITS)? as u64;

        let shift = index * GROUP_BITS as u32;
        if shift + GROUP_BITS as u32 > u64::BITS && group >> (u64::BITS - shift) != 0 {
            return Err(OxiHuffError::corrupted(start, "length field overflows 64 bits"));
        }
        value |= group << shift;

        if !more {
            trace!(
                "decoded length {} from {} bits",
                value,
                reader.bit_position() - start
            );
            return Ok(value);
        }
    }

    Err(OxiHuffError::corrupted(
        start,
        format!("length field runs past {MAX_GROUPS} groups"),
    ))
}
