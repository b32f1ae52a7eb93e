//! Payload encoding and decoding.

use crate::codes::CodeTable;
use crate::node::HuffNode;
use oxihuff_core::bitarray::{BitArray, BitArrayReader};
use oxihuff_core::error::{OxiHuffError, Result};

/// Append the code of every byte of `src`, in order, to `out`.
///
/// # Errors
///
/// Returns `MissingCode` for a byte the table has no code for. This cannot
/// happen when the table was built from a tree over `src`.
pub fn encode_payload(src: &[u8], codes: &CodeTable, out: &mut BitArray) -> Result<()> {
    for &byte in src {
        let code = codes.get(byte).ok_or(OxiHuffError::missing_code(byte))?;
        out.extend_from(code);
    }
    Ok(())
}

/// Decode `len` symbols from `reader` by walking `tree`.
///
/// A lone-leaf tree consumes one `0` bit per symbol, matching the code
/// [`CodeTable`] assigns it.
///
/// # Errors
///
/// `UnexpectedEof` if the reader runs out before `len` symbols, and
/// `CorruptStream` if a lone-leaf stream holds a `1` bit.
pub fn decode_payload(
    reader: &mut BitArrayReader<'_>,
    tree: &HuffNode,
    len: usize,
) -> Result<Vec<u8>> {
    // Every symbol takes at least one bit, so a hostile length cannot force
    // an allocation larger than the input.
    let mut output = Vec::with_capacity(len.min(reader.remaining()));

    if let HuffNode::Leaf { value, .. } = tree {
        for _ in 0..len {
            let position = reader.bit_position();
            if reader.read_bit()? {
                return Err(OxiHuffError::corrupted(
                    position,
                    "unexpected 1 bit in single-symbol payload",
                ));
            }
            output.push(*value);
        }
        return Ok(output);
    }

    for _ in 0..len {
        let mut node = tree;
        loop {
            match node {
                HuffNode::Leaf { value, .. } => {
                    output.push(*value);
                    break;
                }
                HuffNode::Internal { left, right, .. } => {
                    node = if reader.read_bit()? { &**right } else { &**left };
                }
            }
        }
    }

    Ok(output)
}
