//! # OxiHuff
//!
//! Pure Rust Huffman compression with a self-describing bitstream.
//!
//! The compressor counts byte frequencies, builds an optimal prefix-code tree,
//! and writes the tree, the input length and the encoded payload as one
//! contiguous bit sequence. The decompressor needs nothing but that sequence.
//!
//! ## Stream Layout
//!
//! ```text
//! ┌──────────────────────┬──────────────────────┬──────────────────┬─────────┐
//! │ tree (preorder)      │ length (7-bit groups)│ payload (codes)  │ padding │
//! │ 0 = internal         │ continuation bit +   │ one code per     │ 0-7     │
//! │ 1 + 8 bits = leaf    │ 7 value bits, LSG    │ input byte       │ zeros   │
//! └──────────────────────┴──────────────────────┴──────────────────┴─────────┘
//! ```
//!
//! Bits are packed MSB-first. The format is private to this crate and is not
//! compatible with DEFLATE or any other standard Huffman format.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff::{compress, extract};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original).unwrap();
//! let decompressed = extract(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Building Blocks
//!
//! The pipeline stages are public for callers that want to work with trees
//! and codes directly:
//!
//! ```rust
//! use oxihuff::{BitArray, CodeTable, build_tree, encode_payload};
//!
//! let tree = build_tree(b"aaabbc").unwrap();
//! let codes = CodeTable::from_tree(&tree);
//! assert_eq!(codes.get(b'a').unwrap().len(), 1);
//!
//! let mut bits = BitArray::new();
//! encode_payload(b"aaabbc", &codes, &mut bits).unwrap();
//! assert_eq!(bits.len(), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod codes;
pub mod config;
pub mod frequency;
pub mod length;
pub mod node;
pub mod payload;

pub use builder::{build_tree, build_tree_from_frequencies};
pub use codes::CodeTable;
pub use config::ExtractOptions;
pub use frequency::Frequencies;
pub use length::{decode_length, encode_length};
pub use node::HuffNode;
pub use payload::{decode_payload, encode_payload};

pub use oxihuff_core::{BitArray, BitArrayReader, OxiHuffError, Result};

use log::{debug, warn};

/// Compress `src` into a self-describing Huffman bitstream.
///
/// # Errors
///
/// Returns [`OxiHuffError::EmptyInput`] if `src` is empty.
///
/// # Example
///
/// ```rust
/// use oxihuff::compress;
///
/// let compressed = compress(&[0xAA; 10]).unwrap();
/// // 9-bit tree, 8-bit length, one bit per symbol.
/// assert_eq!(compressed.len(), 4);
/// ```
pub fn compress(src: &[u8]) -> Result<Vec<u8>> {
    let tree = build_tree(src)?;
    let codes = CodeTable::from_tree(&tree);
    let declared = src.len() as u64;

    let mut out = BitArray::with_capacity(
        tree.serialized_bits() + length::encoded_length_bits(declared) + src.len() * 8,
    );
    tree.serialize(&mut out);
    let tree_bits = out.len();
    encode_length(&mut out, declared);
    let header_bits = out.len();
    encode_payload(src, &codes, &mut out)?;

    debug!(
        "compressed {} bytes: {} symbols, tree {} bits, length {} bits, payload {} bits",
        src.len(),
        codes.len(),
        tree_bits,
        header_bits - tree_bits,
        out.len() - header_bits
    );

    Ok(out.into_bytes())
}

/// Decompress a stream produced by [`compress`].
///
/// No output limit is applied, so `extract(&compress(x)?)` returns `x` for
/// every non-empty `x`. Use [`extract_with`] to bound the output size.
///
/// # Errors
///
/// Stream-corruption errors ([`OxiHuffError::is_corrupt_stream`]) for
/// truncated or malformed input.
pub fn extract(compressed: &[u8]) -> Result<Vec<u8>> {
    extract_with(compressed, &ExtractOptions::UNLIMITED)
}

/// Decompress a stream produced by [`compress`] with explicit limits.
///
/// # Example
///
/// ```rust
/// use oxihuff::{ExtractOptions, OxiHuffError, compress, extract_with};
///
/// let compressed = compress(b"hello, world").unwrap();
/// let options = ExtractOptions::with_max_output_len(4);
/// assert!(matches!(
///     extract_with(&compressed, &options),
///     Err(OxiHuffError::OutputLimitExceeded { declared: 12, limit: 4 })
/// ));
/// ```
pub fn extract_with(compressed: &[u8], options: &ExtractOptions) -> Result<Vec<u8>> {
    let bits = BitArray::from(compressed.to_vec());
    let mut reader = bits.reader();

    let result = decode_stream(&mut reader, options);

    match &result {
        Ok(output) => debug!(
            "extracted {} bytes from {} compressed bytes",
            output.len(),
            compressed.len()
        ),
        Err(e) => warn!("rejected compressed stream: {}", e),
    }

    result
}

fn decode_stream(
    reader: &mut BitArrayReader<'_>,
    options: &ExtractOptions,
) -> Result<Vec<u8>> {
    let tree = HuffNode::deserialize(reader)?;
    let declared = decode_length(reader)?;

    if let Some(limit) = options.exceeded_by(declared) {
        return Err(OxiHuffError::output_limit(declared, limit));
    }
    let len = usize::try_from(declared)
        .map_err(|_| OxiHuffError::output_limit(declared, usize::MAX as u64))?;

    decode_payload(reader, &tree, len)
}

/// Header facts about a compressed stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamInfo {
    /// Number of distinct byte values (tree leaves).
    pub symbols: usize,
    /// Edges on the longest root-to-leaf path (0 for a single-symbol tree).
    pub tree_depth: usize,
    /// Longest code length in bits. A single-symbol tree still uses a
    /// one-bit code.
    pub max_code_len: usize,
    /// Bits taken by the serialized tree.
    pub tree_bits: usize,
    /// Bits taken by the length field.
    pub length_bits: usize,
    /// Bits following the header: payload plus padding.
    pub payload_bits: usize,
    /// Original input length declared by the stream.
    pub declared_len: u64,
    /// Size of the compressed stream in bytes.
    pub compressed_len: usize,
}

impl StreamInfo {
    /// Compressed size as a fraction of the declared original size.
    pub fn ratio(&self) -> f64 {
        if self.declared_len == 0 {
            return 0.0;
        }
        self.compressed_len as f64 / self.declared_len as f64
    }
}

/// Parse the tree and length field of a compressed stream without decoding
/// the payload.
///
/// # Example
///
/// ```rust
/// use oxihuff::{compress, inspect};
///
/// let info = inspect(&compress(b"aaabbc").unwrap()).unwrap();
/// assert_eq!(info.symbols, 3);
/// assert_eq!(info.declared_len, 6);
/// assert_eq!(info.tree_bits, 29);
/// ```
pub fn inspect(compressed: &[u8]) -> Result<StreamInfo> {
    let bits = BitArray::from(compressed.to_vec());
    let mut reader = bits.reader();

    let tree = HuffNode::deserialize(&mut reader)?;
    let tree_bits = reader.position();
    let declared_len = decode_length(&mut reader)?;
    let length_bits = reader.position() - tree_bits;

    Ok(StreamInfo {
        symbols: tree.leaf_count(),
        tree_depth: tree.depth(),
        max_code_len: tree.depth().max(1),
        tree_bits,
        length_bits,
        payload_bits: reader.remaining(),
        declared_len,
        compressed_len: compressed.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_hello() {
        let data = b"Hello, world!\0";
        let compressed = compress(data).unwrap();
        assert_eq!(extract(&compressed).unwrap(), data);
    }

    #[test]
    fn test_roundtrip_numbers() {
        let data = b"20\n15\n10\n1\n-12";
        let compressed = compress(data).unwrap();
        assert_eq!(extract(&compressed).unwrap(), data);
    }

    #[test]
    fn test_roundtrip_single_byte_value() {
        let data = [0xAA; 10];
        let compressed = compress(&data).unwrap();
        // tree 9 + length 8 + payload 10 = 27 bits
        assert_eq!(compressed.len(), 4);
        assert_eq!(extract(&compressed).unwrap(), data);
    }

    #[test]
    fn test_roundtrip_one_byte() {
        let compressed = compress(b"x").unwrap();
        assert_eq!(extract(&compressed).unwrap(), b"x");
    }

    #[test]
    fn test_compress_empty() {
        assert!(matches!(compress(&[]), Err(OxiHuffError::EmptyInput)));
    }

    #[test]
    fn test_exact_stream_for_aaabbc() {
        // Tree: 0 1'a' 0 1'c' 1'b' (29 bits), length 6 (8 bits),
        // payload a=0 c=10 b=11: 0 0 0 11 11 10 (9 bits), 2 bits padding.
        let expected = [
            "0",
            "101100001",
            "0",
            "101100011",
            "101100010",
            "00000110",
            "000111110",
            "00",
        ]
        .concat();
        let compressed = compress(b"aaabbc").unwrap();
        let bits = BitArray::from(compressed);
        assert_eq!(bits.to_string(), expected);
    }

    #[test]
    fn test_extract_empty_stream() {
        let err = extract(&[]).unwrap_err();
        assert!(err.is_corrupt_stream());
    }

    #[test]
    fn test_extract_limit() {
        let compressed = compress(&[7u8; 100]).unwrap();
        let options = ExtractOptions::with_max_output_len(99);
        assert!(matches!(
            extract_with(&compressed, &options),
            Err(OxiHuffError::OutputLimitExceeded {
                declared: 100,
                limit: 99
            })
        ));
        assert_eq!(
            extract_with(&compressed, &ExtractOptions::UNLIMITED).unwrap(),
            vec![7u8; 100]
        );
    }

    #[test]
    fn test_extract_has_no_output_limit() {
        // Lone leaf 'z' declaring one byte more than the untrusted preset
        // allows, followed by a short run of payload bits.
        let declared = 256 * 1024 * 1024 + 1;
        let mut bits = BitArray::new();
        bits.append(true);
        bits.append_byte(b'z');
        encode_length(&mut bits, declared);
        for _ in 0..64 {
            bits.append(false);
        }
        let stream = bits.into_bytes();

        // Without a limit the decoder runs until the payload is exhausted.
        assert!(matches!(
            extract(&stream),
            Err(OxiHuffError::UnexpectedEof { .. })
        ));
        assert!(matches!(
            extract_with(&stream, &ExtractOptions::UNTRUSTED),
            Err(OxiHuffError::OutputLimitExceeded { declared: d, .. }) if d == declared
        ));
    }

    #[test]
    fn test_inspect_lone_leaf_code_len() {
        let info = inspect(&compress(&[0xAA; 10]).unwrap()).unwrap();
        assert_eq!(info.symbols, 1);
        assert_eq!(info.tree_depth, 0);
        assert_eq!(info.max_code_len, 1);
        assert_eq!(info.payload_bits, 32 - 9 - 8);
    }

    #[test]
    fn test_inspect() {
        let data = b"abracadabra";
        let compressed = compress(data).unwrap();
        let info = inspect(&compressed).unwrap();

        assert_eq!(info.symbols, 5);
        assert_eq!(info.max_code_len, info.tree_depth);
        assert_eq!(info.tree_bits, 49);
        assert_eq!(info.length_bits, 8);
        assert_eq!(info.declared_len, 11);
        assert_eq!(info.compressed_len, compressed.len());
        assert_eq!(
            info.tree_bits + info.length_bits + info.payload_bits,
            compressed.len() * 8
        );
        assert!(info.ratio() > 0.0);
    }
}
