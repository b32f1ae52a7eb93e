//! Error types for OxiHuff operations.
//!
//! Every failure in the codec is reported through [`OxiHuffError`]. Misuse of
//! the API (empty input, out-of-range bit indices) and malformed bitstreams
//! are both recoverable errors, so callers can reject untrusted input without
//! aborting.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No Huffman tree can be built from an empty buffer.
    #[error("Empty input: cannot build a Huffman tree from zero bytes")]
    EmptyInput,

    /// Bit index past the end of a bit array.
    #[error("Bit index {index} out of range for bit array of length {len}")]
    BitIndexOutOfRange {
        /// Requested bit index.
        index: usize,
        /// Bit length of the array.
        len: usize,
    },

    /// A literal bit string contained something other than `0` or `1`.
    #[error("Invalid bit string: unexpected {found:?} at position {position}")]
    InvalidBitString {
        /// Character position of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// A byte has no entry in the code table it is being encoded with.
    #[error("No Huffman code for byte {byte:#04x}")]
    MissingCode {
        /// The byte value without a code.
        byte: u8,
    },

    /// The bitstream ended before the structure being read was complete.
    #[error("Unexpected end of bitstream at bit position {bit_position}")]
    UnexpectedEof {
        /// Bit position where the reader ran out.
        bit_position: u64,
    },

    /// The bitstream is structurally invalid.
    #[error("Corrupt stream at bit position {bit_position}: {message}")]
    CorruptStream {
        /// Bit position where corruption was detected.
        bit_position: u64,
        /// Description of the corruption.
        message: String,
    },

    /// The declared output length exceeds the configured limit.
    #[error("Declared output length {declared} exceeds limit {limit}")]
    OutputLimitExceeded {
        /// Length declared by the stream.
        declared: u64,
        /// Maximum allowed output length.
        limit: u64,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create a bit-index-out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::BitIndexOutOfRange { index, len }
    }

    /// Create a missing code error.
    pub fn missing_code(byte: u8) -> Self {
        Self::MissingCode { byte }
    }

    /// Create an unexpected end-of-stream error.
    pub fn unexpected_eof(bit_position: u64) -> Self {
        Self::UnexpectedEof { bit_position }
    }

    /// Create a corrupt stream error.
    pub fn corrupted(bit_position: u64, message: impl Into<String>) -> Self {
        Self::CorruptStream {
            bit_position,
            message: message.into(),
        }
    }

    /// Create an output limit error.
    pub fn output_limit(declared: u64, limit: u64) -> Self {
        Self::OutputLimitExceeded { declared, limit }
    }

    /// Whether this error means the input bitstream is damaged or foreign.
    pub fn is_corrupt_stream(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedEof { .. } | Self::CorruptStream { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiHuffError::corrupted(42, "duplicate leaf");
        assert!(err.to_string().contains("bit position 42"));
        assert!(err.to_string().contains("duplicate leaf"));

        let err = OxiHuffError::missing_code(0xAA);
        assert!(err.to_string().contains("0xaa"));

        let err = OxiHuffError::output_limit(1000, 10);
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_corrupt_stream_classification() {
        assert!(OxiHuffError::unexpected_eof(3).is_corrupt_stream());
        assert!(OxiHuffError::corrupted(0, "bad").is_corrupt_stream());
        assert!(!OxiHuffError::EmptyInput.is_corrupt_stream());
        assert!(!OxiHuffError::out_of_range(9, 8).is_corrupt_stream());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiHuffError = io_err.into();
        assert!(matches!(err, OxiHuffError::Io(_)));
    }
}
