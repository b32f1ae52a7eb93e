//! # OxiHuff Core
//!
//! Core components for the OxiHuff compression library.
//!
//! This crate provides the fundamental building blocks for the codec:
//!
//! - [`bitarray`]: Growable bit-addressable buffer and its sequential reader
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Tools                                               │
//! │     oxihuff CLI (compress, extract, test, info)        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Tree builder, code table, length + payload codecs  │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Bits (this crate)                                   │
//! │     BitArray / BitArrayReader, OxiHuffError            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::BitArray;
//!
//! let code = BitArray::from_bit_str("0110").unwrap();
//! let mut reader = code.reader();
//! assert!(!reader.read_bit().unwrap());
//! assert_eq!(reader.read_bits(3).unwrap(), 0b110);
//! assert!(reader.is_final());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitarray;
pub mod error;

// Re-exports for convenience
pub use bitarray::{BitArray, BitArrayReader};
pub use error::{OxiHuffError, Result};
