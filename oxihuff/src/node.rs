//! Huffman tree nodes.
//!
//! A [`HuffNode`] is either a leaf carrying one byte value, or an internal
//! node owning exactly two children. Keys are frequencies (weights); an
//! internal node's key is the sum of its children's keys.
//!
//! # Serialized Form
//!
//! Trees serialize in preorder, which makes the stream self-describing:
//!
//! ```text
//! leaf:     1 vvvvvvvv        (flag bit, then the 8-bit value MSB-first)
//! internal: 0 <left> <right>
//! ```
//!
//! A tree with `n` leaves takes `10n - 1` bits. Frequencies are not stored;
//! deserialized nodes carry key 0.

use crate::frequency::ALPHABET_SIZE;
use oxihuff_core::bitarray::{BitArray, BitArrayReader};
use oxihuff_core::error::{OxiHuffError, Result};
use std::cmp::Ordering;

/// Deepest internal-node nesting a valid tree can have.
///
/// A full binary tree over at most 256 distinct leaves is at most 255
/// levels deep, so deserialization rejects anything deeper.
pub const MAX_DEPTH: usize = ALPHABET_SIZE - 1;

/// A node in a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    /// A single byte value and its frequency.
    Leaf {
        /// Occurrence count.
        key: u64,
        /// The byte this leaf stands for.
        value: u8,
    },
    /// Two subtrees and their combined frequency.
    Internal {
        /// Sum of the children's keys.
        key: u64,
        /// Subtree reached by a `0` bit.
        left: Box<HuffNode>,
        /// Subtree reached by a `1` bit.
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    /// Create a leaf.
    pub fn leaf(frequency: u64, value: u8) -> Self {
        HuffNode::Leaf {
            key: frequency,
            value,
        }
    }

    /// Create an internal node owning `left` and `right`.
    pub fn parent(left: HuffNode, right: HuffNode) -> Self {
        HuffNode::Internal {
            key: left.key().saturating_add(right.key()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The node's weight.
    pub fn key(&self) -> u64 {
        match self {
            HuffNode::Leaf { key, .. } | HuffNode::Internal { key, .. } => *key,
        }
    }

    /// The byte value, for leaves.
    pub fn value(&self) -> Option<u8> {
        match self {
            HuffNode::Leaf { value, .. } => Some(*value),
            HuffNode::Internal { .. } => None,
        }
    }

    /// Check if the node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// The `(left, right)` children, for internal nodes.
    pub fn children(&self) -> Option<(&HuffNode, &HuffNode)> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }

    /// Left child (the `0` branch).
    pub fn left(&self) -> Option<&HuffNode> {
        self.children().map(|(left, _)| left)
    }

    /// Right child (the `1` branch).
    pub fn right(&self) -> Option<&HuffNode> {
        self.children().map(|(_, right)| right)
    }

    /// Order two nodes by key, ascending.
    pub fn compare(a: &HuffNode, b: &HuffNode) -> Ordering {
        a.key().cmp(&b.key())
    }

    /// Check the tree invariants.
    ///
    /// Single-child nodes cannot be represented, so this checks that no byte
    /// value appears on more than one leaf.
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; ALPHABET_SIZE];
        self.leaves()
            .into_iter()
            .all(|value| !std::mem::replace(&mut seen[value as usize], true))
    }

    /// Compare shape and leaf values, ignoring keys.
    pub fn structurally_eq(&self, other: &HuffNode) -> bool {
        match (self, other) {
            (HuffNode::Leaf { value: a, .. }, HuffNode::Leaf { value: b, .. }) => a == b,
            (
                HuffNode::Internal {
                    left: l1,
                    right: r1,
                    ..
                },
                HuffNode::Internal {
                    left: l2,
                    right: r2,
                    ..
                },
            ) => l1.structurally_eq(l2) && r1.structurally_eq(r2),
            _ => false,
        }
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path (0 for a lone leaf).
    pub fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Leaf values, left to right.
    pub fn leaves(&self) -> Vec<u8> {
        let mut values = Vec::new();
        self.collect_leaves(&mut values);
        values
    }

    fn collect_leaves(&self, values: &mut Vec<u8>) {
        match self {
            HuffNode::Leaf { value, .. } => values.push(*value),
            HuffNode::Internal { left, right, .. } => {
                left.collect_leaves(values);
                right.collect_leaves(values);
            }
        }
    }

    /// Number of bits [`serialize`](Self::serialize) appends.
    pub fn serialized_bits(&self) -> usize {
        10 * self.leaf_count() - 1
    }

    /// Append the preorder encoding of the tree to `out`.
    pub fn serialize(&self, out: &mut BitArray) {
        match self {
            HuffNode::Leaf { value, .. } => {
                out.append(true);
                out.append_byte(*value);
            }
            HuffNode::Internal { left, right, .. } => {
                out.append(false);
                left.serialize(out);
                right.serialize(out);
            }
        }
    }

    /// Read a tree written by [`serialize`](Self::serialize).
    ///
    /// Fails with `UnexpectedEof` if the reader runs out mid-tree, and with
    /// `CorruptStream` if the tree nests deeper than [`MAX_DEPTH`] or repeats
    /// a leaf value.
    pub fn deserialize(reader: &mut BitArrayReader<'_>) -> Result<HuffNode> {
        let mut seen = [false; ALPHABET_SIZE];
        Self::deserialize_node(reader, &mut seen, 0)
    }

    fn deserialize_node(
        reader: &mut BitArrayReader<'_>,
        seen: &mut [bool; ALPHABET_SIZE],
        depth: usize,
    ) -> Result<HuffNode> {
        let start = reader.bit_position();

        if reader.read_bit()? {
            let value = reader.read_byte()?;
            if std::mem::replace(&mut seen[value as usize], true) {
                return Err(OxiHuffError::corrupted(
                    start,
                    format!("leaf value {value:#04x} appears twice"),
                ));
            }
            return Ok(HuffNode::leaf(0, value));
        }

        if depth >= MAX_DEPTH {
            return Err(OxiHuffError::corrupted(
                start,
                format!("tree nests deeper than {MAX_DEPTH} levels"),
            ));
        }

        let left = Self::deserialize_node(reader, seen, depth + 1)?;
        let right = Self::deserialize_node(reader, seen, depth + 1)?;
        Ok(HuffNode::parent(left, right))
    }
}
