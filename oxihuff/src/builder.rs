//! Huffman tree construction.
//!
//! Leaves are created for every byte value that occurs, in ascending byte
//! order, and pushed into a min-priority queue. The two lightest nodes are
//! merged until one remains. Equal keys are resolved by insertion order, so
//! the same input always produces the same tree.

use crate::frequency::Frequencies;
use crate::node::HuffNode;
use log::{debug, trace};
use oxihuff_core::error::{OxiHuffError, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node waiting in the priority queue.
#[derive(Debug)]
struct QueueEntry {
    node: HuffNode,
    /// Insertion counter, the secondary key.
    sequence: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the lightest,
        // oldest entry on top.
        HuffNode::compare(&other.node, &self.node)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue of nodes keyed by `(key, insertion order)`.
#[derive(Debug, Default)]
struct NodeQueue {
    heap: BinaryHeap<QueueEntry>,
    next_sequence: u64,
}

impl NodeQueue {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    fn push(&mut self, node: HuffNode) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry { node, sequence });
    }

    fn pop(&mut self) -> Option<HuffNode> {
        self.heap.pop().map(|entry| entry.node)
    }
}

/// Build a Huffman tree over the bytes of `data`.
///
/// A buffer with a single distinct byte value yields a lone leaf.
///
/// # Errors
///
/// Returns [`OxiHuffError::EmptyInput`] if `data` is empty.
pub fn build_tree(data: &[u8]) -> Result<HuffNode> {
    if data.is_empty() {
        return Err(OxiHuffError::EmptyInput);
    }

    #[cfg(feature = "parallel")]
    let freqs = Frequencies::from_bytes_parallel(data);
    #[cfg(not(feature = "parallel"))]
    let freqs = Frequencies::from_bytes(data);

    build_tree_from_frequencies(&freqs)
}

/// Build a Huffman tree from a frequency histogram.
///
/// # Errors
///
/// Returns [`OxiHuffError::EmptyInput`] if every count is zero.
pub fn build_tree_from_frequencies(freqs: &Frequencies) -> Result<HuffNode> {
    let mut queue = NodeQueue::with_capacity(freqs.distinct());
    for (value, count) in freqs.iter() {
        queue.push(HuffNode::leaf(count, value));
    }

    loop {
        let Some(first) = queue.pop() else {
            return Err(OxiHuffError::EmptyInput);
        };
        let Some(second) = queue.pop() else {
            debug!(
                "built Huffman tree: {} leaves, depth {}, weight {}",
                first.leaf_count(),
                first.depth(),
                first.key()
            );
            return Ok(first);
        };

        trace!("merging nodes of weight {} and {}", first.key(), second.key());
        queue.push(HuffNode::parent(first, second));
    }
}
