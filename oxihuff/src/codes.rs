//! Code table construction.
//!
//! Each leaf's code is its root-to-leaf path: `0` for every step left and
//! `1` for every step right. A lone-leaf tree has no path, so its only symbol
//! gets the one-bit code `0`.

use crate::frequency::{ALPHABET_SIZE, Frequencies};
use crate::node::HuffNode;
use oxihuff_core::bitarray::BitArray;

/// Code assigned to the only symbol of a single-leaf tree.
const LONE_LEAF_CODE: bool = false;

/// Mapping from byte value to its Huffman code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<BitArray>>,
}

impl CodeTable {
    /// Assign a code to every leaf of `tree`.
    pub fn from_tree(tree: &HuffNode) -> Self {
        let mut table = Self {
            codes: vec![None; ALPHABET_SIZE],
        };

        match tree {
            HuffNode::Leaf { value, .. } => {
                let mut code = BitArray::with_capacity(1);
                code.append(LONE_LEAF_CODE);
                table.codes[*value as usize] = Some(code);
            }
            HuffNode::Internal { .. } => {
                let mut path = Vec::with_capacity(tree.depth());
                table.assign(tree, &mut path);
            }
        }

        table
    }

    fn assign(&mut self, node: &HuffNode, path: &mut Vec<bool>) {
        match node {
            HuffNode::Leaf { value, .. } => {
                let mut code = BitArray::with_capacity(path.len());
                for &bit in path.iter() {
                    code.append(bit);
                }
                self.codes[*value as usize] = Some(code);
            }
            HuffNode::Internal { left, right, .. } => {
                path.push(false);
                self.assign(left, path);
                path.pop();

                path.push(true);
                self.assign(right, path);
                path.pop();
            }
        }
    }

    /// The code for `byte`, if it occurs in the tree.
    pub fn get(&self, byte: u8) -> Option<&BitArray> {
        self.codes[byte as usize].as_ref()
    }

    /// Number of bytes with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    /// Check if no byte has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Iterate over `(byte, code)` pairs, ascending by byte.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitArray)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(byte, code)| code.as_ref().map(|c| (byte as u8, c)))
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.iter().map(|(_, code)| code.len()).max().unwrap_or(0)
    }

    /// Payload size in bits for a buffer with these frequencies, or `None` if
    /// some counted byte has no code.
    pub fn encoded_bits(&self, freqs: &Frequencies) -> Option<u64> {
        freqs.iter().try_fold(0u64, |total, (byte, count)| {
            let code = self.get(byte)?;
            Some(total + count * code.len() as u64)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_tree;

    fn abc_tree() -> HuffNode {
        let b = HuffNode::leaf(2, b'b');
        let c = HuffNode::leaf(1, b'c');
        let a = HuffNode::leaf(3, b'a');
        HuffNode::parent(a, HuffNode::parent(b, c))
    }

    fn bits(s: &str) -> BitArray {
        BitArray::from_bit_str(s).unwrap()
    }

    #[test]
    fn test_abc_codes() {
        let table = CodeTable::from_tree(&abc_tree());
        assert_eq!(table.get(b'a'), Some(&bits("0")));
        assert_eq!(table.get(b'b'), Some(&bits("10")));
        assert_eq!(table.get(b'c'), Some(&bits("11")));
        assert_eq!(table.get(b'd'), None);
        assert_eq!(table.len(), 3);
        assert_eq!(table.max_code_len(), 2);
    }

    #[test]
    fn test_lone_leaf_gets_one_bit() {
        let table = CodeTable::from_tree(&HuffNode::leaf(10, 0xAA));
        assert_eq!(table.get(0xAA), Some(&bits("0")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let data: Vec<u8> = (0..=255u8)
            .flat_map(|b| std::iter::repeat_n(b, (b as usize % 13) + 1))
            .collect();
        let table = CodeTable::from_tree(&build_tree(&data).unwrap());
        assert_eq!(table.len(), 256);

        let codes: Vec<String> = table.iter().map(|(_, c)| c.to_string()).collect();
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn test_encoded_bits() {
        let table = CodeTable::from_tree(&abc_tree());
        let freqs = Frequencies::from_bytes(b"aaabbc");
        assert_eq!(table.encoded_bits(&freqs), Some(9));
        assert_eq!(table.encoded_bits(&Frequencies::from_bytes(b"az")), None);
    }
}
