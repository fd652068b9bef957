use bitvec::prelude::*;

use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Walks a [`HuffmanTree`] over a packed bit stream.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    tree: &'t HuffmanTree,
}

impl<'t> Decoder<'t> {
    pub fn new(tree: &'t HuffmanTree) -> Self {
        Self { tree }
    }

    /// Decodes the first `bit_len` bits of `payload` into exactly `expected`
    /// symbols. The bits after `bit_len` are padding and must be zero.
    ///
    /// The caller guarantees `bit_len <= payload.len() * 8`.
    pub fn decode(&self, payload: &[u8], bit_len: u64, expected: u64) -> Result<Vec<u8>> {
        let bits = BitSlice::<u8, Msb0>::from_slice(payload);
        let split = usize::try_from(bit_len)
            .ok()
            .filter(|&n| n <= bits.len())
            .ok_or(Error::IncompleteCode)?;
        let (bits, padding) = bits.split_at(split);

        if padding.any() {
            return Err(Error::NonZeroPadding);
        }

        let out = match *self.tree.node(self.tree.root()) {
            Node::Leaf { symbol, .. } => {
                // every occurrence was packed as a lone `0`
                if bits.any() {
                    return Err(Error::InvalidCode);
                }
                vec![symbol; bits.len()]
            }
            Node::Internal { .. } => self.walk(bits)?,
        };

        let actual = out.len() as u64;
        if actual != expected {
            return Err(Error::SymbolCount { expected, actual });
        }

        Ok(out)
    }

    fn walk(&self, bits: &BitSlice<u8, Msb0>) -> Result<Vec<u8>> {
        let root = self.tree.root();
        let mut out = Vec::with_capacity(bits.len() / 2);
        let mut cur = root;

        for bit in bits.iter().by_vals() {
            cur = match *self.tree.node(cur) {
                Node::Internal { left, right, .. } => {
                    if bit {
                        right
                    } else {
                        left
                    }
                }
                Node::Leaf { .. } => return Err(Error::InvalidCode),
            };

            if let Node::Leaf { symbol, .. } = *self.tree.node(cur) {
                out.push(symbol);
                cur = root;
            }
        }

        if cur != root {
            return Err(Error::IncompleteCode);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitPacker;
    use crate::code::CodeTable;
    use crate::frequency::FrequencyTable;

    fn tree_for(data: &[u8]) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::from_bytes(data)).unwrap()
    }

    #[test]
    fn decodes_packed_bits() {
        let data = b"this is an example of a huffman tree";
        let tree = tree_for(data);
        let packed = BitPacker::pack(data, &CodeTable::from_tree(&tree)).unwrap();

        let out = Decoder::new(&tree)
            .decode(&packed.bytes, packed.bit_len, data.len() as u64)
            .unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn single_symbol() {
        let tree = tree_for(b"qqqq");
        let out = Decoder::new(&tree).decode(&[0x00], 4, 4).unwrap();
        assert_eq!(out, b"qqqq");
    }

    #[test]
    fn single_symbol_rejects_one_bits() {
        let tree = tree_for(b"qqqq");
        assert_eq!(
            Decoder::new(&tree).decode(&[0b0100_0000], 4, 4),
            Err(Error::InvalidCode)
        );
    }

    #[test]
    fn stops_mid_code() {
        // a = 1, b = 01, c = 00; "0" alone is half of b or c
        let tree = tree_for(b"aaaaabbc");
        assert_eq!(
            Decoder::new(&tree).decode(&[0b1100_0000], 3, 3),
            Err(Error::IncompleteCode)
        );
    }

    #[test]
    fn nonzero_padding() {
        let tree = tree_for(b"aaaaabbc");
        assert_eq!(
            Decoder::new(&tree).decode(&[0b1110_0001], 3, 3),
            Err(Error::NonZeroPadding)
        );
    }

    #[test]
    fn wrong_symbol_count() {
        let tree = tree_for(b"aaaaabbc");
        assert_eq!(
            Decoder::new(&tree).decode(&[0b1110_0000], 3, 4),
            Err(Error::SymbolCount {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn bit_len_beyond_payload() {
        let tree = tree_for(b"ab");
        assert_eq!(
            Decoder::new(&tree).decode(&[0], 9, 9),
            Err(Error::IncompleteCode)
        );
    }
}
