use bitvec::prelude::*;
use std::collections::BTreeMap;

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node, NodeId};

/// Bit string for one symbol, most significant (first emitted) bit first.
pub type Code = BitBox<u8, Msb0>;

/// Mapping from symbol to its prefix-free code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Walks the tree, `0` for a left descent and `1` for a right one.
    ///
    /// A tree made of a single leaf yields the one-bit code `0` for its
    /// symbol, since an empty code could not be packed.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        fn traverse(
            tree: &HuffmanTree,
            id: NodeId,
            prefix: &mut BitVec<u8, Msb0>,
            codes: &mut BTreeMap<u8, Code>,
        ) {
            match *tree.node(id) {
                Node::Leaf { symbol, .. } => {
                    codes.insert(symbol, prefix.clone().into_boxed_bitslice());
                }
                Node::Internal { left, right, .. } => {
                    prefix.push(false);
                    traverse(tree, left, prefix, codes);
                    prefix.pop();

                    prefix.push(true);
                    traverse(tree, right, prefix, codes);
                    prefix.pop();
                }
            }
        }

        let mut codes = BTreeMap::new();
        let mut prefix: BitVec<u8, Msb0> = BitVec::new();
        if tree.is_single_leaf() {
            prefix.push(false);
        }
        traverse(tree, tree.root(), &mut prefix, &mut codes);

        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(&symbol).map(|c| c.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_bitslice()))
    }

    /// The code for `symbol` as a string of `0`/`1`, for diagnostics.
    pub fn code_string(&self, symbol: u8) -> Option<String> {
        self.get(symbol)
            .map(|c| c.iter().by_vals().map(|b| if b { '1' } else { '0' }).collect())
    }

    /// Number of payload bits needed to encode data with these frequencies.
    ///
    /// `None` if a symbol has no code or the count overflows.
    pub fn encoded_bit_len(&self, freqs: &FrequencyTable) -> Option<u64> {
        freqs.iter().try_fold(0u64, |acc, (symbol, count)| {
            let len = self.codes.get(&symbol)?.len() as u64;
            acc.checked_add(count.checked_mul(len)?)
        })
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        self.codes.iter().all(|(a, ca)| {
            self.codes
                .iter()
                .all(|(b, cb)| a == b || !cb.starts_with(ca.as_bitslice()))
        })
    }
}
