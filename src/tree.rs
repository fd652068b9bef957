use derivative::Derivative;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::frequency::FrequencyTable;

/// Index of a node inside a [`HuffmanTree`] arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u8, weight: u64 },
    Internal { weight: u64, left: NodeId, right: NodeId },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Heap entry. Ordered by weight, then by the order in which it entered the
/// queue; the arena index rides along and takes no part in the ordering.
#[derive(Debug, Clone, Copy, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    weight: u64,
    seq: usize,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: NodeId,
}

/// A Huffman tree stored as a flat arena.
///
/// Leaves are created in ascending symbol order and every merge pops the two
/// lightest entries, breaking weight ties by queue insertion order. Encoder
/// and decoder both build their tree through [`HuffmanTree::build`] from the
/// same frequency table, so they always agree on every code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Returns `None` for an empty table.
    pub fn build(freqs: &FrequencyTable) -> Option<Self> {
        let mut nodes = Vec::with_capacity(freqs.len().saturating_mul(2));
        let mut pq = BinaryHeap::with_capacity(freqs.len());
        let mut seq = 0;

        for (symbol, weight) in freqs.iter() {
            let node = nodes.len();
            nodes.push(Node::Leaf { symbol, weight });
            pq.push(Reverse(Pending { weight, seq, node }));
            seq += 1;
        }

        while pq.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (pq.pop(), pq.pop()) else {
                break;
            };

            // saturating: only reachable from a header whose totals were already rejected
            let weight = left.weight.saturating_add(right.weight);
            let node = nodes.len();
            nodes.push(Node::Internal {
                weight,
                left: left.node,
                right: right.node,
            });
            pq.push(Reverse(Pending { weight, seq, node }));
            seq += 1;
        }

        let root = pq.pop()?.0.node;
        tracing::trace!(nodes = nodes.len(), root, "built huffman tree");

        Some(Self { nodes, root })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total node count, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the whole tree is one leaf, i.e. the input had a single
    /// distinct symbol.
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.nodes[self.root], Node::Leaf { .. })
    }
}
