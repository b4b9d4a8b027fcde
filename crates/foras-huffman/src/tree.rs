//! Optimal prefix-code trees built by Huffman's algorithm.
//!
//! Leaves carry one symbol each with its aggregated count; internal nodes
//! carry only the synthetic weight of their subtree. Every internal node has
//! exactly two children, by construction of the merge loop.

use std::fmt;

use foras_core::{Error, Result};

use crate::freq::FrequencyTable;
use crate::heap::MinHeap;

/// A node of a code tree. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Terminal node holding one symbol and its occurrence count.
    Leaf { symbol: u8, weight: u64 },
    /// Synthetic node holding the sum of its subtree's counts.
    Internal {
        weight: u64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    /// Aggregate weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            TreeNode::Leaf { weight, .. } => *weight,
            TreeNode::Internal { weight, .. } => *weight,
        }
    }

    /// Merge two trees under a new synthetic root.
    ///
    /// The first-extracted tree always becomes the left child and the
    /// second the right child; the codec relies on this being fixed.
    fn merge(left: TreeNode, right: TreeNode) -> TreeNode {
        TreeNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "\t")?;
        }
        match self {
            TreeNode::Leaf { symbol, weight } => {
                if symbol.is_ascii_graphic() {
                    writeln!(f, "|--[{}: {}]", *symbol as char, weight)
                } else {
                    writeln!(f, "|--[0x{symbol:02x}: {weight}]")
                }
            }
            TreeNode::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(f, "|--({weight})")?;
                left.fmt_subtree(f, depth + 1)?;
                right.fmt_subtree(f, depth + 1)
            }
        }
    }
}

/// Binary tree whose shape encodes an optimal prefix code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    root: TreeNode,
}

impl CodeTree {
    /// Build the optimal tree for a non-empty frequency table.
    ///
    /// Single-leaf trees are wrapped around each `(symbol, count)` pair and
    /// inserted into a min-heap in first-occurrence order, then the two
    /// lightest trees are merged until one remains. Given the same ordered
    /// pair list this produces a bit-identical tree on every run.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::tree(
                "cannot build a code tree from an empty frequency table",
            ));
        }

        let mut heap = MinHeap::with_capacity(table.len(), |a: &TreeNode, b: &TreeNode| {
            a.weight().cmp(&b.weight())
        });
        for (symbol, weight) in table.iter() {
            heap.insert(TreeNode::Leaf { symbol, weight });
        }

        while heap.len() > 1 {
            let first = heap.extract_min().expect("heap has at least two trees");
            let second = heap.extract_min().expect("heap has at least two trees");
            heap.insert(TreeNode::merge(first, second));
        }

        let root = heap.extract_min().expect("heap has exactly one tree");
        Ok(Self { root })
    }

    /// Root node of the tree.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Total weight (sum of all symbol counts).
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 1,
                TreeNode::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }
}

impl fmt::Display for CodeTree {
    /// Indented dump of the tree structure, for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_subtree(f, 0)
    }
}
