//! Symbol-to-bitstring code tables derived from code trees.
//!
//! Convention, applied identically by encoder and decoder: descending left
//! appends a 1 bit, descending right appends a 0 bit. A degenerate tree
//! with a single leaf assigns that leaf the one-bit code "1", since an
//! empty bitstring cannot be decoded.

use std::collections::HashMap;
use std::fmt;

use foras_core::Result;

use crate::freq::{FrequencyTable, ALPHABET_SIZE};
use crate::tree::{CodeTree, TreeNode};

/// One prefix code: up to 64 bits, most significant bit emitted first.
///
/// Counts are bounded by the u32 header field, which caps the total weight
/// at `256 * u32::MAX` and the tree depth well below 64, so `u64` storage
/// is always sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// Code bits, right-aligned.
    pub bits: u64,
    /// Number of significant bits.
    pub len: u8,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.len).rev() {
            write!(f, "{}", (self.bits >> i) & 1)?;
        }
        Ok(())
    }
}

/// Bidirectional symbol/bitstring lookup used by the encode and decode passes.
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
    /// Reverse lookup: `(length, bits)` to symbol.
    decode: HashMap<(u8, u64), u8>,
    max_len: u8,
}

impl CodeTable {
    /// Derive the code table from a tree by preorder traversal.
    pub fn from_tree(tree: &CodeTree) -> Self {
        let mut table = Self {
            codes: [None; ALPHABET_SIZE],
            decode: HashMap::new(),
            max_len: 0,
        };

        match tree.root() {
            // Single-leaf tree: no internal nodes to descend through, so
            // the lone symbol gets the fixed one-bit code "1".
            TreeNode::Leaf { symbol, .. } => {
                table.assign(*symbol, Code { bits: 1, len: 1 });
            }
            TreeNode::Internal { left, right, .. } => {
                table.walk(left, 1, 1);
                table.walk(right, 0, 1);
            }
        }
        table
    }

    /// Build the tree for `table` and derive its codes in one step.
    ///
    /// Fails with a tree-construction error for an empty frequency table;
    /// an empty code table is never produced silently.
    pub fn from_frequencies(table: &FrequencyTable) -> Result<Self> {
        let tree = CodeTree::build(table)?;
        Ok(Self::from_tree(&tree))
    }

    fn walk(&mut self, node: &TreeNode, bits: u64, len: u8) {
        match node {
            TreeNode::Leaf { symbol, .. } => {
                self.assign(*symbol, Code { bits, len });
            }
            TreeNode::Internal { left, right, .. } => {
                self.walk(left, (bits << 1) | 1, len + 1);
                self.walk(right, bits << 1, len + 1);
            }
        }
    }

    fn assign(&mut self, symbol: u8, code: Code) {
        self.codes[symbol as usize] = Some(code);
        self.decode.insert((code.len, code.bits), symbol);
        self.max_len = self.max_len.max(code.len);
    }

    /// Code for `symbol`, if the symbol occurs in the alphabet.
    #[inline]
    pub fn code(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Symbol whose code is exactly the `len`-bit string `bits`, if any.
    #[inline]
    pub fn lookup(&self, len: u8, bits: u64) -> Option<u8> {
        self.decode.get(&(len, bits)).copied()
    }

    /// Length of the longest code in the table.
    pub fn max_code_len(&self) -> u8 {
        self.max_len
    }

    /// Number of symbols with assigned codes.
    pub fn len(&self) -> usize {
        self.decode.len()
    }

    /// Check if no codes are assigned.
    pub fn is_empty(&self) -> bool {
        self.decode.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as u8, c)))
    }
}
