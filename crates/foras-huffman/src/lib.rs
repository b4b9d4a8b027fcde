//! # Foras Huffman
//!
//! Static Huffman entropy coding over the byte alphabet (0-255).
//!
//! The codec makes two passes for compression: one over the input to count
//! symbol frequencies, and one to emit the per-symbol prefix codes. The
//! frequency table itself is serialized ahead of the bit-packed payload, so
//! decompression can rebuild the exact same code tree deterministically and
//! invert the encoding.
//!
//! ## Format
//!
//! ```text
//! [u32 symbol_count]                          big-endian
//! repeat symbol_count times:
//!     [u8 symbol][u32 count]                  big-endian counts
//! [bit-packed payload, MSB-first, zero-padded in the final byte]
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use foras_huffman::{huffman_compress, huffman_decompress};
//!
//! let compressed = huffman_compress(b"abracadabra")?;
//! let original = huffman_decompress(&compressed)?;
//! assert_eq!(original, b"abracadabra");
//! ```

pub mod bitio;
pub mod codec;
pub mod freq;
pub mod heap;
pub mod table;
pub mod tree;

// Re-export main types
pub use codec::HuffmanCodec;
pub use freq::FrequencyTable;
pub use heap::MinHeap;
pub use table::{Code, CodeTable};
pub use tree::{CodeTree, TreeNode};

// Re-export raw functions for advanced use
pub use codec::{huffman_compress, huffman_decompress};
