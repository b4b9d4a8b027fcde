//! # Foras Core
//!
//! Core traits and types for the Foras entropy coding library.
//!
//! Foras is named after the 31st demon of the Ars Goetia, who teaches logic
//! and the virtues of all herbs and precious stones - a fitting patron for a
//! library whose whole job is finding the minimal logical description of data.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use foras_core::Codec;
//! use foras_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed)?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::CompressionStats;
pub use traits::{Codec, Compressor, Decompressor};
pub use types::{Algorithm, CompressionLevel, CompressionRatio};
