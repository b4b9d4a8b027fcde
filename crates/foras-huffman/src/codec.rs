//! The Huffman codec: frequency counting, tree building, code derivation,
//! and the bit-level encode/decode passes.

use tracing::debug;

use foras_core::{
    Algorithm, Codec, CompressionLevel, Compressor, Decompressor, Error, Result,
};

use crate::bitio::{BitReader, BitWriter};
use crate::freq::{FrequencyTable, ALPHABET_SIZE};
use crate::table::CodeTable;

/// Size in bytes of the largest possible frequency-table header.
const MAX_HEADER_SIZE: usize = 4 + ALPHABET_SIZE * 5;

/// Compress `input` with a static Huffman code.
///
/// Output layout: big-endian frequency-table header, then the input's
/// per-symbol codes packed MSB-first, final byte zero-padded. Empty input
/// produces a header with a zero symbol count and no payload.
pub fn huffman_compress(input: &[u8]) -> Result<Vec<u8>> {
    let table = FrequencyTable::from_bytes(input);

    let mut writer = BitWriter::with_capacity(MAX_HEADER_SIZE + input.len() / 2);
    table.write_to(&mut writer)?;

    if !table.is_empty() {
        let codes = CodeTable::from_frequencies(&table)?;
        for &byte in input {
            let code = codes
                .code(byte)
                .expect("every input byte was counted in the frequency pass");
            writer.write_bits(code.bits, code.len);
        }
    }

    let output = writer.finish();
    debug!(
        input_len = input.len(),
        output_len = output.len(),
        distinct_symbols = table.len(),
        "huffman compress"
    );
    Ok(output)
}

/// Decompress a buffer produced by [`huffman_compress`].
///
/// The frequency table is read back in its serialized order, which replays
/// the compressor's heap insertion order and rebuilds the identical tree
/// and codes. Symbols are then decoded by longest-prefix match until the
/// expected symbol count is reached.
pub fn huffman_decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(input);
    let table = FrequencyTable::read_from(&mut reader)?;

    if table.is_empty() {
        return Ok(Vec::new());
    }

    let codes = CodeTable::from_frequencies(&table)?;
    let max_len = codes.max_code_len();
    let total = table.total();

    let mut output = Vec::with_capacity(total as usize);
    let mut remaining = total;
    let mut bits: u64 = 0;
    let mut len: u8 = 0;

    while remaining > 0 {
        bits = (bits << 1) | reader.read_bit()? as u64;
        len += 1;

        if let Some(symbol) = codes.lookup(len, bits) {
            output.push(symbol);
            remaining -= 1;
            bits = 0;
            len = 0;
        } else if len >= max_len {
            return Err(Error::corrupted_at(
                "bit sequence matches no code",
                reader.byte_pos(),
            ));
        }
    }

    debug!(
        input_len = input.len(),
        output_len = output.len(),
        distinct_symbols = table.len(),
        "huffman decompress"
    );
    Ok(output)
}

/// Static Huffman codec over the byte alphabet.
///
/// The level is accepted for interface compatibility; Huffman coding is
/// level-independent and always produces the optimal static code.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    level: CompressionLevel,
}

impl HuffmanCodec {
    /// Create a new Huffman codec.
    pub fn new() -> Self {
        Self {
            level: CompressionLevel::Default,
        }
    }

    /// Create with compression level.
    pub fn with_level(level: CompressionLevel) -> Self {
        Self { level }
    }
}

impl Default for HuffmanCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for HuffmanCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn level(&self) -> CompressionLevel {
        self.level
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        huffman_compress(input)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // Worst case: full header plus one maximal code (< 256 bits,
        // i.e. 32 bytes) per input byte, plus the padded trailing byte.
        MAX_HEADER_SIZE + input_len * 32 + 1
    }
}

impl Decompressor for HuffmanCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        huffman_decompress(input)
    }
}

impl Codec for HuffmanCodec {
    fn new() -> Self {
        HuffmanCodec::new()
    }

    fn with_level(level: CompressionLevel) -> Self {
        HuffmanCodec::with_level(level)
    }
}
