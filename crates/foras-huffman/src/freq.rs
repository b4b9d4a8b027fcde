//! Symbol frequency accounting and header serialization.
//!
//! The table remembers the order in which distinct symbols were first seen.
//! That order is serialized into the compressed header and replayed on
//! decompression, so heap insertion order - and therefore every tie-break
//! during tree construction - matches the compressor's exactly.

use std::fmt;

use foras_core::{Error, Result};

use crate::bitio::{BitReader, BitWriter};

/// Number of distinct byte symbols.
pub const ALPHABET_SIZE: usize = 256;

/// Symbol-to-count mapping with first-occurrence ordering.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
    /// Distinct symbols in the order they were first recorded.
    order: Vec<u8>,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
            order: Vec::new(),
        }
    }

    /// Count symbol frequencies in a single pass over `input`.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in input {
            table.record(byte);
        }
        table
    }

    /// Record one occurrence of `symbol`.
    #[inline]
    pub fn record(&mut self, symbol: u8) {
        if self.counts[symbol as usize] == 0 {
            self.order.push(symbol);
        }
        self.counts[symbol as usize] += 1;
    }

    /// Occurrence count for `symbol` (zero if never seen).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no symbols were recorded.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts (the original input length).
    pub fn total(&self) -> u64 {
        self.order.iter().map(|&s| self.counts[s as usize]).sum()
    }

    /// Iterate `(symbol, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.order.iter().map(|&s| (s, self.counts[s as usize]))
    }

    /// Serialize the table header: distinct-symbol count, then each
    /// `(symbol, count)` pair, counts as big-endian u32.
    pub fn write_to(&self, writer: &mut BitWriter) -> Result<()> {
        writer.write_u32(self.order.len() as u32);
        for (symbol, count) in self.iter() {
            let count = u32::try_from(count).map_err(|_| {
                Error::Unsupported(format!(
                    "symbol 0x{symbol:02x} occurs {count} times, exceeding the u32 header field"
                ))
            })?;
            writer.write_byte(symbol);
            writer.write_u32(count);
        }
        Ok(())
    }

    /// Deserialize a table header, preserving the serialized symbol order.
    pub fn read_from(reader: &mut BitReader<'_>) -> Result<Self> {
        let symbol_count = reader.read_u32()?;
        if symbol_count as usize > ALPHABET_SIZE {
            return Err(Error::corrupted(format!(
                "header claims {symbol_count} distinct symbols, alphabet has {ALPHABET_SIZE}"
            )));
        }

        let mut table = Self::new();
        for _ in 0..symbol_count {
            let symbol = reader.read_byte()?;
            let count = reader.read_u32()?;

            if table.counts[symbol as usize] != 0 {
                return Err(Error::corrupted_at(
                    format!("duplicate symbol 0x{symbol:02x} in header"),
                    reader.byte_pos(),
                ));
            }
            if count == 0 {
                return Err(Error::corrupted_at(
                    format!("zero count for symbol 0x{symbol:02x} in header"),
                    reader.byte_pos(),
                ));
            }

            table.order.push(symbol);
            table.counts[symbol as usize] = count as u64;
        }
        Ok(table)
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if symbol.is_ascii_graphic() {
                write!(f, "[{}: {}]", symbol as char, count)?;
            } else {
                write!(f, "[0x{symbol:02x}: {count}]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass_counting() {
        let table = FrequencyTable::from_bytes(b"abracadabra");
        assert_eq!(table.count(b'a'), 5);
        assert_eq!(table.count(b'b'), 2);
        assert_eq!(table.count(b'r'), 2);
        assert_eq!(table.count(b'c'), 1);
        assert_eq!(table.count(b'd'), 1);
        assert_eq!(table.count(b'z'), 0);
        assert_eq!(table.len(), 5);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_first_occurrence_order() {
        let table = FrequencyTable::from_bytes(b"abracadabra");
        let symbols: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, b"abrcd".to_vec());
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::from_bytes(b"");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_header_roundtrip_preserves_order() {
        let table = FrequencyTable::from_bytes(b"abracadabra");
        let mut writer = BitWriter::new();
        table.write_to(&mut writer).unwrap();
        let bytes = writer.finish();

        // 4 byte count + 5 * (1 + 4) byte pairs
        assert_eq!(bytes.len(), 4 + 5 * 5);

        let mut reader = BitReader::new(&bytes);
        let restored = FrequencyTable::read_from(&mut reader).unwrap();
        let pairs: Vec<(u8, u64)> = restored.iter().collect();
        let expected: Vec<(u8, u64)> = table.iter().collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_header_layout() {
        let table = FrequencyTable::from_bytes(b"AAAAB");
        let mut writer = BitWriter::new();
        table.write_to(&mut writer).unwrap();
        assert_eq!(
            writer.finish(),
            vec![
                0, 0, 0, 2, // symbol_count
                b'A', 0, 0, 0, 4, // A: 4
                b'B', 0, 0, 0, 1, // B: 1
            ]
        );
    }

    #[test]
    fn test_rejects_oversized_symbol_count() {
        let mut writer = BitWriter::new();
        writer.write_u32(257);
        let bytes = writer.finish();
        let mut reader = BitReader::new(&bytes);
        assert!(FrequencyTable::read_from(&mut reader).is_err());
    }

    #[test]
    fn test_rejects_truncated_header() {
        let table = FrequencyTable::from_bytes(b"AAAAB");
        let mut writer = BitWriter::new();
        table.write_to(&mut writer).unwrap();
        let mut bytes = writer.finish();
        bytes.truncate(bytes.len() - 2);

        let mut reader = BitReader::new(&bytes);
        assert!(matches!(
            FrequencyTable::read_from(&mut reader),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_symbol() {
        let mut writer = BitWriter::new();
        writer.write_u32(2);
        writer.write_byte(b'A');
        writer.write_u32(1);
        writer.write_byte(b'A');
        writer.write_u32(2);
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        assert!(FrequencyTable::read_from(&mut reader).is_err());
    }

    #[test]
    fn test_rejects_zero_count() {
        let mut writer = BitWriter::new();
        writer.write_u32(1);
        writer.write_byte(b'A');
        writer.write_u32(0);
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        assert!(FrequencyTable::read_from(&mut reader).is_err());
    }
}
