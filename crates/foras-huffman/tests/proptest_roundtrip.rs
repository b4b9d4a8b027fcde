//! Property-based tests for the Huffman codec.
//!
//! These verify the codec's contract across a wide range of inputs:
//! - compress/decompress roundtrip is lossless, including the empty input
//! - compression is deterministic (byte-identical output for equal input)
//! - derived code tables are prefix-free
//!
//! Run with: cargo test -p foras-huffman --test proptest_roundtrip

use proptest::prelude::*;

use foras_huffman::{huffman_compress, huffman_decompress, CodeTable, FrequencyTable};

/// Strategy for arbitrary byte buffers, biased toward small alphabets
/// (repetitive data exercises deep trees and tie-breaks harder than
/// uniform noise does).
fn byte_buffer_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..2048),
        prop::collection::vec(0u8..4, 0..2048),
        prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b')], 0..2048),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: decompress(compress(S)) == S for all byte sequences S.
    #[test]
    fn prop_roundtrip(input in byte_buffer_strategy()) {
        let compressed = huffman_compress(&input).unwrap();
        let decompressed = huffman_decompress(&compressed).unwrap();
        prop_assert_eq!(decompressed, input);
    }

    /// Property: compressing the same input twice yields identical bytes.
    #[test]
    fn prop_deterministic(input in byte_buffer_strategy()) {
        let first = huffman_compress(&input).unwrap();
        let second = huffman_compress(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: no derived code is a prefix of another.
    #[test]
    fn prop_prefix_free(input in byte_buffer_strategy()) {
        prop_assume!(!input.is_empty());

        let table = FrequencyTable::from_bytes(&input);
        let codes = CodeTable::from_frequencies(&table).unwrap();

        let pairs: Vec<_> = codes.iter().collect();
        for &(sym_a, a) in &pairs {
            for &(sym_b, b) in &pairs {
                if sym_a == sym_b {
                    continue;
                }
                let is_prefix =
                    a.len <= b.len && (b.bits >> (b.len - a.len)) == a.bits;
                prop_assert!(
                    !is_prefix,
                    "code of 0x{:02x} ({}) is a prefix of 0x{:02x} ({})",
                    sym_a, a, sym_b, b
                );
            }
        }
    }

    /// Property: truncating the payload never decodes successfully to the
    /// original length.
    #[test]
    fn prop_truncation_detected(input in prop::collection::vec(any::<u8>(), 64..512)) {
        let compressed = huffman_compress(&input).unwrap();
        let truncated = &compressed[..compressed.len() - 1];

        match huffman_decompress(truncated) {
            Err(_) => {}
            Ok(out) => prop_assert_ne!(out.len(), input.len()),
        }
    }
}
