//! Core type definitions for entropy coding operations.

/// Compression level presets.
///
/// Huffman coding itself has no tunable effort knob, but the level is part
/// of the public codec surface so front ends can pass `-l` style options
/// through uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionLevel {
    /// Optimized for speed over ratio (level 1-3).
    Fast,

    /// Balanced speed and ratio (level 4-6, default).
    #[default]
    Default,

    /// Optimized for ratio over speed (level 7-9).
    Best,

    /// Custom level (algorithm-specific range).
    Custom(i32),
}

impl CompressionLevel {
    /// Convert to numeric level for algorithms.
    pub fn to_level(self) -> i32 {
        match self {
            CompressionLevel::Fast => 1,
            CompressionLevel::Default => 6,
            CompressionLevel::Best => 9,
            CompressionLevel::Custom(level) => level,
        }
    }

    /// Create from numeric level.
    pub fn from_level(level: i32) -> Self {
        match level {
            1..=3 => CompressionLevel::Fast,
            4..=6 => CompressionLevel::Default,
            7..=9 => CompressionLevel::Best,
            _ => CompressionLevel::Custom(level),
        }
    }
}

/// Supported entropy coding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Static Huffman coding over a byte alphabet.
    Huffman,
}

impl Algorithm {
    /// Get algorithm name as string.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Huffman => "huffman",
        }
    }
}

/// Compression ratio metrics.
#[derive(Debug, Clone, Copy)]
pub struct CompressionRatio {
    /// Original uncompressed size in bytes.
    pub original_size: usize,
    /// Compressed size in bytes.
    pub compressed_size: usize,
}

impl CompressionRatio {
    /// Create new ratio from sizes.
    pub fn new(original: usize, compressed: usize) -> Self {
        CompressionRatio {
            original_size: original,
            compressed_size: compressed,
        }
    }

    /// Calculate ratio (original / compressed).
    /// Higher is better (more compression).
    pub fn ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.compressed_size as f64
    }

    /// Calculate space savings as percentage (0-100).
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - (self.compressed_size as f64 / self.original_size as f64)) * 100.0
    }

    /// Calculate bytes saved.
    pub fn bytes_saved(&self) -> isize {
        self.original_size as isize - self.compressed_size as isize
    }

    /// Check if compression was effective (saved space).
    pub fn is_effective(&self) -> bool {
        self.compressed_size < self.original_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_roundtrip() {
        assert_eq!(CompressionLevel::from_level(1), CompressionLevel::Fast);
        assert_eq!(CompressionLevel::from_level(6), CompressionLevel::Default);
        assert_eq!(CompressionLevel::from_level(9), CompressionLevel::Best);
        assert_eq!(
            CompressionLevel::from_level(42),
            CompressionLevel::Custom(42)
        );
        assert_eq!(CompressionLevel::Best.to_level(), 9);
    }

    #[test]
    fn test_ratio_math() {
        let ratio = CompressionRatio::new(1000, 250);
        assert!((ratio.ratio() - 4.0).abs() < f64::EPSILON);
        assert!((ratio.savings_percent() - 75.0).abs() < f64::EPSILON);
        assert_eq!(ratio.bytes_saved(), 750);
        assert!(ratio.is_effective());
    }

    #[test]
    fn test_ratio_degenerate() {
        assert_eq!(CompressionRatio::new(0, 0).ratio(), 0.0);
        assert_eq!(CompressionRatio::new(0, 10).savings_percent(), 0.0);
        assert!(!CompressionRatio::new(10, 20).is_effective());
    }
}
