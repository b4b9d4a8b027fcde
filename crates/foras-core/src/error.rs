//! Error types for entropy coding operations.

use thiserror::Error;

/// Result type alias for entropy coding operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Entropy coding error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Input data is corrupted or invalid.
    #[error("corrupted data: {message}")]
    CorruptedData { message: String },

    /// Unexpected end of input stream.
    #[error("unexpected EOF after {bytes_read} bytes")]
    UnexpectedEof { bytes_read: usize },

    /// Code tree construction failed.
    #[error("tree construction failed: {message}")]
    TreeConstruction { message: String },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// Invalid compression level specified.
    #[error("invalid compression level {level}: must be in range [{min}, {max}]")]
    InvalidLevel { level: i32, min: i32, max: i32 },

    /// I/O error from underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported feature or format.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
        }
    }

    /// Create a corrupted data error with offset context.
    pub fn corrupted_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptedData {
            message: format!("{} at offset {}", message.into(), offset),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bytes_read: usize) -> Self {
        Error::UnexpectedEof { bytes_read }
    }

    /// Create a tree construction error.
    pub fn tree(message: impl Into<String>) -> Self {
        Error::TreeConstruction {
            message: message.into(),
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Create an I/O error with a custom message.
    pub fn io(message: impl Into<String>) -> Self {
        Error::Io(std::io::Error::other(message.into()))
    }

    /// Check if this error indicates malformed input rather than an
    /// environment failure.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::CorruptedData { .. } | Error::UnexpectedEof { .. }
        )
    }

    /// Get error category for metrics and exit-code mapping.
    pub fn category(&self) -> &'static str {
        match self {
            Error::CorruptedData { .. } => "corrupted_data",
            Error::UnexpectedEof { .. } => "unexpected_eof",
            Error::TreeConstruction { .. } => "tree_construction",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::InvalidLevel { .. } => "invalid_level",
            Error::Io(_) => "io_error",
            Error::Unsupported(_) => "unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::corrupted("bad header");
        assert_eq!(err.to_string(), "corrupted data: bad header");

        let err = Error::unexpected_eof(12);
        assert_eq!(err.to_string(), "unexpected EOF after 12 bytes");
    }

    #[test]
    fn test_format_error_classification() {
        assert!(Error::corrupted("x").is_format_error());
        assert!(Error::unexpected_eof(0).is_format_error());
        assert!(!Error::tree("empty table").is_format_error());
        assert!(!Error::io("open failed").is_format_error());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert_eq!(err.category(), "io_error");
    }
}
