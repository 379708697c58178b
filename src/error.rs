//! Error types for IFO decoding and title resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the IFO decoder.
#[derive(Error, Debug)]
pub enum IfoError {
    /// The 12-byte identifier at the start of the file is not the expected one
    #[error("invalid IFO identifier: expected {expected:?}, found {found:?}")]
    Format {
        expected: &'static str,
        found: String,
    },

    /// A field read reached past the end of the buffer
    #[error("truncated data: {len} byte(s) at offset {offset:#x} exceed buffer of {available} byte(s)")]
    TruncatedData {
        offset: usize,
        len: usize,
        available: usize,
    },

    /// A coded field or count holds a value outside the supported set
    #[error("unsupported value {value} for {field}")]
    UnsupportedStructure { field: &'static str, value: u32 },

    /// A title search entry points outside the decoded title sets
    #[error("title {title} references title set {title_set}, title {title_in_set}: {reason}")]
    DanglingReference {
        title: usize,
        title_set: u8,
        title_in_set: u8,
        reason: &'static str,
    },

    /// A requested IFO file is not available from the source
    #[error("missing IFO file: {0}")]
    MissingFile(String),

    /// An IFO file exceeds the configured size limit
    #[error("IFO file {} is {size} bytes, limit is {limit}", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// A standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, IfoError>;
