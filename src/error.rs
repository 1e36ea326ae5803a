//! Error types for the compression pipeline.

use thiserror::Error;

/// Error variants for compression and decompression operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The bitstream ended before a complete tree node or codeword was read.
    #[error("malformed bitstream: {0}")]
    MalformedStream(&'static str),

    /// A codeword was requested for a symbol absent from the code table.
    #[error("symbol {0:#04x} is not in the code table")]
    UnknownSymbol(u8),

    /// An I/O error occurred while reading or writing a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for compression operations.
pub type Result<T> = std::result::Result<T, Error>;
