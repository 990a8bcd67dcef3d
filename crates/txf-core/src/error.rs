//! Error types for txf-core.

use thiserror::Error;

/// Main error type for txf operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from file or stream operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File name missing, empty, or longer than the wire field allows.
    #[error("invalid file name: {message}")]
    Name { message: String },

    /// File length outside the transferable range.
    #[error("invalid file size: {size} bytes exceeds maximum")]
    Size { size: u64 },

    /// Socket setup failure: connect, bind, listen, or accept.
    #[error("network error: {message}")]
    Network { message: String },

    /// Protocol violation: bad magic or malformed header.
    #[error("protocol error: {message}")]
    Protocol { message: String },

    /// The peer closed the stream mid-exchange.
    #[error("connection closed by peer")]
    ConnectionClosed,

    /// Invalid command-line argument shape.
    #[error("usage error: {message}")]
    Usage { message: String },
}

/// Convenience result type for txf operations.
pub type Result<T> = std::result::Result<T, Error>;
